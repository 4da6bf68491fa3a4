use tempfile::tempdir;
use weekpulse_app_lib::error::AppError;
use weekpulse_app_lib::models::scoping::{ScopingCreateInput, ScopingUpdateInput};
use weekpulse_app_lib::services::analytics_service::AnalyticsService;
use weekpulse_app_lib::services::scoping_service::ScopingService;
use weekpulse_app_lib::store::report_store::ReportStore;
use weekpulse_app_lib::store::scoping_store::ScopingStore;
use weekpulse_app_lib::store::StoreRoot;

fn service(root: &StoreRoot) -> ScopingService {
    ScopingService::new(ScopingStore::new(root.clone()))
}

#[test]
fn create_fills_defaults_and_persists() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path()).expect("store root");
    let service = service(&root);

    let created = service
        .create(ScopingCreateInput {
            customer: "Acme Corp".to_string(),
            ..Default::default()
        })
        .expect("create");
    assert_eq!(created.phase, "Prospecting");
    assert_eq!(created.priority, "Medium");
    assert!(!created.id.is_empty());

    let loaded = service.get(&created.id).expect("reload");
    assert_eq!(loaded, created);
}

#[test]
fn create_rejects_empty_records_and_unknown_choices() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path()).expect("store root");
    let service = service(&root);

    assert!(matches!(
        service.create(ScopingCreateInput::default()),
        Err(AppError::Validation { .. })
    ));

    assert!(matches!(
        service.create(ScopingCreateInput {
            customer: "Acme Corp".to_string(),
            phase: Some("Daydreaming".to_string()),
            ..Default::default()
        }),
        Err(AppError::Validation { .. })
    ));

    assert!(matches!(
        service.create(ScopingCreateInput {
            customer: "Acme Corp".to_string(),
            priority: Some("Urgent-ish".to_string()),
            ..Default::default()
        }),
        Err(AppError::Validation { .. })
    ));

    assert!(service.list(None).expect("list").is_empty());
}

#[test]
fn update_changes_only_given_fields_and_stamps_updated_at() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path()).expect("store root");
    let service = service(&root);

    let created = service
        .create(ScopingCreateInput {
            customer: "Acme Corp".to_string(),
            project: "Rollout".to_string(),
            notes: Some("initial call done".to_string()),
            ..Default::default()
        })
        .expect("create");

    let updated = service
        .update(
            &created.id,
            ScopingUpdateInput {
                phase: Some("Solution Design".to_string()),
                estimated_value: Some("120k".to_string()),
                ..Default::default()
            },
        )
        .expect("update");

    assert_eq!(updated.phase, "Solution Design");
    assert_eq!(updated.estimated_value, "120k");
    assert_eq!(updated.customer, "Acme Corp");
    assert_eq!(updated.notes, "initial call done");
    assert_eq!(updated.created_at, created.created_at);

    assert!(matches!(
        service.update(&created.id, ScopingUpdateInput {
            phase: Some("Nonsense".to_string()),
            ..Default::default()
        }),
        Err(AppError::Validation { .. })
    ));
    assert!(matches!(
        service.update("missing-id", ScopingUpdateInput::default()),
        Err(AppError::NotFound)
    ));
}

#[test]
fn list_orders_by_funnel_position() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path()).expect("store root");
    let service = service(&root);

    for (customer, phase) in [
        ("Late", "Negotiation"),
        ("Early", "Prospecting"),
        ("Mid", "Solution Design"),
    ] {
        service
            .create(ScopingCreateInput {
                customer: customer.to_string(),
                phase: Some(phase.to_string()),
                ..Default::default()
            })
            .expect("create");
    }

    let all = service.list(None).expect("list");
    let order: Vec<&str> = all.iter().map(|a| a.customer.as_str()).collect();
    assert_eq!(order, ["Early", "Mid", "Late"]);

    let filtered = service.list(Some("Prospecting")).expect("filtered list");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].customer, "Early");
}

#[test]
fn delete_removes_the_record() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path()).expect("store root");
    let service = service(&root);

    let created = service
        .create(ScopingCreateInput {
            customer: "Acme Corp".to_string(),
            ..Default::default()
        })
        .expect("create");
    service.delete(&created.id).expect("delete");
    assert!(matches!(service.get(&created.id), Err(AppError::NotFound)));
    assert!(matches!(
        service.delete(&created.id),
        Err(AppError::NotFound)
    ));
}

#[test]
fn dashboard_counts_every_funnel_phase() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path()).expect("store root");
    let service = service(&root);

    service
        .create(ScopingCreateInput {
            customer: "Acme Corp".to_string(),
            phase: Some("Negotiation".to_string()),
            ..Default::default()
        })
        .expect("create");
    service
        .create(ScopingCreateInput {
            customer: "Globex".to_string(),
            phase: Some("Negotiation".to_string()),
            ..Default::default()
        })
        .expect("create");

    let analytics = AnalyticsService::new(
        ReportStore::new(root.clone()),
        ScopingStore::new(root.clone()),
    );
    let overview = analytics.overview().expect("overview");

    // Zero-count phases stay in the distribution.
    assert_eq!(overview.phase_distribution.len(), 13);
    let negotiation = overview
        .phase_distribution
        .iter()
        .find(|bucket| bucket.phase == "Negotiation")
        .expect("bucket");
    assert_eq!(negotiation.count, 2);
    assert!(!negotiation.color.is_empty());
    let prospecting = overview
        .phase_distribution
        .iter()
        .find(|bucket| bucket.phase == "Prospecting")
        .expect("bucket");
    assert_eq!(prospecting.count, 0);
}
