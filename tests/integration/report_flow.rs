use tempfile::tempdir;
use weekpulse_app_lib::error::AppError;
use weekpulse_app_lib::models::report::{Activity, ReportListFilter, STATUS_DRAFT, STATUS_SUBMITTED};
use weekpulse_app_lib::models::text_item::TextItem;
use weekpulse_app_lib::services::form::ReportFormState;
use weekpulse_app_lib::services::report_service::{ReportService, SaveOutcome};
use weekpulse_app_lib::store::report_store::ReportStore;
use weekpulse_app_lib::store::StoreRoot;

fn service(root: &StoreRoot) -> ReportService {
    ReportService::new(ReportStore::new(root.clone()))
}

#[test]
fn submit_without_identity_fails_and_leaves_store_empty() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path()).expect("store root");
    let service = service(&root);

    let mut form = ReportFormState::new();
    form.accomplishments = vec![TextItem::Plain("did a thing".to_string())];

    let err = service
        .save(&mut form, STATUS_SUBMITTED)
        .expect_err("submission without name or week must fail");
    match err {
        AppError::Validation { details, .. } => {
            let details = details.expect("missing-field details");
            assert_eq!(
                details["missing"],
                serde_json::json!(["name", "reportingWeek"])
            );
        }
        other => panic!("expected validation error, got {other}"),
    }

    // The failed submit never touched disk.
    assert!(form.report_id.is_none());
    let reports = service
        .list_reports(&ReportListFilter::default())
        .expect("list");
    assert!(reports.is_empty());
}

#[test]
fn draft_can_be_saved_without_identity() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path()).expect("store root");
    let service = service(&root);

    let mut form = ReportFormState::new();
    form.nextsteps = vec![TextItem::Plain("pick a name later".to_string())];

    let result = service.save(&mut form, STATUS_DRAFT).expect("draft save");
    assert_eq!(result.status, STATUS_DRAFT);
    assert_eq!(result.outcome, SaveOutcome::StayInForm);
    assert_eq!(form.report_id.as_deref(), Some(result.report_id.as_str()));

    let record = service.get_report(&result.report_id).expect("load");
    assert_eq!(record.status, STATUS_DRAFT);
    assert_eq!(record.nextsteps.len(), 1);
}

#[test]
fn resubmit_keeps_id_and_timestamp_and_stamps_last_updated() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path()).expect("store root");
    let service = service(&root);

    let mut form = ReportFormState::new();
    form.name = "Dana".to_string();
    form.reporting_week = "2026-W35".to_string();
    form.accomplishments = vec![TextItem::Plain("shipped exporter".to_string())];

    let first = service.save(&mut form, STATUS_SUBMITTED).expect("submit");
    assert_eq!(first.outcome, SaveOutcome::StayInForm);
    let original = service.get_report(&first.report_id).expect("load");
    assert!(original.last_updated.is_none());

    form.accomplishments
        .push(TextItem::Plain("fixed the dashboard".to_string()));
    let second = service.save(&mut form, STATUS_SUBMITTED).expect("resubmit");
    assert_eq!(second.report_id, first.report_id);
    assert_eq!(second.outcome, SaveOutcome::ReturnToView);

    let updated = service.get_report(&first.report_id).expect("reload");
    assert_eq!(updated.timestamp, original.timestamp);
    // RFC 3339 UTC strings compare chronologically.
    let last_updated = updated.last_updated.as_deref().expect("last updated");
    assert!(last_updated > updated.timestamp.as_str());
    assert_eq!(updated.accomplishments.len(), 2);
}

#[test]
fn save_strips_blank_rows_and_clears_flagless_deadlines() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path()).expect("store root");
    let service = service(&root);

    let mut form = ReportFormState::new();
    form.name = "Dana".to_string();
    form.reporting_week = "2026-W35".to_string();

    let mut with_stale_deadline = Activity::default();
    with_stale_deadline.project = "Apollo".to_string();
    with_stale_deadline.has_deadline = false;
    with_stale_deadline.deadline = "2026-09-15".to_string();
    form.current_activities = vec![with_stale_deadline, Activity::default()];
    form.accomplishments = vec![
        TextItem::Plain(String::new()),
        TextItem::Plain("the only real one".to_string()),
    ];

    let result = service.save(&mut form, STATUS_SUBMITTED).expect("submit");
    let record = service.get_report(&result.report_id).expect("load");

    assert_eq!(record.current_activities.len(), 1);
    assert_eq!(record.current_activities[0].deadline, "");
    assert_eq!(record.accomplishments.len(), 1);
    assert_eq!(record.accomplishments[0].text(), "the only real one");

    // The form itself keeps its rows; stripping applies to the saved record.
    assert_eq!(form.current_activities.len(), 2);
}

#[test]
fn open_for_edit_round_trips_through_the_form() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path()).expect("store root");
    let service = service(&root);

    let mut form = ReportFormState::new();
    form.name = "Dana".to_string();
    form.reporting_week = "2026-W35".to_string();
    form.followups = vec![TextItem::from_parts("chase invoice", "Apollo", "")];
    let sections = form
        .optional_section_mut("blockers")
        .expect("registry section");
    sections.enabled = true;
    sections.content = "waiting on access".to_string();
    let saved = service.save(&mut form, STATUS_SUBMITTED).expect("submit");

    let mut fresh = ReportFormState::new();
    service
        .open_for_edit(&saved.report_id, &mut fresh)
        .expect("open");
    assert_eq!(fresh.report_id.as_deref(), Some(saved.report_id.as_str()));
    assert_eq!(fresh.name, "Dana");
    assert_eq!(fresh.followups[0].project(), "Apollo");
    let blockers = fresh
        .optional_sections
        .iter()
        .find(|section| section.key == "blockers")
        .expect("blockers");
    assert!(blockers.enabled);
    assert_eq!(blockers.content, "waiting on access");
}

#[test]
fn optional_sections_nest_on_disk_but_legacy_top_level_files_still_load() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path()).expect("store root");
    let service = service(&root);

    let mut form = ReportFormState::new();
    form.name = "Dana".to_string();
    form.reporting_week = "2026-W35".to_string();
    let section = form
        .optional_section_mut("blockers")
        .expect("registry section");
    section.enabled = true;
    section.content = "waiting on access".to_string();
    let saved = service.save(&mut form, STATUS_SUBMITTED).expect("submit");

    let raw = std::fs::read_to_string(
        root.reports_dir().join(format!("{}.json", saved.report_id)),
    )
    .expect("read file");
    let document: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(
        document["optionalSections"]["blockers"],
        serde_json::json!("waiting on access")
    );
    assert!(document.get("blockers").is_none());

    // Files from the older layout carry sections as top-level keys.
    std::fs::write(
        root.reports_dir().join("legacy.json"),
        serde_json::json!({
            "id": "legacy",
            "name": "Alex",
            "reportingWeek": "2026-W30",
            "status": "submitted",
            "timestamp": "2026-07-24T12:00:00+00:00",
            "notes": "carried over"
        })
        .to_string(),
    )
    .expect("write legacy file");
    let legacy = service.get_report("legacy").expect("load legacy");
    assert_eq!(
        legacy.optional_sections.get("notes").map(String::as_str),
        Some("carried over")
    );
}

#[test]
fn list_filters_and_delete_removes_the_file() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path()).expect("store root");
    let service = service(&root);

    let mut draft = ReportFormState::new();
    draft.name = "Alex".to_string();
    service.save(&mut draft, STATUS_DRAFT).expect("draft");

    let mut submitted = ReportFormState::new();
    submitted.name = "Dana".to_string();
    submitted.reporting_week = "2026-W35".to_string();
    let saved = service
        .save(&mut submitted, STATUS_SUBMITTED)
        .expect("submit");

    let only_submitted = service
        .list_reports(&ReportListFilter {
            status: Some(STATUS_SUBMITTED.to_string()),
            ..Default::default()
        })
        .expect("list");
    assert_eq!(only_submitted.len(), 1);
    assert_eq!(only_submitted[0].name, "Dana");

    service.delete_report(&saved.report_id).expect("delete");
    assert!(matches!(
        service.get_report(&saved.report_id),
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        service.delete_report(&saved.report_id),
        Err(AppError::NotFound)
    ));
}
