use tempfile::tempdir;
use weekpulse_app_lib::error::AppError;
use weekpulse_app_lib::models::report::Activity;
use weekpulse_app_lib::models::template::TemplateCreateInput;
use weekpulse_app_lib::services::form::ReportFormState;
use weekpulse_app_lib::services::template_service::TemplateService;
use weekpulse_app_lib::store::template_store::TemplateStore;
use weekpulse_app_lib::store::StoreRoot;

fn service(root: &StoreRoot) -> TemplateService {
    TemplateService::new(TemplateStore::new(root.clone()))
}

fn form_with_activities() -> ReportFormState {
    let mut form = ReportFormState::new();
    form.name = "Dana".to_string();
    form.reporting_week = "2026-W35".to_string();

    let mut activity = Activity::default();
    activity.project = "Apollo".to_string();
    activity.customer = "Acme Corp".to_string();
    form.current_activities = vec![activity];

    let section = form
        .optional_section_mut("notes")
        .expect("registry section");
    section.enabled = true;
    section.content = "standing agenda".to_string();
    form
}

#[test]
fn create_snapshots_activities_but_not_identity() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path()).expect("store root");
    let service = service(&root);
    let form = form_with_activities();

    let template = service
        .create_from_form(
            TemplateCreateInput {
                name: "My weekly layout".to_string(),
                user_id: "u1".to_string(),
                user_name: "Dana".to_string(),
                is_shared: None,
            },
            &form,
        )
        .expect("create");

    assert_eq!(template.current_activities.len(), 1);
    assert_eq!(template.current_activities[0].project, "Apollo");
    assert_eq!(
        template.optional_sections.get("notes").map(String::as_str),
        Some("standing agenda")
    );
    assert!(!template.is_shared);

    let reloaded = service.get(&template.id, "u1").expect("reload");
    assert_eq!(reloaded, template);
}

#[test]
fn create_requires_name_and_owner() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path()).expect("store root");
    let service = service(&root);
    let form = ReportFormState::new();

    assert!(matches!(
        service.create_from_form(
            TemplateCreateInput {
                name: " ".to_string(),
                user_id: "u1".to_string(),
                ..Default::default()
            },
            &form,
        ),
        Err(AppError::Validation { .. })
    ));
    assert!(matches!(
        service.create_from_form(
            TemplateCreateInput {
                name: "layout".to_string(),
                user_id: String::new(),
                ..Default::default()
            },
            &form,
        ),
        Err(AppError::Validation { .. })
    ));
}

#[test]
fn sharing_gates_visibility_and_ownership_gates_deletion() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path()).expect("store root");
    let service = service(&root);
    let form = form_with_activities();

    let private = service
        .create_from_form(
            TemplateCreateInput {
                name: "Private layout".to_string(),
                user_id: "u1".to_string(),
                user_name: "Dana".to_string(),
                is_shared: Some(false),
            },
            &form,
        )
        .expect("create");
    let shared = service
        .create_from_form(
            TemplateCreateInput {
                name: "Team layout".to_string(),
                user_id: "u1".to_string(),
                user_name: "Dana".to_string(),
                is_shared: Some(true),
            },
            &form,
        )
        .expect("create");

    assert!(matches!(
        service.get(&private.id, "u2"),
        Err(AppError::Forbidden { .. })
    ));
    assert!(service.get(&shared.id, "u2").is_ok());

    let visible_to_u2 = service.list_for_user("u2").expect("list");
    assert_eq!(visible_to_u2.len(), 1);
    assert_eq!(visible_to_u2[0].name, "Team layout");
    assert_eq!(service.list_for_user("u1").expect("list").len(), 2);

    // Shared templates are still only deletable by their owner.
    assert!(matches!(
        service.delete(&shared.id, "u2"),
        Err(AppError::Forbidden { .. })
    ));
    service.delete(&shared.id, "u1").expect("owner delete");
    assert!(matches!(
        service.get(&shared.id, "u1"),
        Err(AppError::NotFound)
    ));
}

#[test]
fn apply_seeds_the_form_without_touching_identity() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path()).expect("store root");
    let service = service(&root);

    let template = service
        .create_from_form(
            TemplateCreateInput {
                name: "Layout".to_string(),
                user_id: "u1".to_string(),
                user_name: "Dana".to_string(),
                is_shared: None,
            },
            &form_with_activities(),
        )
        .expect("create");

    let mut target = ReportFormState::new();
    target.name = "Alex".to_string();
    target.reporting_week = "2026-W36".to_string();
    let kudos = target.optional_section_mut("kudos").expect("section");
    kudos.enabled = true;
    kudos.content = "great demo".to_string();

    service
        .apply_to_form(&template.id, "u1", &mut target)
        .expect("apply");

    assert_eq!(target.name, "Alex");
    assert_eq!(target.reporting_week, "2026-W36");
    assert_eq!(target.current_activities[0].project, "Apollo");
    let notes = target
        .optional_sections
        .iter()
        .find(|section| section.key == "notes")
        .expect("notes");
    assert!(notes.enabled);
    assert_eq!(notes.content, "standing agenda");
    // Sections absent from the template are switched off.
    let kudos = target
        .optional_sections
        .iter()
        .find(|section| section.key == "kudos")
        .expect("kudos");
    assert!(!kudos.enabled);
    assert!(kudos.content.is_empty());
}

#[test]
fn update_preserves_owner_and_creation_time() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path()).expect("store root");
    let service = service(&root);

    let mut template = service
        .create_from_form(
            TemplateCreateInput {
                name: "Layout".to_string(),
                user_id: "u1".to_string(),
                user_name: "Dana".to_string(),
                is_shared: None,
            },
            &form_with_activities(),
        )
        .expect("create");

    template.name = "Layout v2".to_string();
    template.is_shared = true;
    let updated = service.update("u1", template.clone()).expect("update");
    assert_eq!(updated.name, "Layout v2");
    assert!(updated.is_shared);
    assert_eq!(updated.user_id, "u1");
    assert_eq!(updated.created_at, template.created_at);

    assert!(matches!(
        service.update("u2", updated),
        Err(AppError::Forbidden { .. })
    ));
}
