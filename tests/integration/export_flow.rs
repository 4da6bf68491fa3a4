use tempfile::tempdir;
use weekpulse_app_lib::models::report::{Activity, UpcomingActivity, STATUS_SUBMITTED};
use weekpulse_app_lib::models::text_item::TextItem;
use weekpulse_app_lib::services::export_service;
use weekpulse_app_lib::services::form::ReportFormState;
use weekpulse_app_lib::services::report_service::ReportService;
use weekpulse_app_lib::store::report_store::ReportStore;
use weekpulse_app_lib::store::StoreRoot;

fn submitted_report(service: &ReportService) -> String {
    let mut form = ReportFormState::new();
    form.name = "Dana".to_string();
    form.reporting_week = "2026-W35".to_string();

    let mut activity = Activity::default();
    activity.project = "Apollo".to_string();
    activity.milestone = "Phase 2".to_string();
    activity.priority = "High".to_string();
    activity.status = "In Progress".to_string();
    activity.progress = 60;
    form.current_activities = vec![activity];

    let mut upcoming = UpcomingActivity::default();
    upcoming.project = "Hermes".to_string();
    upcoming.expected_start = "2026-09-07".to_string();
    form.upcoming_activities = vec![upcoming];

    form.accomplishments = vec![
        TextItem::Plain("Shipped v2".to_string()),
        TextItem::from_parts("Closed audit", "Apollo", "Phase 2"),
    ];
    form.nextsteps = vec![TextItem::Plain("Deploy to prod".to_string())];

    let section = form
        .optional_section_mut("blockers")
        .expect("registry section");
    section.enabled = true;
    section.content = "waiting on infra team".to_string();

    service
        .save(&mut form, STATUS_SUBMITTED)
        .expect("submit")
        .report_id
}

#[test]
fn saved_report_exports_to_all_three_formats() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path()).expect("store root");
    let service = ReportService::new(ReportStore::new(root));
    let id = submitted_report(&service);
    let record = service.get_report(&id).expect("load");

    let workbook = export_service::to_workbook(&record).expect("workbook");
    // xlsx is a zip container.
    assert_eq!(&workbook[..2], b"PK");
    assert!(workbook.len() > 500);

    let html = export_service::to_html(&record);
    assert!(html.contains("Weekly Report - Dana"));
    assert!(html.contains("Apollo"));
    assert!(html.contains("class=\"priority-high\""));
    assert!(html.contains("waiting on infra team"));
    // No follow-ups were entered, so the section is absent.
    assert!(!html.contains("Follow-ups"));

    let email = export_service::to_email_text(&record);
    assert!(email.starts_with("Weekly Status Report - Dana"));
    let accomplishments = email.find("Accomplishments:").expect("section");
    let current = email.find("Current Activities:").expect("section");
    assert!(accomplishments < current);
    assert!(email.trim_end().ends_with("Sent with WeekPulse"));
}

#[test]
fn exports_omit_sections_the_report_never_filled() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path()).expect("store root");
    let service = ReportService::new(ReportStore::new(root));

    let mut form = ReportFormState::new();
    form.name = "Alex".to_string();
    form.reporting_week = "2026-W35".to_string();
    form.accomplishments = vec![TextItem::Plain("only this".to_string())];
    let id = service
        .save(&mut form, STATUS_SUBMITTED)
        .expect("submit")
        .report_id;
    let record = service.get_report(&id).expect("load");

    let html = export_service::to_html(&record);
    assert!(html.contains("Accomplishments"));
    assert!(!html.contains("Current Activities"));
    assert!(!html.contains("Upcoming Activities"));
    assert!(!html.contains("Next Steps"));

    let email = export_service::to_email_text(&record);
    assert!(!email.contains("Current Activities:"));
    assert!(!email.contains("Next Steps:"));
}

#[test]
fn html_escapes_markup_in_user_content() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path()).expect("store root");
    let service = ReportService::new(ReportStore::new(root));

    let mut form = ReportFormState::new();
    form.name = "<b>Dana</b>".to_string();
    form.reporting_week = "2026-W35".to_string();
    form.accomplishments = vec![TextItem::Plain("<script>alert(1)</script>".to_string())];
    let id = service
        .save(&mut form, STATUS_SUBMITTED)
        .expect("submit")
        .report_id;
    let record = service.get_report(&id).expect("load");

    let html = export_service::to_html(&record);
    assert!(!html.contains("<script>alert"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("&lt;b&gt;Dana&lt;/b&gt;"));
}
