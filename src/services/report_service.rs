use std::collections::BTreeMap;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::report::{
    Activity, ReportListFilter, ReportRecord, STATUS_DRAFT, STATUS_SUBMITTED,
};
use crate::models::text_item::TextItem;
use crate::services::form::ReportFormState;
use crate::store::report_store::ReportStore;

/// Which view the UI should show after a successful save: a fresh draft or
/// submission stays on the form with a confirmation, an update of an
/// already-persisted report returns to the read view.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SaveOutcome {
    StayInForm,
    ReturnToView,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveResult {
    pub report_id: String,
    pub status: String,
    pub outcome: SaveOutcome,
}

/// Lifecycle manager for weekly reports: collects the form state,
/// validates it, strips blank rows, stamps lifecycle fields, and persists.
#[derive(Clone)]
pub struct ReportService {
    store: ReportStore,
}

impl ReportService {
    pub fn new(store: ReportStore) -> Self {
        Self { store }
    }

    /// Persists the form as `target_status` (draft or submitted).
    ///
    /// Submission requires a name and a reporting week; validation failure
    /// aborts before anything touches disk. On success the form is updated
    /// in place so later saves reuse the id and creation timestamp.
    pub fn save(&self, form: &mut ReportFormState, target_status: &str) -> AppResult<SaveResult> {
        if target_status != STATUS_DRAFT && target_status != STATUS_SUBMITTED {
            return Err(AppError::validation(format!(
                "unknown target status: {target_status}"
            )));
        }

        if target_status == STATUS_SUBMITTED {
            let mut missing = Vec::new();
            if form.name.trim().is_empty() {
                missing.push("name");
            }
            if form.reporting_week.trim().is_empty() {
                missing.push("reportingWeek");
            }
            if !missing.is_empty() {
                return Err(AppError::validation_with_details(
                    "name and reporting week are required to submit",
                    serde_json::json!({ "missing": missing }),
                ));
            }
        }

        let is_update = form.report_id.is_some();
        let id = form
            .report_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let now = Utc::now().to_rfc3339();
        let timestamp = form
            .original_timestamp
            .clone()
            .unwrap_or_else(|| now.clone());
        let last_updated = if is_update { Some(now) } else { None };

        let record = ReportRecord {
            id: id.clone(),
            name: form.name.trim().to_string(),
            reporting_week: form.reporting_week.trim().to_string(),
            status: target_status.to_string(),
            timestamp: timestamp.clone(),
            last_updated,
            current_activities: form
                .current_activities
                .iter()
                .filter(|activity| !activity.is_blank())
                .cloned()
                .map(enforce_deadline_flag)
                .collect(),
            upcoming_activities: form
                .upcoming_activities
                .iter()
                .filter(|activity| !activity.is_blank())
                .cloned()
                .collect(),
            accomplishments: filter_blank_items(&form.accomplishments),
            followups: filter_blank_items(&form.followups),
            nextsteps: filter_blank_items(&form.nextsteps),
            optional_sections: collect_optional_sections(form),
        };

        self.store.save_report(&record)?;

        form.report_id = Some(id.clone());
        form.original_timestamp = Some(timestamp);
        form.status = target_status.to_string();

        let outcome = if is_update {
            SaveOutcome::ReturnToView
        } else {
            SaveOutcome::StayInForm
        };
        info!(target: "app::report", report_id = %id, status = %target_status, update = is_update, "report saved");

        Ok(SaveResult {
            report_id: id,
            status: target_status.to_string(),
            outcome,
        })
    }

    /// Opens a persisted report for editing, replacing the form wholesale.
    pub fn open_for_edit(&self, id: &str, form: &mut ReportFormState) -> AppResult<()> {
        let record = self.store.load_report(id)?;
        debug!(target: "app::report", report_id = %id, "report opened for edit");
        form.load_record(record);
        Ok(())
    }

    pub fn get_report(&self, id: &str) -> AppResult<ReportRecord> {
        self.store.load_report(id)
    }

    pub fn list_reports(&self, filter: &ReportListFilter) -> AppResult<Vec<ReportRecord>> {
        self.store.list_reports(filter)
    }

    pub fn delete_report(&self, id: &str) -> AppResult<()> {
        self.store.delete_report(id)?;
        info!(target: "app::report", report_id = %id, "report deleted");
        Ok(())
    }
}

fn filter_blank_items(items: &[TextItem]) -> Vec<TextItem> {
    items
        .iter()
        .filter(|item| !item.is_blank())
        .cloned()
        .collect()
}

/// An activity whose deadline flag is off never persists a date.
fn enforce_deadline_flag(mut activity: Activity) -> Activity {
    if !activity.has_deadline {
        activity.deadline.clear();
    }
    activity
}

fn collect_optional_sections(form: &ReportFormState) -> BTreeMap<String, String> {
    form.optional_sections
        .iter()
        .filter(|section| section.enabled && !section.content.trim().is_empty())
        .map(|section| (section.key.clone(), section.content.clone()))
        .collect()
}
