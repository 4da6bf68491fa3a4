//! Transient editing state for the report form.
//!
//! This is the typed replacement for a string-keyed session store: every
//! field the form renders is a named struct member, and list fields are
//! guaranteed non-empty so the editor always has a row to draw. The state
//! is replaced wholesale when a persisted report is opened and when the
//! form is reset; nothing here touches disk.

use serde::{Deserialize, Serialize};

use crate::models::options::OPTIONAL_SECTIONS;
use crate::models::report::{Activity, ReportRecord, UpcomingActivity, STATUS_DRAFT};
use crate::models::text_item::TextItem;
use crate::services::list_edit;

/// Which plain-text list a command is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextListField {
    Accomplishments,
    Followups,
    Nextsteps,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptionalSectionState {
    pub key: String,
    pub label: String,
    pub enabled: bool,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportFormState {
    /// Set once the report has been persisted; reused on every later save.
    pub report_id: Option<String>,
    /// Creation timestamp of the loaded report, preserved across edits.
    pub original_timestamp: Option<String>,
    pub status: String,
    pub name: String,
    pub reporting_week: String,
    pub current_activities: Vec<Activity>,
    pub upcoming_activities: Vec<UpcomingActivity>,
    pub accomplishments: Vec<TextItem>,
    pub followups: Vec<TextItem>,
    pub nextsteps: Vec<TextItem>,
    pub optional_sections: Vec<OptionalSectionState>,
}

impl ReportFormState {
    /// Fresh form: one blank row per list, every optional section known to
    /// the registry present but disabled.
    pub fn new() -> Self {
        Self {
            report_id: None,
            original_timestamp: None,
            status: STATUS_DRAFT.to_string(),
            name: String::new(),
            reporting_week: String::new(),
            current_activities: list_edit::non_empty(Vec::new()),
            upcoming_activities: list_edit::non_empty(Vec::new()),
            accomplishments: list_edit::non_empty(Vec::new()),
            followups: list_edit::non_empty(Vec::new()),
            nextsteps: list_edit::non_empty(Vec::new()),
            optional_sections: OPTIONAL_SECTIONS
                .iter()
                .map(|(key, label)| OptionalSectionState {
                    key: (*key).to_string(),
                    label: (*label).to_string(),
                    enabled: false,
                    content: String::new(),
                })
                .collect(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Wholesale replacement from a persisted record; any in-progress edits
    /// are discarded, never merged.
    pub fn load_record(&mut self, record: ReportRecord) {
        let mut state = Self::new();
        state.report_id = Some(record.id);
        state.original_timestamp = if record.timestamp.is_empty() {
            None
        } else {
            Some(record.timestamp)
        };
        state.status = record.status;
        state.name = record.name;
        state.reporting_week = record.reporting_week;
        state.current_activities = list_edit::non_empty(record.current_activities);
        state.upcoming_activities = list_edit::non_empty(record.upcoming_activities);
        state.accomplishments = list_edit::non_empty(record.accomplishments);
        state.followups = list_edit::non_empty(record.followups);
        state.nextsteps = list_edit::non_empty(record.nextsteps);
        for section in &mut state.optional_sections {
            if let Some(content) = record.optional_sections.get(&section.key) {
                section.enabled = true;
                section.content = content.clone();
            }
        }
        *self = state;
    }

    /// Seeds activity lists and optional sections from a template without
    /// touching identity or lifecycle fields.
    pub fn apply_template(
        &mut self,
        current: Vec<Activity>,
        upcoming: Vec<UpcomingActivity>,
        sections: &std::collections::BTreeMap<String, String>,
    ) {
        self.current_activities = list_edit::non_empty(current);
        self.upcoming_activities = list_edit::non_empty(upcoming);
        for section in &mut self.optional_sections {
            match sections.get(&section.key) {
                Some(content) => {
                    section.enabled = true;
                    section.content = content.clone();
                }
                None => {
                    section.enabled = false;
                    section.content.clear();
                }
            }
        }
    }

    pub fn text_list(&self, field: TextListField) -> &Vec<TextItem> {
        match field {
            TextListField::Accomplishments => &self.accomplishments,
            TextListField::Followups => &self.followups,
            TextListField::Nextsteps => &self.nextsteps,
        }
    }

    pub fn text_list_mut(&mut self, field: TextListField) -> &mut Vec<TextItem> {
        match field {
            TextListField::Accomplishments => &mut self.accomplishments,
            TextListField::Followups => &mut self.followups,
            TextListField::Nextsteps => &mut self.nextsteps,
        }
    }

    pub fn optional_section_mut(&mut self, key: &str) -> Option<&mut OptionalSectionState> {
        self.optional_sections
            .iter_mut()
            .find(|section| section.key == key)
    }
}

impl Default for ReportFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn fresh_form_has_one_row_per_list() {
        let form = ReportFormState::new();
        assert_eq!(form.current_activities.len(), 1);
        assert_eq!(form.upcoming_activities.len(), 1);
        assert_eq!(form.accomplishments.len(), 1);
        assert_eq!(form.followups.len(), 1);
        assert_eq!(form.nextsteps.len(), 1);
        assert!(form.current_activities[0].is_blank());
        assert!(form.optional_sections.iter().all(|s| !s.enabled));
    }

    #[test]
    fn loading_a_record_replaces_pending_edits() {
        let mut form = ReportFormState::new();
        form.name = "half-typed".to_string();
        form.accomplishments = vec![TextItem::Plain("unsaved".to_string())];

        let mut sections = BTreeMap::new();
        sections.insert("blockers".to_string(), "waiting on infra".to_string());
        let record = ReportRecord {
            id: "r1".to_string(),
            name: "Dana".to_string(),
            reporting_week: "2026-W35".to_string(),
            status: "submitted".to_string(),
            timestamp: "2026-08-28T12:00:00+00:00".to_string(),
            last_updated: None,
            current_activities: Vec::new(),
            upcoming_activities: Vec::new(),
            accomplishments: vec![TextItem::Plain("shipped".to_string())],
            followups: Vec::new(),
            nextsteps: Vec::new(),
            optional_sections: sections,
        };

        form.load_record(record);
        assert_eq!(form.report_id.as_deref(), Some("r1"));
        assert_eq!(form.name, "Dana");
        assert_eq!(form.accomplishments.len(), 1);
        assert_eq!(form.accomplishments[0].text(), "shipped");
        // Empty persisted lists come back with one editable row.
        assert_eq!(form.followups.len(), 1);
        assert!(form.followups[0].is_blank());

        let blockers = form
            .optional_sections
            .iter()
            .find(|s| s.key == "blockers")
            .expect("registry section");
        assert!(blockers.enabled);
        assert_eq!(blockers.content, "waiting on infra");
    }

    #[test]
    fn reset_returns_to_factory_state() {
        let mut form = ReportFormState::new();
        form.name = "someone".to_string();
        form.reset();
        assert_eq!(form, ReportFormState::new());
    }
}
