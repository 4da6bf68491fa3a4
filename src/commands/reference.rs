use serde::Serialize;
use tauri::State;

use crate::models::options::{
    ACTIVITY_STATUS_OPTIONS, ASDF_PHASES, BILLABLE_OPTIONS, OPTIONAL_SECTIONS, PRIORITY_OPTIONS,
    VALID_REPORT_STATUSES,
};

use super::{AppState, CommandResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseOption {
    pub name: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionOption {
    pub key: &'static str,
    pub label: &'static str,
}

/// Dropdown choices and section registry, pushed to the frontend in one call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionCatalog {
    pub report_statuses: &'static [&'static str],
    pub priorities: &'static [&'static str],
    pub activity_statuses: &'static [&'static str],
    pub billable: &'static [&'static str],
    pub scoping_phases: Vec<PhaseOption>,
    pub optional_sections: Vec<SectionOption>,
}

#[tauri::command]
pub fn options_get() -> OptionCatalog {
    OptionCatalog {
        report_statuses: VALID_REPORT_STATUSES,
        priorities: PRIORITY_OPTIONS,
        activity_statuses: ACTIVITY_STATUS_OPTIONS,
        billable: BILLABLE_OPTIONS,
        scoping_phases: ASDF_PHASES
            .iter()
            .map(|&(name, color)| PhaseOption { name, color })
            .collect(),
        optional_sections: OPTIONAL_SECTIONS
            .iter()
            .map(|&(key, label)| SectionOption { key, label })
            .collect(),
    }
}

#[tauri::command]
pub fn reference_projects(
    state: State<'_, AppState>,
    user: Option<String>,
) -> CommandResult<Vec<String>> {
    let reference = state.reference();
    Ok(match user {
        Some(user) if !user.trim().is_empty() => reference.projects_for_user(&user),
        _ => reference.all_projects(),
    })
}

#[tauri::command]
pub fn reference_milestones(
    state: State<'_, AppState>,
    project: String,
) -> CommandResult<Vec<String>> {
    Ok(state.reference().milestones_for_project(&project))
}
