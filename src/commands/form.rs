//! Form-editing commands. These mutate only the in-memory form state, so
//! they run synchronously; every mutation returns the fresh snapshot and
//! the UI re-renders from it wholesale.

use serde::Deserialize;
use tauri::State;

use crate::models::report::{Activity, UpcomingActivity};
use crate::models::text_item::TextItem;
use crate::services::completion;
use crate::services::form::{ReportFormState, TextListField};
use crate::services::list_edit;

use super::{AppState, CommandError, CommandResult};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextItemPayload {
    pub text: String,
    pub project: String,
    pub milestone: String,
}

impl From<TextItemPayload> for TextItem {
    fn from(payload: TextItemPayload) -> Self {
        TextItem::from_parts(payload.text, payload.project, payload.milestone)
    }
}

#[tauri::command]
pub fn form_get(state: State<'_, AppState>) -> ReportFormState {
    state.with_form(|form| form.clone())
}

#[tauri::command]
pub fn form_reset(state: State<'_, AppState>) -> ReportFormState {
    state.with_form(|form| {
        form.reset();
        form.clone()
    })
}

#[tauri::command]
pub fn form_completion(state: State<'_, AppState>) -> u8 {
    state.with_form(|form| completion::score(form))
}

#[tauri::command]
pub fn form_set_identity(
    state: State<'_, AppState>,
    name: String,
    reporting_week: String,
) -> ReportFormState {
    state.with_form(|form| {
        form.name = name;
        form.reporting_week = reporting_week;
        form.clone()
    })
}

#[tauri::command]
pub fn form_text_append(state: State<'_, AppState>, field: TextListField) -> ReportFormState {
    state.with_form(|form| {
        list_edit::append_blank(form.text_list_mut(field));
        form.clone()
    })
}

#[tauri::command]
pub fn form_text_update(
    state: State<'_, AppState>,
    field: TextListField,
    index: usize,
    item: TextItemPayload,
) -> ReportFormState {
    state.with_form(|form| {
        list_edit::update_at(form.text_list_mut(field), index, item.into());
        form.clone()
    })
}

#[tauri::command]
pub fn form_text_remove(
    state: State<'_, AppState>,
    field: TextListField,
    index: usize,
) -> ReportFormState {
    state.with_form(|form| {
        list_edit::remove_at(form.text_list_mut(field), index);
        form.clone()
    })
}

#[tauri::command]
pub fn form_text_reorder(
    state: State<'_, AppState>,
    field: TextListField,
    items: Vec<TextItemPayload>,
) -> ReportFormState {
    state.with_form(|form| {
        let new_order = items.into_iter().map(TextItem::from).collect();
        list_edit::reorder(form.text_list_mut(field), new_order);
        form.clone()
    })
}

#[tauri::command]
pub fn form_current_append(state: State<'_, AppState>) -> ReportFormState {
    state.with_form(|form| {
        list_edit::append_blank(&mut form.current_activities);
        form.clone()
    })
}

#[tauri::command]
pub fn form_current_update(
    state: State<'_, AppState>,
    index: usize,
    activity: Activity,
) -> ReportFormState {
    state.with_form(|form| {
        list_edit::update_at(&mut form.current_activities, index, activity);
        form.clone()
    })
}

#[tauri::command]
pub fn form_current_remove(state: State<'_, AppState>, index: usize) -> ReportFormState {
    state.with_form(|form| {
        list_edit::remove_at(&mut form.current_activities, index);
        form.clone()
    })
}

#[tauri::command]
pub fn form_current_reorder(
    state: State<'_, AppState>,
    activities: Vec<Activity>,
) -> ReportFormState {
    state.with_form(|form| {
        list_edit::reorder(&mut form.current_activities, activities);
        form.clone()
    })
}

#[tauri::command]
pub fn form_upcoming_append(state: State<'_, AppState>) -> ReportFormState {
    state.with_form(|form| {
        list_edit::append_blank(&mut form.upcoming_activities);
        form.clone()
    })
}

#[tauri::command]
pub fn form_upcoming_update(
    state: State<'_, AppState>,
    index: usize,
    activity: UpcomingActivity,
) -> ReportFormState {
    state.with_form(|form| {
        list_edit::update_at(&mut form.upcoming_activities, index, activity);
        form.clone()
    })
}

#[tauri::command]
pub fn form_upcoming_remove(state: State<'_, AppState>, index: usize) -> ReportFormState {
    state.with_form(|form| {
        list_edit::remove_at(&mut form.upcoming_activities, index);
        form.clone()
    })
}

#[tauri::command]
pub fn form_upcoming_reorder(
    state: State<'_, AppState>,
    activities: Vec<UpcomingActivity>,
) -> ReportFormState {
    state.with_form(|form| {
        list_edit::reorder(&mut form.upcoming_activities, activities);
        form.clone()
    })
}

#[tauri::command]
pub fn form_optional_toggle(
    state: State<'_, AppState>,
    key: String,
    enabled: bool,
) -> CommandResult<ReportFormState> {
    state.with_form(|form| {
        let section = form
            .optional_section_mut(&key)
            .ok_or_else(|| unknown_section(&key))?;
        section.enabled = enabled;
        if !enabled {
            section.content.clear();
        }
        Ok(form.clone())
    })
}

#[tauri::command]
pub fn form_optional_set(
    state: State<'_, AppState>,
    key: String,
    content: String,
) -> CommandResult<ReportFormState> {
    state.with_form(|form| {
        let section = form
            .optional_section_mut(&key)
            .ok_or_else(|| unknown_section(&key))?;
        section.content = content;
        Ok(form.clone())
    })
}

fn unknown_section(key: &str) -> CommandError {
    CommandError::new(
        "VALIDATION_ERROR",
        format!("unknown optional section: {key}"),
        None,
    )
}
