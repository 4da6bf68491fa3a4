use tauri::{async_runtime, State};

use crate::error::AppError;
use crate::models::template::{ReportTemplate, TemplateCreateInput};
use crate::services::form::ReportFormState;

use super::{AppState, CommandError, CommandResult};

#[tauri::command]
pub async fn templates_list(
    state: State<'_, AppState>,
    user_id: String,
) -> CommandResult<Vec<ReportTemplate>> {
    let state = state.inner().clone();
    run_blocking(move || state.templates().list_for_user(&user_id)).await
}

#[tauri::command]
pub async fn templates_get(
    state: State<'_, AppState>,
    id: String,
    user_id: String,
) -> CommandResult<ReportTemplate> {
    let state = state.inner().clone();
    run_blocking(move || state.templates().get(&id, &user_id)).await
}

/// Snapshots the current form into a new template.
#[tauri::command]
pub async fn templates_create(
    state: State<'_, AppState>,
    payload: TemplateCreateInput,
) -> CommandResult<ReportTemplate> {
    let state = state.inner().clone();
    run_blocking(move || {
        let service = state.templates();
        state.with_form(|form| service.create_from_form(payload, form))
    })
    .await
}

#[tauri::command]
pub async fn templates_update(
    state: State<'_, AppState>,
    user_id: String,
    template: ReportTemplate,
) -> CommandResult<ReportTemplate> {
    let state = state.inner().clone();
    run_blocking(move || state.templates().update(&user_id, template)).await
}

#[tauri::command]
pub async fn templates_delete(
    state: State<'_, AppState>,
    id: String,
    user_id: String,
) -> CommandResult<()> {
    let state = state.inner().clone();
    run_blocking(move || state.templates().delete(&id, &user_id)).await
}

/// Loads a template's snapshot into the form and returns the new snapshot.
#[tauri::command]
pub async fn templates_apply(
    state: State<'_, AppState>,
    id: String,
    user_id: String,
) -> CommandResult<ReportFormState> {
    let state = state.inner().clone();
    run_blocking(move || {
        let service = state.templates();
        state.with_form(|form| {
            service.apply_to_form(&id, &user_id, form)?;
            Ok(form.clone())
        })
    })
    .await
}

async fn run_blocking<T: Send + 'static>(
    task: impl FnOnce() -> Result<T, AppError> + Send + 'static,
) -> CommandResult<T> {
    async_runtime::spawn_blocking(task)
        .await
        .map_err(|err| CommandError::new("UNKNOWN", format!("task execution failed: {err}"), None))?
        .map_err(CommandError::from)
}
