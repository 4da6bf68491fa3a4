use tauri::{async_runtime, State};

use crate::error::AppError;
use crate::models::report::{ReportListFilter, ReportRecord};
use crate::services::form::ReportFormState;
use crate::services::report_service::SaveResult;

use super::{AppState, CommandError, CommandResult};

#[tauri::command]
pub async fn reports_list(
    state: State<'_, AppState>,
    filter: Option<ReportListFilter>,
) -> CommandResult<Vec<ReportRecord>> {
    let state = state.inner().clone();
    let filter = filter.unwrap_or_default();
    run_blocking(move || state.reports().list_reports(&filter)).await
}

#[tauri::command]
pub async fn reports_get(state: State<'_, AppState>, id: String) -> CommandResult<ReportRecord> {
    let state = state.inner().clone();
    run_blocking(move || state.reports().get_report(&id)).await
}

#[tauri::command]
pub async fn reports_delete(state: State<'_, AppState>, id: String) -> CommandResult<()> {
    let state = state.inner().clone();
    run_blocking(move || state.reports().delete_report(&id)).await
}

/// Persists the shared form as a draft or submission.
#[tauri::command]
pub async fn report_save(
    state: State<'_, AppState>,
    target_status: String,
) -> CommandResult<SaveResult> {
    let state = state.inner().clone();
    run_blocking(move || {
        let service = state.reports();
        state.with_form(|form| service.save(form, &target_status))
    })
    .await
}

/// Opens a persisted report into the shared form and returns the new form
/// snapshot.
#[tauri::command]
pub async fn report_open(
    state: State<'_, AppState>,
    id: String,
) -> CommandResult<ReportFormState> {
    let state = state.inner().clone();
    run_blocking(move || {
        let service = state.reports();
        state.with_form(|form| {
            service.open_for_edit(&id, form)?;
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
