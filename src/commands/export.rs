use tauri::{async_runtime, State};

use crate::error::AppError;
use crate::services::export_service;

use super::{AppState, CommandError, CommandResult};

#[tauri::command]
pub async fn export_excel(state: State<'_, AppState>, id: String) -> CommandResult<Vec<u8>> {
    let state = state.inner().clone();
    run_blocking(move || {
        let record = state.reports().get_report(&id)?;
        export_service::to_workbook(&record)
    })
    .await
}

#[tauri::command]
pub async fn export_html(state: State<'_, AppState>, id: String) -> CommandResult<String> {
    let state = state.inner().clone();
    run_blocking(move || {
        let record = state.reports().get_report(&id)?;
        Ok(export_service::to_html(&record))
    })
    .await
}

#[tauri::command]
pub async fn export_email(state: State<'_, AppState>, id: String) -> CommandResult<String> {
    let state = state.inner().clone();
    run_blocking(move || {
        let record = state.reports().get_report(&id)?;
        Ok(export_service::to_email_text(&record))
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
