use tauri::{async_runtime, State};

use crate::error::AppError;
use crate::models::scoping::{ScopingActivity, ScopingCreateInput, ScopingUpdateInput};

use super::{AppState, CommandError, CommandResult};

#[tauri::command]
pub async fn scoping_list(
    state: State<'_, AppState>,
    phase: Option<String>,
) -> CommandResult<Vec<ScopingActivity>> {
    let state = state.inner().clone();
    run_blocking(move || state.scoping().list(phase.as_deref())).await
}

#[tauri::command]
pub async fn scoping_get(state: State<'_, AppState>, id: String) -> CommandResult<ScopingActivity> {
    let state = state.inner().clone();
    run_blocking(move || state.scoping().get(&id)).await
}

#[tauri::command]
pub async fn scoping_create(
    state: State<'_, AppState>,
    payload: ScopingCreateInput,
) -> CommandResult<ScopingActivity> {
    let state = state.inner().clone();
    run_blocking(move || state.scoping().create(payload)).await
}

#[tauri::command]
pub async fn scoping_update(
    state: State<'_, AppState>,
    id: String,
    payload: ScopingUpdateInput,
) -> CommandResult<ScopingActivity> {
    let state = state.inner().clone();
    run_blocking(move || state.scoping().update(&id, payload)).await
}

#[tauri::command]
pub async fn scoping_delete(state: State<'_, AppState>, id: String) -> CommandResult<()> {
    let state = state.inner().clone();
    run_blocking(move || state.scoping().delete(&id)).await
}

async fn run_blocking<T: Send + 'static>(
    task: impl FnOnce() -> Result<T, AppError> + Send + 'static,
) -> CommandResult<T> {
    async_runtime::spawn_blocking(task)
        .await
        .map_err(|err| CommandError::new("UNKNOWN", format!("task execution failed: {err}"), None))?
        .map_err(CommandError::from)
}
