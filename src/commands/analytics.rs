use tauri::{async_runtime, State};

use crate::error::AppError;
use crate::models::analytics::DashboardOverview;

use super::{AppState, CommandError, CommandResult};

#[tauri::command]
pub async fn analytics_overview(state: State<'_, AppState>) -> CommandResult<DashboardOverview> {
    let state = state.inner().clone();
    run_blocking(move || state.analytics().overview()).await
}

async fn run_blocking<T: Send + 'static>(
    task: impl FnOnce() -> Result<T, AppError> + Send + 'static,
) -> CommandResult<T> {
    async_runtime::spawn_blocking(task)
        .await
        .map_err(|err| CommandError::new("UNKNOWN", format!("task execution failed: {err}"), None))?
        .map_err(CommandError::from)
}
