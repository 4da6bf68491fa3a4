pub mod commands;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    if let Err(error) = try_run() {
        eprintln!("failed to launch application: {error}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let handle = app.handle();

            crate::utils::logger::init_logging(&handle)
                .map_err(|err| Box::new(err) as Box<dyn std::error::Error>)?;

            let data_dir = handle
                .path()
                .app_data_dir()
                .map_err(|err| Box::new(err) as Box<dyn std::error::Error>)?;

            std::fs::create_dir_all(&data_dir)?;

            let root = crate::store::StoreRoot::new(&data_dir)
                .map_err(|err| Box::new(err) as Box<dyn std::error::Error>)?;

            let state = crate::commands::AppState::new(root)
                .map_err(|err| Box::new(err) as Box<dyn std::error::Error>)?;
            app.manage(state);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            crate::commands::report::reports_list,
            crate::commands::report::reports_get,
            crate::commands::report::reports_delete,
            crate::commands::report::report_save,
            crate::commands::report::report_open,
            crate::commands::form::form_get,
            crate::commands::form::form_reset,
            crate::commands::form::form_completion,
            crate::commands::form::form_set_identity,
            crate::commands::form::form_text_append,
            crate::commands::form::form_text_update,
            crate::commands::form::form_text_remove,
            crate::commands::form::form_text_reorder,
            crate::commands::form::form_current_append,
            crate::commands::form::form_current_update,
            crate::commands::form::form_current_remove,
            crate::commands::form::form_current_reorder,
            crate::commands::form::form_upcoming_append,
            crate::commands::form::form_upcoming_update,
            crate::commands::form::form_upcoming_remove,
            crate::commands::form::form_upcoming_reorder,
            crate::commands::form::form_optional_toggle,
            crate::commands::form::form_optional_set,
            crate::commands::export::export_excel,
            crate::commands::export::export_html,
            crate::commands::export::export_email,
            crate::commands::scoping::scoping_list,
            crate::commands::scoping::scoping_get,
            crate::commands::scoping::scoping_create,
            crate::commands::scoping::scoping_update,
            crate::commands::scoping::scoping_delete,
            crate::commands::template::templates_list,
            crate::commands::template::templates_get,
            crate::commands::template::templates_create,
            crate::commands::template::templates_update,
            crate::commands::template::templates_delete,
            crate::commands::template::templates_apply,
            crate::commands::analytics::analytics_overview,
            crate::commands::reference::options_get,
            crate::commands::reference::reference_projects,
            crate::commands::reference::reference_milestones,
        ])
        .run(tauri::generate_context!())?;

    Ok(())
}
