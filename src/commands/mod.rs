pub mod analytics;
pub mod export;
pub mod form;
pub mod report;
pub mod reference;
pub mod scoping;
pub mod template;

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::error;

use crate::error::{AppError, AppResult};
use crate::services::analytics_service::AnalyticsService;
use crate::services::form::ReportFormState;
use crate::services::reference_data::ReferenceDataService;
use crate::services::report_service::ReportService;
use crate::services::scoping_service::ScopingService;
use crate::services::template_service::TemplateService;
use crate::store::report_store::ReportStore;
use crate::store::scoping_store::ScopingStore;
use crate::store::template_store::TemplateStore;
use crate::store::StoreRoot;

#[derive(Clone)]
pub struct AppState {
    report_service: Arc<ReportService>,
    scoping_service: Arc<ScopingService>,
    template_service: Arc<TemplateService>,
    analytics_service: Arc<AnalyticsService>,
    reference_service: Arc<ReferenceDataService>,
    form: Arc<Mutex<ReportFormState>>,
}

impl AppState {
    pub fn new(store_root: StoreRoot) -> AppResult<Self> {
        let report_store = ReportStore::new(store_root.clone());
        let scoping_store = ScopingStore::new(store_root.clone());
        let template_store = TemplateStore::new(store_root.clone());

        let report_service = Arc::new(ReportService::new(report_store.clone()));
        let scoping_service = Arc::new(ScopingService::new(scoping_store.clone()));
        let template_service = Arc::new(TemplateService::new(template_store));
        let analytics_service = Arc::new(AnalyticsService::new(report_store, scoping_store));
        let reference_service = Arc::new(ReferenceDataService::new(&store_root));

        Ok(Self {
            report_service,
            scoping_service,
            template_service,
            analytics_service,
            reference_service,
            form: Arc::new(Mutex::new(ReportFormState::new())),
        })
    }

    pub fn reports(&self) -> Arc<ReportService> {
        Arc::clone(&self.report_service)
    }

    pub fn scoping(&self) -> Arc<ScopingService> {
        Arc::clone(&self.scoping_service)
    }

    pub fn templates(&self) -> Arc<TemplateService> {
        Arc::clone(&self.template_service)
    }

    pub fn analytics(&self) -> Arc<AnalyticsService> {
        Arc::clone(&self.analytics_service)
    }

    pub fn reference(&self) -> Arc<ReferenceDataService> {
        Arc::clone(&self.reference_service)
    }

    /// Runs a closure against the single form state. A poisoned lock is
    /// recovered rather than propagated; the form is plain data.
    pub fn with_form<T>(&self, callback: impl FnOnce(&mut ReportFormState) -> T) -> T {
        let mut guard = self.form.lock().unwrap_or_else(PoisonError::into_inner);
        callback(&mut guard)
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<JsonValue>,
}

impl CommandError {
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Option<JsonValue>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details,
        }
    }
}

impl From<AppError> for CommandError {
    fn from(error: AppError) -> Self {
        match error {
            AppError::Validation { message, details } => {
                CommandError::new("VALIDATION_ERROR", message, details)
            }
            AppError::NotFound => {
                CommandError::new("NOT_FOUND", "the requested record does not exist", None)
            }
            AppError::Forbidden { message } => CommandError::new("FORBIDDEN", message, None),
            AppError::Export { message } => CommandError::new("EXPORT_FAILED", message, None),
            AppError::Serialization(error) => {
                error!(target: "app::command", error = %error, "serialization error in command");
                CommandError::new("UNKNOWN", "serialization failed", None)
            }
            AppError::Io(error) => {
                error!(target: "app::command", error = %error, "io error in command");
                CommandError::new("UNKNOWN", "file system read/write failed", None)
            }
            AppError::Other(message) => {
                error!(target: "app::command", %message, "unexpected error in command");
                CommandError::new("UNKNOWN", message, None)
            }
        }
    }
}
