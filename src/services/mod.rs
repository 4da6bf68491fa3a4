pub mod analytics_service;
pub mod completion;
pub mod export_service;
pub mod form;
pub mod list_edit;
pub mod normalizer;
pub mod reference_data;
pub mod report_service;
pub mod scoping_service;
pub mod template_service;
