pub mod analytics;
pub mod options;
pub mod report;
pub mod scoping;
pub mod template;
pub mod text_item;
