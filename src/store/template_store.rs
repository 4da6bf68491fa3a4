use std::fs;

use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::models::template::ReportTemplate;
use crate::store::{read_json, write_json, StoreRoot};

/// One JSON file per template under `templates/<id>.json`. Access control
/// (ownership, sharing) is the service layer's concern; this store is raw
/// file CRUD.
#[derive(Clone, Debug)]
pub struct TemplateStore {
    root: StoreRoot,
}

impl TemplateStore {
    pub fn new(root: StoreRoot) -> Self {
        Self { root }
    }

    pub fn save_template(&self, template: &ReportTemplate) -> AppResult<String> {
        let path = self
            .root
            .templates_dir()
            .join(format!("{}.json", template.id));
        write_json(&path, template)?;
        debug!(target: "app::store", template_id = %template.id, "template saved");
        Ok(template.id.clone())
    }

    pub fn load_template(&self, id: &str) -> AppResult<ReportTemplate> {
        let path = self.root.templates_dir().join(format!("{id}.json"));
        let value = read_json(&path)?.ok_or_else(AppError::not_found)?;
        serde_json::from_value(value).map_err(AppError::from)
    }

    pub fn delete_template(&self, id: &str) -> AppResult<()> {
        let path = self.root.templates_dir().join(format!("{id}.json"));
        if !path.exists() {
            return Err(AppError::not_found());
        }
        fs::remove_file(&path)?;
        debug!(target: "app::store", template_id = %id, "template deleted");
        Ok(())
    }

    pub fn list_templates(&self) -> AppResult<Vec<ReportTemplate>> {
        let mut templates = Vec::new();
        for entry in fs::read_dir(self.root.templates_dir())? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            match read_json(&path).and_then(|value| match value {
                Some(value) => serde_json::from_value(value).map_err(AppError::from),
                None => Err(AppError::not_found()),
            }) {
                Ok(template) => templates.push(template),
                Err(err) => {
                    warn!(target: "app::store", path = %path.display(), error = %err, "skipping unreadable template file");
                }
            }
        }
        templates.sort_by(|a: &ReportTemplate, b: &ReportTemplate| a.name.cmp(&b.name));
        Ok(templates)
    }
}
