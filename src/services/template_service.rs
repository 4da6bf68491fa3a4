use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::template::{ReportTemplate, TemplateCreateInput};
use crate::services::form::ReportFormState;
use crate::store::template_store::TemplateStore;

/// Template CRUD with ownership gating: a template is visible to its owner
/// and, when shared, to everyone; only the owner may delete it.
#[derive(Clone)]
pub struct TemplateService {
    store: TemplateStore,
}

impl TemplateService {
    pub fn new(store: TemplateStore) -> Self {
        Self { store }
    }

    /// Snapshots the form's activity lists and optional sections under a
    /// new template. Blank rows are kept: a template deliberately carries
    /// the row layout, not just the content.
    pub fn create_from_form(
        &self,
        input: TemplateCreateInput,
        form: &ReportFormState,
    ) -> AppResult<ReportTemplate> {
        if input.name.trim().is_empty() {
            return Err(AppError::validation("a template needs a name"));
        }
        if input.user_id.trim().is_empty() {
            return Err(AppError::validation("a template needs an owner"));
        }

        let now = Utc::now().to_rfc3339();
        let template = ReportTemplate {
            id: Uuid::new_v4().to_string(),
            name: input.name.trim().to_string(),
            user_id: input.user_id,
            user_name: input.user_name,
            is_shared: input.is_shared.unwrap_or(false),
            current_activities: form.current_activities.clone(),
            upcoming_activities: form.upcoming_activities.clone(),
            optional_sections: form
                .optional_sections
                .iter()
                .filter(|section| section.enabled)
                .map(|section| (section.key.clone(), section.content.clone()))
                .collect(),
            created_at: now.clone(),
            updated_at: now,
        };

        self.store.save_template(&template)?;
        info!(target: "app::template", template_id = %template.id, "template created");
        Ok(template)
    }

    pub fn get(&self, id: &str, user_id: &str) -> AppResult<ReportTemplate> {
        let template = self.store.load_template(id)?;
        if template.user_id != user_id && !template.is_shared {
            return Err(AppError::forbidden("template is not shared with this user"));
        }
        Ok(template)
    }

    /// Templates the user owns plus everyone's shared ones.
    pub fn list_for_user(&self, user_id: &str) -> AppResult<Vec<ReportTemplate>> {
        let templates = self
            .store
            .list_templates()?
            .into_iter()
            .filter(|template| template.user_id == user_id || template.is_shared)
            .collect();
        Ok(templates)
    }

    pub fn delete(&self, id: &str, user_id: &str) -> AppResult<()> {
        let template = self.store.load_template(id)?;
        if template.user_id != user_id {
            return Err(AppError::forbidden("only the owner can delete a template"));
        }
        self.store.delete_template(id)?;
        info!(target: "app::template", template_id = %id, "template deleted");
        Ok(())
    }

    /// Loads a template's snapshot into the form, leaving identity and
    /// lifecycle fields untouched.
    pub fn apply_to_form(
        &self,
        id: &str,
        user_id: &str,
        form: &mut ReportFormState,
    ) -> AppResult<()> {
        let template = self.get(id, user_id)?;
        form.apply_template(
            template.current_activities,
            template.upcoming_activities,
            &template.optional_sections,
        );
        info!(target: "app::template", template_id = %id, "template applied to form");
        Ok(())
    }

    /// Stamps `updated_at` after a field-level edit; callers mutate the
    /// template they loaded and hand it back.
    pub fn update(&self, user_id: &str, mut template: ReportTemplate) -> AppResult<ReportTemplate> {
        let existing = self.store.load_template(&template.id)?;
        if existing.user_id != user_id {
            return Err(AppError::forbidden("only the owner can modify a template"));
        }
        template.user_id = existing.user_id;
        template.created_at = existing.created_at;
        template.updated_at = Utc::now().to_rfc3339();
        self.store.save_template(&template)?;
        info!(target: "app::template", template_id = %template.id, "template updated");
        Ok(template)
    }
}
