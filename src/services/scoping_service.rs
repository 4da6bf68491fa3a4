use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::options::{
    is_valid_phase, phase_index, DEFAULT_PRIORITY, DEFAULT_SCOPING_PHASE, PRIORITY_OPTIONS,
};
use crate::models::scoping::{ScopingActivity, ScopingCreateInput, ScopingUpdateInput};
use crate::store::scoping_store::ScopingStore;

/// CRUD over the scoping pipeline. Every mutation reloads the aggregate
/// file, applies the change, and rewrites it wholesale.
#[derive(Clone)]
pub struct ScopingService {
    store: ScopingStore,
}

impl ScopingService {
    pub fn new(store: ScopingStore) -> Self {
        Self { store }
    }

    pub fn create(&self, input: ScopingCreateInput) -> AppResult<ScopingActivity> {
        if input.customer.trim().is_empty() && input.project.trim().is_empty() {
            return Err(AppError::validation(
                "a scoping record needs a customer or a project",
            ));
        }

        let now = Utc::now().to_rfc3339();
        let activity = ScopingActivity {
            id: Uuid::new_v4().to_string(),
            customer: input.customer.trim().to_string(),
            project: input.project.trim().to_string(),
            phase: validate_phase(input.phase)?,
            priority: validate_priority(input.priority)?,
            start_date: input.start_date.unwrap_or_default(),
            target_close_date: input.target_close_date.unwrap_or_default(),
            account_executive: input.account_executive.unwrap_or_default(),
            solution_architect: input.solution_architect.unwrap_or_default(),
            estimated_value: input.estimated_value.unwrap_or_default(),
            next_steps: input.next_steps.unwrap_or_default(),
            notes: input.notes.unwrap_or_default(),
            created_at: now.clone(),
            updated_at: now,
        };

        let mut activities = self.store.load_all()?;
        activities.push(activity.clone());
        self.store.save_all(&activities)?;
        info!(target: "app::scoping", activity_id = %activity.id, "scoping activity created");
        Ok(activity)
    }

    pub fn update(&self, id: &str, update: ScopingUpdateInput) -> AppResult<ScopingActivity> {
        let mut activities = self.store.load_all()?;
        let activity = activities
            .iter_mut()
            .find(|activity| activity.id == id)
            .ok_or_else(AppError::not_found)?;

        if let Some(customer) = update.customer {
            activity.customer = customer.trim().to_string();
        }
        if let Some(project) = update.project {
            activity.project = project.trim().to_string();
        }
        if let Some(phase) = update.phase {
            activity.phase = validate_phase(Some(phase))?;
        }
        if let Some(priority) = update.priority {
            activity.priority = validate_priority(Some(priority))?;
        }
        if let Some(start_date) = update.start_date {
            activity.start_date = start_date;
        }
        if let Some(target_close_date) = update.target_close_date {
            activity.target_close_date = target_close_date;
        }
        if let Some(account_executive) = update.account_executive {
            activity.account_executive = account_executive;
        }
        if let Some(solution_architect) = update.solution_architect {
            activity.solution_architect = solution_architect;
        }
        if let Some(estimated_value) = update.estimated_value {
            activity.estimated_value = estimated_value;
        }
        if let Some(next_steps) = update.next_steps {
            activity.next_steps = next_steps;
        }
        if let Some(notes) = update.notes {
            activity.notes = notes;
        }
        activity.updated_at = Utc::now().to_rfc3339();

        let updated = activity.clone();
        self.store.save_all(&activities)?;
        info!(target: "app::scoping", activity_id = %id, "scoping activity updated");
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> AppResult<()> {
        let mut activities = self.store.load_all()?;
        let before = activities.len();
        activities.retain(|activity| activity.id != id);
        if activities.len() == before {
            return Err(AppError::not_found());
        }
        self.store.save_all(&activities)?;
        info!(target: "app::scoping", activity_id = %id, "scoping activity deleted");
        Ok(())
    }

    pub fn get(&self, id: &str) -> AppResult<ScopingActivity> {
        self.store
            .load_all()?
            .into_iter()
            .find(|activity| activity.id == id)
            .ok_or_else(AppError::not_found)
    }

    /// All records in funnel order, optionally restricted to one phase.
    pub fn list(&self, phase: Option<&str>) -> AppResult<Vec<ScopingActivity>> {
        let mut activities = self.store.load_all()?;
        if let Some(phase) = phase {
            activities.retain(|activity| activity.phase == phase);
        }
        activities.sort_by_key(|activity| phase_index(&activity.phase).unwrap_or(usize::MAX));
        Ok(activities)
    }
}

fn validate_phase(phase: Option<String>) -> AppResult<String> {
    match phase {
        None => Ok(DEFAULT_SCOPING_PHASE.to_string()),
        Some(phase) if is_valid_phase(&phase) => Ok(phase),
        Some(phase) => Err(AppError::validation(format!(
            "unknown pipeline phase: {phase}"
        ))),
    }
}

fn validate_priority(priority: Option<String>) -> AppResult<String> {
    match priority {
        None => Ok(DEFAULT_PRIORITY.to_string()),
        Some(priority) if PRIORITY_OPTIONS.contains(&priority.as_str()) => Ok(priority),
        Some(priority) => Err(AppError::validation(format!("unknown priority: {priority}"))),
    }
}
