use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::report::{Activity, UpcomingActivity};

/// A reusable starting point for a weekly report: the activity lists and
/// optional-section text, minus identity and lifecycle fields. Ownership
/// metadata gates read/delete; `is_shared` opens a template to everyone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportTemplate {
    pub id: String,
    pub name: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub is_shared: bool,
    #[serde(default)]
    pub current_activities: Vec<Activity>,
    #[serde(default)]
    pub upcoming_activities: Vec<UpcomingActivity>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub optional_sections: BTreeMap<String, String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateCreateInput {
    pub name: String,
    pub user_id: String,
    pub user_name: String,
    pub is_shared: Option<bool>,
}
