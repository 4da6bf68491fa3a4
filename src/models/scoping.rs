use serde::{Deserialize, Serialize};

/// One pre-sales pipeline record. Unrelated to weekly reports beyond
/// sharing the JSON persistence style.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScopingActivity {
    pub id: String,
    pub customer: String,
    pub project: String,
    pub phase: String,
    pub priority: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub target_close_date: String,
    #[serde(default)]
    pub account_executive: String,
    #[serde(default)]
    pub solution_architect: String,
    #[serde(default)]
    pub estimated_value: String,
    #[serde(default)]
    pub next_steps: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScopingCreateInput {
    pub customer: String,
    pub project: String,
    pub phase: Option<String>,
    pub priority: Option<String>,
    pub start_date: Option<String>,
    pub target_close_date: Option<String>,
    pub account_executive: Option<String>,
    pub solution_architect: Option<String>,
    pub estimated_value: Option<String>,
    pub next_steps: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScopingUpdateInput {
    pub customer: Option<String>,
    pub project: Option<String>,
    pub phase: Option<String>,
    pub priority: Option<String>,
    pub start_date: Option<String>,
    pub target_close_date: Option<String>,
    pub account_executive: Option<String>,
    pub solution_architect: Option<String>,
    pub estimated_value: Option<String>,
    pub next_steps: Option<String>,
    pub notes: Option<String>,
}
