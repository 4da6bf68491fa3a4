use std::collections::BTreeMap;

use chrono::{Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::options::{DEFAULT_ACTIVITY_STATUS, DEFAULT_PRIORITY};
use crate::models::text_item::TextItem;

pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_SUBMITTED: &str = "submitted";

/// One persisted weekly report. `timestamp` is set at first persistence and
/// never changes; `last_updated` is stamped on every later save.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    pub id: String,
    pub name: String,
    pub reporting_week: String,
    pub status: String,
    pub timestamp: String,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub current_activities: Vec<Activity>,
    #[serde(default)]
    pub upcoming_activities: Vec<UpcomingActivity>,
    #[serde(default)]
    pub accomplishments: Vec<TextItem>,
    #[serde(default)]
    pub followups: Vec<TextItem>,
    #[serde(default)]
    pub nextsteps: Vec<TextItem>,
    /// Only sections that were enabled and populated at save time.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub optional_sections: BTreeMap<String, String>,
}

/// A current-week work item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Activity {
    pub project: String,
    pub milestone: String,
    pub priority: String,
    pub status: String,
    pub customer: String,
    pub billable: String,
    pub has_deadline: bool,
    pub deadline: String,
    pub progress: i64,
    pub description: String,
}

impl Default for Activity {
    fn default() -> Self {
        Self {
            project: String::new(),
            milestone: String::new(),
            priority: DEFAULT_PRIORITY.to_string(),
            status: DEFAULT_ACTIVITY_STATUS.to_string(),
            customer: String::new(),
            billable: String::new(),
            has_deadline: false,
            deadline: String::new(),
            progress: 0,
            description: String::new(),
        }
    }
}

impl Activity {
    pub fn is_blank(&self) -> bool {
        self.project.trim().is_empty()
            && self.milestone.trim().is_empty()
            && self.customer.trim().is_empty()
            && self.description.trim().is_empty()
    }
}

/// A planned work item for the coming week. Carries an expected start date
/// instead of the execution fields of a current activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UpcomingActivity {
    pub project: String,
    pub milestone: String,
    pub priority: String,
    pub expected_start: String,
    pub description: String,
}

impl Default for UpcomingActivity {
    fn default() -> Self {
        Self {
            project: String::new(),
            milestone: String::new(),
            priority: DEFAULT_PRIORITY.to_string(),
            expected_start: next_monday(),
            description: String::new(),
        }
    }
}

impl UpcomingActivity {
    pub fn is_blank(&self) -> bool {
        self.project.trim().is_empty()
            && self.milestone.trim().is_empty()
            && self.description.trim().is_empty()
    }
}

/// Default expected-start date for a fresh upcoming activity: the Monday
/// after today (today itself never qualifies).
pub fn next_monday() -> String {
    let today = Utc::now().date_naive();
    let days_ahead = 7 - i64::from(today.weekday().num_days_from_monday());
    (today + Duration::days(days_ahead))
        .format("%Y-%m-%d")
        .to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportListFilter {
    pub status: Option<String>,
    pub name: Option<String>,
    pub reporting_week: Option<String>,
}

impl ReportListFilter {
    pub fn matches(&self, record: &ReportRecord) -> bool {
        if let Some(status) = &self.status {
            if record.status != *status {
                return false;
            }
        }
        if let Some(name) = &self.name {
            if record.name != *name {
                return false;
            }
        }
        if let Some(week) = &self.reporting_week {
            if record.reporting_week != *week {
                return false;
            }
        }
        true
    }
}
