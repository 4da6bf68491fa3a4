use serde::Serialize;

/// Chart-ready dashboard aggregates over every persisted report plus the
/// scoping pipeline file. Computed on demand; nothing here is persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub total_reports: usize,
    pub submitted_reports: usize,
    pub draft_reports: usize,
    pub reporter_count: usize,
    pub status_breakdown: Vec<CountBucket>,
    pub priority_breakdown: Vec<CountBucket>,
    pub workload: Vec<ReporterWorkload>,
    pub phase_distribution: Vec<PhaseBucket>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CountBucket {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReporterWorkload {
    pub name: String,
    pub current_activities: usize,
    pub upcoming_activities: usize,
    pub completed_activities: usize,
}

/// One funnel-ordered ASDF phase bucket with its chart color.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhaseBucket {
    pub phase: String,
    pub color: String,
    pub count: usize,
}
