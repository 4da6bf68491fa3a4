use std::collections::BTreeMap;

use tracing::debug;

use crate::error::AppResult;
use crate::models::analytics::{CountBucket, DashboardOverview, PhaseBucket, ReporterWorkload};
use crate::models::options::{ACTIVITY_STATUS_OPTIONS, ASDF_PHASES, PRIORITY_OPTIONS};
use crate::models::report::{ReportListFilter, STATUS_DRAFT, STATUS_SUBMITTED};
use crate::store::report_store::ReportStore;
use crate::store::scoping_store::ScopingStore;

/// Read-only dashboard aggregation over the persisted report files and the
/// scoping pipeline. Everything is recomputed from disk on each call; the
/// data set is tens to low hundreds of small files.
#[derive(Clone)]
pub struct AnalyticsService {
    reports: ReportStore,
    scoping: ScopingStore,
}

impl AnalyticsService {
    pub fn new(reports: ReportStore, scoping: ScopingStore) -> Self {
        Self { reports, scoping }
    }

    pub fn overview(&self) -> AppResult<DashboardOverview> {
        let all_reports = self.reports.list_reports(&ReportListFilter::default())?;
        let scoping = self.scoping.load_all()?;

        let submitted: Vec<_> = all_reports
            .iter()
            .filter(|record| record.status == STATUS_SUBMITTED)
            .collect();
        let draft_count = all_reports
            .iter()
            .filter(|record| record.status == STATUS_DRAFT)
            .count();

        let mut reporters: Vec<&str> = submitted
            .iter()
            .map(|record| record.name.as_str())
            .filter(|name| !name.is_empty())
            .collect();
        reporters.sort_unstable();
        reporters.dedup();

        // Activity charts aggregate submitted reports only; drafts are
        // still in flux.
        let mut status_counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut priority_counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut workload: BTreeMap<String, ReporterWorkload> = BTreeMap::new();

        for record in &submitted {
            let entry = workload
                .entry(record.name.clone())
                .or_insert_with(|| ReporterWorkload {
                    name: record.name.clone(),
                    current_activities: 0,
                    upcoming_activities: 0,
                    completed_activities: 0,
                });
            for activity in &record.current_activities {
                if activity.is_blank() {
                    continue;
                }
                entry.current_activities += 1;
                if activity.status == "Completed" {
                    entry.completed_activities += 1;
                }
                *status_counts.entry(activity.status.clone()).or_insert(0) += 1;
                *priority_counts.entry(activity.priority.clone()).or_insert(0) += 1;
            }
            for activity in &record.upcoming_activities {
                if activity.is_blank() {
                    continue;
                }
                entry.upcoming_activities += 1;
                *priority_counts.entry(activity.priority.clone()).or_insert(0) += 1;
            }
        }

        let status_breakdown = ACTIVITY_STATUS_OPTIONS
            .iter()
            .map(|status| CountBucket {
                label: (*status).to_string(),
                count: status_counts.get(*status).copied().unwrap_or(0),
            })
            .collect();
        let priority_breakdown = PRIORITY_OPTIONS
            .iter()
            .map(|priority| CountBucket {
                label: (*priority).to_string(),
                count: priority_counts.get(*priority).copied().unwrap_or(0),
            })
            .collect();

        // All 13 funnel buckets are reported, zeros included, so charts
        // keep a stable x-axis.
        let phase_distribution = ASDF_PHASES
            .iter()
            .map(|(phase, color)| PhaseBucket {
                phase: (*phase).to_string(),
                color: (*color).to_string(),
                count: scoping
                    .iter()
                    .filter(|activity| activity.phase == *phase)
                    .count(),
            })
            .collect();

        let overview = DashboardOverview {
            total_reports: all_reports.len(),
            submitted_reports: submitted.len(),
            draft_reports: draft_count,
            reporter_count: reporters.len(),
            status_breakdown,
            priority_breakdown,
            workload: workload.into_values().collect(),
            phase_distribution,
        };
        debug!(target: "app::analytics", reports = overview.total_reports, "dashboard overview computed");
        Ok(overview)
    }
}
