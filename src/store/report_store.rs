use std::fs;

use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::models::report::{ReportListFilter, ReportRecord};
use crate::services::normalizer;
use crate::store::{read_json, write_json, StoreRoot};

/// One JSON file per report under `reports/<id>.json`. Loads run through
/// the normalizer so corrupt field shapes degrade instead of failing.
#[derive(Clone, Debug)]
pub struct ReportStore {
    root: StoreRoot,
}

impl ReportStore {
    pub fn new(root: StoreRoot) -> Self {
        Self { root }
    }

    pub fn save_report(&self, record: &ReportRecord) -> AppResult<String> {
        let path = self.root.reports_dir().join(format!("{}.json", record.id));
        write_json(&path, record)?;
        debug!(target: "app::store", report_id = %record.id, "report saved");
        Ok(record.id.clone())
    }

    pub fn load_report(&self, id: &str) -> AppResult<ReportRecord> {
        let path = self.root.reports_dir().join(format!("{id}.json"));
        let value = read_json(&path)?.ok_or_else(AppError::not_found)?;
        Ok(normalizer::normalize_report(id, value))
    }

    pub fn delete_report(&self, id: &str) -> AppResult<()> {
        let path = self.root.reports_dir().join(format!("{id}.json"));
        if !path.exists() {
            return Err(AppError::not_found());
        }
        fs::remove_file(&path)?;
        debug!(target: "app::store", report_id = %id, "report deleted");
        Ok(())
    }

    /// All matching reports, newest first. Files that are not valid JSON at
    /// all are skipped with a warning rather than failing the listing.
    pub fn list_reports(&self, filter: &ReportListFilter) -> AppResult<Vec<ReportRecord>> {
        let mut records = Vec::new();
        for entry in fs::read_dir(self.root.reports_dir())? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let stem = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default()
                .to_string();
            match read_json(&path) {
                Ok(Some(value)) => {
                    let record = normalizer::normalize_report(&stem, value);
                    if filter.matches(&record) {
                        records.push(record);
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(target: "app::store", path = %path.display(), error = %err, "skipping unreadable report file");
                }
            }
        }
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        debug!(target: "app::store", count = records.len(), "reports listed");
        Ok(records)
    }
}
