use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::warn;

use crate::store::StoreRoot;

const COL_PROJECT: &str = "Project";
const COL_MILESTONE: &str = "Milestone: Milestone Name";
const COL_OWNER: &str = "Timecard: Owner Name";

/// Read-only project/milestone reference data exported from the timecard
/// system. The CSV is re-read on every lookup (it is tiny and can be
/// re-exported while the app runs); a missing or unreadable file degrades
/// to empty option lists.
#[derive(Clone)]
pub struct ReferenceDataService {
    csv_path: PathBuf,
}

#[derive(Debug, Default)]
struct ReferenceTable {
    milestones_by_project: BTreeMap<String, Vec<String>>,
    projects_by_owner: BTreeMap<String, Vec<String>>,
}

impl ReferenceDataService {
    pub fn new(root: &StoreRoot) -> Self {
        Self {
            csv_path: root.reference_csv(),
        }
    }

    pub fn milestones_for_project(&self, project: &str) -> Vec<String> {
        self.load()
            .milestones_by_project
            .get(project)
            .cloned()
            .unwrap_or_default()
    }

    pub fn projects_for_user(&self, user: &str) -> Vec<String> {
        self.load()
            .projects_by_owner
            .get(user)
            .cloned()
            .unwrap_or_default()
    }

    pub fn all_projects(&self) -> Vec<String> {
        self.load().milestones_by_project.keys().cloned().collect()
    }

    fn load(&self) -> ReferenceTable {
        if !self.csv_path.exists() {
            return ReferenceTable::default();
        }

        let mut reader = match csv::Reader::from_path(&self.csv_path) {
            Ok(reader) => reader,
            Err(err) => {
                warn!(target: "app::reference", path = %self.csv_path.display(), error = %err, "reference csv unreadable, using empty lookups");
                return ReferenceTable::default();
            }
        };

        let headers = match reader.headers() {
            Ok(headers) => headers.clone(),
            Err(err) => {
                warn!(target: "app::reference", error = %err, "reference csv has no readable header");
                return ReferenceTable::default();
            }
        };
        let find = |name: &str| headers.iter().position(|header| header == name);
        let (Some(project_idx), Some(milestone_idx), Some(owner_idx)) =
            (find(COL_PROJECT), find(COL_MILESTONE), find(COL_OWNER))
        else {
            warn!(target: "app::reference", "reference csv is missing required columns");
            return ReferenceTable::default();
        };

        let mut table = ReferenceTable::default();
        for record in reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(err) => {
                    warn!(target: "app::reference", error = %err, "skipping malformed csv row");
                    continue;
                }
            };
            let project = record.get(project_idx).unwrap_or_default().trim();
            let milestone = record.get(milestone_idx).unwrap_or_default().trim();
            let owner = record.get(owner_idx).unwrap_or_default().trim();
            if project.is_empty() {
                continue;
            }

            let milestones = table
                .milestones_by_project
                .entry(project.to_string())
                .or_default();
            if !milestone.is_empty() && !milestones.iter().any(|known| known == milestone) {
                milestones.push(milestone.to_string());
            }

            if !owner.is_empty() {
                let projects = table
                    .projects_by_owner
                    .entry(owner.to_string())
                    .or_default();
                if !projects.iter().any(|known| known == project) {
                    projects.push(project.to_string());
                }
            }
        }
        table
    }
}
