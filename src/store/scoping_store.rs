use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::error::AppResult;
use crate::models::scoping::ScopingActivity;
use crate::store::{read_json, write_json, StoreRoot};

/// All scoping records live in one JSON array file, rewritten wholesale on
/// every mutation.
#[derive(Clone, Debug)]
pub struct ScopingStore {
    root: StoreRoot,
}

impl ScopingStore {
    pub fn new(root: StoreRoot) -> Self {
        Self { root }
    }

    /// A missing file is an empty pipeline; malformed array entries are
    /// dropped with a warning.
    pub fn load_all(&self) -> AppResult<Vec<ScopingActivity>> {
        let path = self.root.scoping_file();
        let Some(value) = read_json(&path)? else {
            return Ok(Vec::new());
        };

        let entries = match value {
            JsonValue::Array(entries) => entries,
            _ => {
                warn!(target: "app::store", path = %path.display(), "scoping file is not an array, treating as empty");
                return Ok(Vec::new());
            }
        };

        let mut activities = Vec::with_capacity(entries.len());
        for entry in entries {
            match serde_json::from_value::<ScopingActivity>(entry) {
                Ok(activity) => activities.push(activity),
                Err(err) => {
                    warn!(target: "app::store", error = %err, "dropping malformed scoping entry");
                }
            }
        }
        debug!(target: "app::store", count = activities.len(), "scoping activities loaded");
        Ok(activities)
    }

    pub fn save_all(&self, activities: &[ScopingActivity]) -> AppResult<()> {
        write_json(&self.root.scoping_file(), &activities)?;
        debug!(target: "app::store", count = activities.len(), "scoping activities saved");
        Ok(())
    }
}
