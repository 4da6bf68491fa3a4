use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{debug, info};

use crate::error::AppResult;

pub mod report_store;
pub mod scoping_store;
pub mod template_store;

/// Handle to the flat-file data directory. Owns the layout; everything else
/// goes through the typed stores. No locking: concurrent saves to the same
/// path are last-write-wins.
#[derive(Clone, Debug)]
pub struct StoreRoot {
    root: PathBuf,
}

impl StoreRoot {
    pub fn new<P: Into<PathBuf>>(root: P) -> AppResult<Self> {
        let root = root.into();
        info!(data_dir = %root.display(), "initializing data store");
        fs::create_dir_all(root.join("reports"))?;
        fs::create_dir_all(root.join("templates"))?;
        fs::create_dir_all(root.join("reference"))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.root.join("reports")
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join("templates")
    }

    pub fn scoping_file(&self) -> PathBuf {
        self.root.join("scoping_activities.json")
    }

    pub fn reference_csv(&self) -> PathBuf {
        self.root.join("reference").join("projects.csv")
    }
}

/// Reads a JSON document, returning `None` when the file does not exist.
pub(crate) fn read_json(path: &Path) -> AppResult<Option<JsonValue>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    let value = serde_json::from_str(&contents)?;
    debug!(target: "app::store", path = %path.display(), "loaded json document");
    Ok(Some(value))
}

/// Writes a value as 2-space-indented JSON with a trailing newline, the
/// stable on-disk encoding every store uses.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> AppResult<()> {
    let mut file = fs::File::create(path)?;
    serde_json::to_writer_pretty(&mut file, value)?;
    file.write_all(b"\n")?;
    debug!(target: "app::store", path = %path.display(), "wrote json document");
    Ok(())
}
