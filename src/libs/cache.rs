//! The most recent successful fetch, kept so `today --cached` works offline.

use super::data_storage::DataStorage;
use crate::libs::summary::AttendanceSummary;
use anyhow::Result;
use std::fs::{self, File};
use std::path::PathBuf;

pub const LAST_FETCH_FILE: &str = "last_fetch.json";

pub struct LastFetch {
    path: PathBuf,
}

impl LastFetch {
    pub fn new() -> Result<Self> {
        Ok(Self::at(DataStorage::new().get_path(LAST_FETCH_FILE)?))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn save(&self, summary: &AttendanceSummary) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(&file, summary)?;
        Ok(())
    }

    /// The cached summary, or `None` if nothing has been fetched yet.
    pub fn load(&self) -> Result<Option<AttendanceSummary>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }
}
