//! Sources of attendance data.
//!
//! - **Keka**: the live attendance API, authenticated with a bearer token
//! - **PayloadFile**: a saved API response on disk, for offline use and
//!   for replaying a day that looked wrong
//!
//! Both hand back today's [`AttendanceRecord`]; the summary pipeline never
//! knows which one it got.

use crate::libs::punch::AttendanceRecord;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

pub mod keka;

pub use keka::{Keka, KekaConfig, KekaError};

/// Something that can produce today's attendance record.
#[allow(async_fn_in_trait)]
pub trait AttendanceSource {
    /// Fetches the latest day. `token` is ignored by sources that do not
    /// authenticate.
    async fn fetch_latest(&self, token: &str) -> Result<AttendanceRecord>;
}

/// A saved attendance summary response.
#[derive(Debug, Clone)]
pub struct PayloadFile {
    path: PathBuf,
}

impl PayloadFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn read_latest(&self) -> Result<AttendanceRecord> {
        let body = fs::read_to_string(&self.path)?;
        let response = keka::parse_response(&body)?;
        Ok(keka::select_latest(response)?)
    }
}

impl AttendanceSource for PayloadFile {
    async fn fetch_latest(&self, _token: &str) -> Result<AttendanceRecord> {
        self.read_latest()
    }
}
