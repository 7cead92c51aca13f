//! Punch events and the raw attendance payload they arrive in.
//!
//! The Keka attendance API reports each day as a record holding a list of
//! raw punches. A raw punch carries an ISO-8601 timestamp string and an
//! integer status code. Only two codes are modeled here:
//!
//! | code | meaning |
//! |------|---------|
//! | `0`  | clock in  |
//! | `1`  | clock out |
//!
//! Every other code (break start/end and friends) is dropped when a raw punch
//! is admitted as a [`PunchEvent`], as is a punch whose timestamp cannot be
//! parsed. Admission never fails; bad input simply disappears.
//!
//! ## Usage
//!
//! ```rust
//! use clockout::libs::punch::{AttendanceResponse, PunchEvent};
//!
//! let body = r#"{"data":[{"attendanceDate":"2025-01-15T00:00:00",
//!     "timeEntries":[{"actualTimestamp":"2025-01-15T09:00:00","punchStatus":0}]}]}"#;
//! let response: AttendanceResponse = serde_json::from_str(body).unwrap();
//! let record = response.latest().unwrap();
//! let events: Vec<PunchEvent> = record.time_entries.iter().filter_map(PunchEvent::from_raw).collect();
//! assert_eq!(events.len(), 1);
//! ```

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Offset-less layouts the API has been seen to emit.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Direction of a punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PunchStatus {
    In,
    Out,
}

impl PunchStatus {
    /// Maps the API's integer code, returning `None` for unmodeled kinds.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(PunchStatus::In),
            1 => Some(PunchStatus::Out),
            _ => None,
        }
    }
}

impl fmt::Display for PunchStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PunchStatus::In => write!(f, "IN"),
            PunchStatus::Out => write!(f, "OUT"),
        }
    }
}

/// A punch exactly as the API returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPunch {
    pub actual_timestamp: String,
    pub punch_status: i64,
}

impl RawPunch {
    pub fn new(actual_timestamp: &str, punch_status: i64) -> Self {
        Self {
            actual_timestamp: actual_timestamp.to_string(),
            punch_status,
        }
    }
}

/// One day of attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(default)]
    pub attendance_date: String,
    #[serde(default)]
    pub time_entries: Vec<RawPunch>,
}

/// Body of the attendance summary endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceResponse {
    #[serde(default)]
    pub data: Vec<AttendanceRecord>,
}

impl AttendanceResponse {
    /// The record for the current day, which the API always lists last.
    pub fn latest(&self) -> Option<&AttendanceRecord> {
        self.data.last()
    }

    pub fn into_latest(self) -> Option<AttendanceRecord> {
        self.data.into_iter().last()
    }
}

/// Parses an API timestamp into a local instant.
///
/// Timestamps carrying an offset are converted to local time. Timestamps
/// without one are read as local wall-clock time; a wall time skipped by a
/// DST jump has no instant and yields `None`, an ambiguous one resolves to
/// the earlier instant.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Local>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

/// A modeled punch with a comparable timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchEvent {
    pub timestamp: DateTime<Local>,
    pub status: PunchStatus,
}

/// Normalized punches are plain punch events that have been sorted and
/// deduplicated, so normalization can be applied to its own output.
pub type NormalizedEntry = PunchEvent;

impl PunchEvent {
    pub fn new(timestamp: DateTime<Local>, status: PunchStatus) -> Self {
        Self { timestamp, status }
    }

    pub fn clock_in(timestamp: DateTime<Local>) -> Self {
        Self::new(timestamp, PunchStatus::In)
    }

    pub fn clock_out(timestamp: DateTime<Local>) -> Self {
        Self::new(timestamp, PunchStatus::Out)
    }

    /// Admits a raw punch, or drops it if its status is unmodeled or its
    /// timestamp is unreadable.
    pub fn from_raw(raw: &RawPunch) -> Option<Self> {
        let status = PunchStatus::from_code(raw.punch_status)?;
        let timestamp = parse_timestamp(&raw.actual_timestamp)?;
        Some(Self { timestamp, status })
    }

    pub fn is_in(&self) -> bool {
        self.status == PunchStatus::In
    }

    pub fn is_out(&self) -> bool {
        self.status == PunchStatus::Out
    }
}
