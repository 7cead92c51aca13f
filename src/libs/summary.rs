//! The per-fetch attendance summary and the pipeline that builds it.
//!
//! `summarize` is the single entry point from raw payload to summary:
//!
//! ```text
//! AttendanceRecord ──normalize──▶ entries ──project(now, target)──▶ AttendanceSummary
//! ```
//!
//! A summary is built fresh on every fetch and never mutated afterwards.

use crate::libs::formatter::{format_clock_duration, FormattedSession};
use crate::libs::normalizer::normalize;
use crate::libs::projector::{project, Projection};
use crate::libs::punch::{AttendanceRecord, NormalizedEntry};
use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    /// Attendance date exactly as the API reported it.
    pub date: String,
    pub entries: Vec<NormalizedEntry>,
    /// Worked time as `HH:MM:SS`.
    pub total_worked: String,
    pub total_worked_millis: i64,
    pub remaining_millis: i64,
    /// Absent when not clocked in today or when the target is already met.
    pub expected_completion_time: Option<DateTime<Local>>,
    pub last_in_time: Option<DateTime<Local>>,
    pub last_out_time: Option<DateTime<Local>>,
    pub clocked_in: bool,
    pub sessions: Vec<FormattedSession>,
    /// The `now` the summary was computed against.
    pub generated_at: DateTime<Local>,
}

impl AttendanceSummary {
    pub fn new(date: &str, entries: Vec<NormalizedEntry>, projection: Projection, now: DateTime<Local>) -> Self {
        Self {
            date: date.to_string(),
            total_worked: format_clock_duration(&projection.total_worked),
            total_worked_millis: projection.total_worked.num_milliseconds(),
            remaining_millis: projection.remaining.num_milliseconds(),
            expected_completion_time: projection.expected_completion,
            last_in_time: projection.last_in_time,
            last_out_time: projection.last_out_time,
            clocked_in: projection.is_clocked_in(),
            sessions: FormattedSession::from_sessions(&projection.sessions),
            generated_at: now,
            entries,
        }
    }

    pub fn total_worked_duration(&self) -> Duration {
        Duration::milliseconds(self.total_worked_millis)
    }

    pub fn remaining_duration(&self) -> Duration {
        Duration::milliseconds(self.remaining_millis)
    }

    pub fn is_day_complete(&self) -> bool {
        self.remaining_millis == 0
    }
}

/// Normalizes a day's raw punches and projects them against `now`.
pub fn summarize(record: &AttendanceRecord, now: DateTime<Local>, daily_target: Duration) -> AttendanceSummary {
    let entries = normalize(&record.time_entries);
    let projection = project(&entries, now, daily_target);

    tracing::debug!(
        date = %record.attendance_date,
        raw = record.time_entries.len(),
        normalized = entries.len(),
        worked_ms = projection.total_worked.num_milliseconds(),
        "summarized attendance"
    );

    AttendanceSummary::new(&record.attendance_date, entries, projection, now)
}
