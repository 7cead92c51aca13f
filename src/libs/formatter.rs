//! Time formatting utilities for user-friendly display.
//!
//! ## Format Specifications
//!
//! | function                | example            | notes                                    |
//! |-------------------------|--------------------|------------------------------------------|
//! | [`format_clock_duration`] | `"08:15:00"`     | `HH:MM:SS`, hours may exceed 24, signed  |
//! | [`format_duration`]       | `"08:15"`        | `HH:MM`, negative clamped to `00:00`     |
//! | [`format_time`]           | `"05:30 PM"`     | 12-hour wall clock                       |
//! | [`format_date`]           | `"Jan 15, 2025"` | from the attendance record's date string |
//!
//! ## Examples
//!
//! ```rust
//! use clockout::libs::formatter::{format_clock_duration, format_duration};
//! use chrono::Duration;
//!
//! let worked = Duration::hours(4) + Duration::minutes(15) + Duration::seconds(9);
//! assert_eq!(format_clock_duration(&worked), "04:15:09");
//! assert_eq!(format_clock_duration(&-worked), "-04:15:09");
//! assert_eq!(format_duration(&worked), "04:15");
//! ```

use crate::libs::projector::WorkSession;
use chrono::{DateTime, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Printable row for one work session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedSession {
    /// 1-based position within the day.
    pub id: usize,
    pub start: String,
    /// `-` while the session is still open.
    pub end: String,
    pub duration: String,
}

impl FormattedSession {
    pub fn from_sessions(sessions: &[WorkSession]) -> Vec<Self> {
        sessions
            .iter()
            .enumerate()
            .map(|(index, session)| FormattedSession {
                id: index + 1,
                start: format_time(&session.start),
                end: match session.end {
                    Some(end) if !session.is_open() => format_time(&end),
                    _ => "-".to_string(),
                },
                duration: format_duration(&session.duration),
            })
            .collect()
    }
}

/// Formats a duration as zero-padded `HH:MM:SS`.
///
/// Sub-second precision is truncated. A negative duration keeps its sign in
/// front of the magnitude (`-00:05:00`); the projector never produces one,
/// but the formatter does not assume that.
pub fn format_clock_duration(duration: &Duration) -> String {
    let secs = duration.num_seconds();
    let sign = if secs < 0 { "-" } else { "" };
    let secs = secs.unsigned_abs();
    format!("{}{:02}:{:02}:{:02}", sign, secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Formats a duration as `HH:MM`, clamping negatives to zero.
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;
    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// 12-hour clock time, e.g. `09:05 AM`.
pub fn format_time(time: &DateTime<Local>) -> String {
    time.format("%I:%M %p").to_string()
}

/// Short human date for an attendance record, e.g. `Jan 15, 2025`.
///
/// Only the leading `YYYY-MM-DD` of the string is read. Anything that does
/// not start with a date is returned unchanged.
pub fn format_date(value: &str) -> String {
    value
        .get(..10)
        .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| value.to_string())
}
