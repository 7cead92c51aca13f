//! Reminders ahead of the projected clock-out time.
//!
//! A reminder fires `minutes_before` the projected completion time. Every
//! schedule also carries a completion entry that fires at the projected time
//! itself. A summary without a projected completion (not clocked in today, or
//! the target already met) schedules nothing.

use crate::libs::summary::AttendanceSummary;
use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

pub const COMPLETION_ID: &str = "completion";
pub const COMPLETION_MESSAGE: &str = "Your workday is complete, time to clock out";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReminderError {
    #[error("Reminder must fire at least 1 minute before clock-out")]
    InvalidMinutes,
    #[error("Reminder message must not be empty")]
    EmptyMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub minutes_before: u32,
    pub message: String,
}

impl Reminder {
    /// Validates and creates a reminder; the id is derived from `created_at`.
    pub fn new(minutes_before: u32, message: &str, created_at: DateTime<Local>) -> Result<Self, ReminderError> {
        if minutes_before < 1 {
            return Err(ReminderError::InvalidMinutes);
        }
        let message = message.trim();
        if message.is_empty() {
            return Err(ReminderError::EmptyMessage);
        }

        Ok(Self {
            id: format!("reminder_{}", created_at.timestamp_millis()),
            minutes_before,
            message: message.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledReminder {
    /// Reminder id, or [`COMPLETION_ID`].
    pub id: String,
    pub fire_at: DateTime<Local>,
    pub message: String,
}

impl ScheduledReminder {
    pub fn is_completion(&self) -> bool {
        self.id == COMPLETION_ID
    }
}

/// All fire times for the summary's projected completion, earliest first.
pub fn fire_times(summary: &AttendanceSummary, reminders: &[Reminder]) -> Vec<ScheduledReminder> {
    let Some(expected) = summary.expected_completion_time else {
        return Vec::new();
    };

    let mut scheduled: Vec<ScheduledReminder> = reminders
        .iter()
        .filter_map(|reminder| {
            let fire_at = expected.checked_sub_signed(Duration::minutes(i64::from(reminder.minutes_before)))?;
            Some(ScheduledReminder {
                id: reminder.id.clone(),
                fire_at,
                message: reminder.message.clone(),
            })
        })
        .collect();
    scheduled.push(ScheduledReminder {
        id: COMPLETION_ID.to_string(),
        fire_at: expected,
        message: COMPLETION_MESSAGE.to_string(),
    });
    scheduled.sort_by_key(|s| s.fire_at);
    scheduled
}

/// Fire times still ahead of `now`.
pub fn schedule(summary: &AttendanceSummary, reminders: &[Reminder], now: DateTime<Local>) -> Vec<ScheduledReminder> {
    fire_times(summary, reminders).into_iter().filter(|s| s.fire_at > now).collect()
}

/// Tracks what a long-running watcher has already fired.
///
/// A reminder fires once per projected completion minute, so a projection
/// that moves (a break was taken) arms it again. Fire times before the
/// watcher started are never fired. Only the current projection's entries
/// are kept.
#[derive(Debug, Clone)]
pub struct ReminderLog {
    started_at: DateTime<Local>,
    fired: HashSet<(String, i64)>,
}

impl ReminderLog {
    pub fn new(started_at: DateTime<Local>) -> Self {
        Self {
            started_at,
            fired: HashSet::new(),
        }
    }

    /// Reminders that became due by `now` and have not fired yet; they are
    /// marked as fired.
    pub fn take_due(&mut self, summary: &AttendanceSummary, reminders: &[Reminder], now: DateTime<Local>) -> Vec<ScheduledReminder> {
        let Some(expected) = summary.expected_completion_time else {
            return Vec::new();
        };
        let projection_key = expected.timestamp().div_euclid(60);
        let started_at = self.started_at;

        // Keys from earlier projections can never match again.
        self.fired.retain(|(_, key)| *key >= projection_key);

        fire_times(summary, reminders)
            .into_iter()
            .filter(|s| s.fire_at >= started_at && s.fire_at <= now)
            .filter(|s| self.fired.insert((s.id.clone(), projection_key)))
            .collect()
    }

    /// Time until the next unfired reminder, if any is still ahead.
    pub fn next_due_in(&self, summary: &AttendanceSummary, reminders: &[Reminder], now: DateTime<Local>) -> Option<Duration> {
        let projection_key = summary.expected_completion_time?.timestamp().div_euclid(60);
        schedule(summary, reminders, now)
            .into_iter()
            .find(|s| !self.fired.contains(&(s.id.clone(), projection_key)))
            .map(|s| s.fire_at - now)
    }
}
