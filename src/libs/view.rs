//! Terminal rendering of summaries and reminders.

use crate::libs::formatter::{format_date, format_time};
use crate::libs::messages::Message;
use crate::libs::reminder::{schedule, Reminder};
use crate::libs::summary::AttendanceSummary;
use crate::msg_print;
use chrono::{DateTime, Local};
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Header lines, punches and sessions for one summary.
    pub fn summary(summary: &AttendanceSummary) {
        msg_print!(Message::AttendanceHeader(format_date(&summary.date)), true);
        msg_print!(Message::WorkedTotal(summary.total_worked.clone()));

        match summary.expected_completion_time {
            Some(expected) => msg_print!(Message::ExpectedOut(format_time(&expected))),
            None if summary.is_day_complete() => msg_print!(Message::DayComplete),
            None => msg_print!(Message::NotClockedIn),
        }
        if let Some(last_out) = summary.last_out_time {
            msg_print!(Message::LastOut(format_time(&last_out)));
        }

        if summary.entries.is_empty() {
            msg_print!(Message::NoEntries, true);
            return;
        }

        msg_print!(Message::EntriesHeader, true);
        Self::entries_table(summary).printstd();

        if !summary.sessions.is_empty() {
            msg_print!(Message::SessionsHeader, true);
            Self::sessions_table(summary).printstd();
        }
    }

    pub fn entries_table(summary: &AttendanceSummary) -> Table {
        let mut table = Table::new();
        table.add_row(row!["#", "TIME", "STATUS"]);
        for (index, entry) in summary.entries.iter().enumerate() {
            table.add_row(row![index + 1, format_time(&entry.timestamp), entry.status]);
        }
        table
    }

    pub fn sessions_table(summary: &AttendanceSummary) -> Table {
        let mut table = Table::new();
        table.add_row(row!["ID", "START", "END", "DURATION"]);
        for session in &summary.sessions {
            table.add_row(row![session.id, session.start, session.end, session.duration]);
        }
        table
    }

    /// Configured reminders, with their fire time when one is scheduled.
    pub fn reminders(reminders: &[Reminder], summary: Option<&AttendanceSummary>, now: DateTime<Local>) {
        if reminders.is_empty() {
            msg_print!(Message::NoReminders);
            return;
        }

        msg_print!(Message::RemindersHeader);
        Self::reminders_table(reminders, summary, now).printstd();
    }

    /// The next reminder still ahead of `now`, if any.
    pub fn upcoming(summary: &AttendanceSummary, reminders: &[Reminder], now: DateTime<Local>) {
        if let Some(next) = schedule(summary, reminders, now).into_iter().next() {
            msg_print!(Message::UpcomingReminder {
                time: format_time(&next.fire_at),
                message: next.message,
            });
        }
    }

    pub fn reminders_table(reminders: &[Reminder], summary: Option<&AttendanceSummary>, now: DateTime<Local>) -> Table {
        let scheduled = summary.map(|s| schedule(s, reminders, now)).unwrap_or_default();

        let mut table = Table::new();
        table.add_row(row!["ID", "BEFORE", "MESSAGE", "FIRES AT"]);
        for reminder in reminders {
            let fires_at = scheduled
                .iter()
                .find(|s| s.id == reminder.id)
                .map_or_else(|| "-".to_string(), |s| format_time(&s.fire_at));
            table.add_row(row![
                reminder.id,
                format!("{} min", reminder.minutes_before),
                reminder.message,
                fires_at
            ]);
        }
        table
    }
}
