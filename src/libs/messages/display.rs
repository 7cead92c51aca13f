//! Display implementation for clockout messages.
//!
//! All message text is defined here, in one match, so wording stays
//! consistent across commands. Parameters are interpolated with `format!`.
//!
//! ```rust
//! use clockout::libs::messages::Message;
//!
//! assert_eq!(Message::WorkedTotal("04:15:00".to_string()).to_string(), "Worked today: 04:15:00");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigNothingToDelete => "No configuration file to delete".to_string(),
            Message::ConfigModuleKeka => "Keka settings".to_string(),
            Message::ConfigModuleWorkday => "Workday settings".to_string(),

            // === TOKEN MESSAGES ===
            Message::TokenStored => "Keka token stored".to_string(),
            Message::TokenCleared => "Stored Keka token removed".to_string(),
            Message::TokenNotStored => "No Keka token is stored".to_string(),
            Message::TokenImported(source) => format!("Keka token imported from {}", source),
            Message::TokenNotInDump => "No access token found in the storage dump. Make sure the dump comes from a logged-in Keka tab.".to_string(),
            Message::TokenNotJwt => "The value does not look like a Keka access token (expected it to start with \"eyJ\")".to_string(),
            Message::TokenResolved { origin, masked } => format!("Using token {} from {}", masked, origin),

            // === ATTENDANCE MESSAGES ===
            Message::FetchingAttendance(source) => format!("Fetching attendance from {}...", source),
            Message::FetchFailed(error) => format!("Failed to fetch attendance: {}", error),
            Message::AttendanceHeader(date) => format!("Attendance for {}", date),
            Message::WorkedTotal(total) => format!("Worked today: {}", total),
            Message::ExpectedOut(time) => format!("Expected clock-out: {}", time),
            Message::DayComplete => "Expected clock-out: Done".to_string(),
            Message::NotClockedIn => "You are not clocked in".to_string(),
            Message::LastOut(time) => format!("Last clock-out: {}", time),
            Message::NoEntries => "No entries".to_string(),
            Message::EntriesHeader => "Punches:".to_string(),
            Message::SessionsHeader => "Sessions:".to_string(),
            Message::CachedFetchFrom(when) => format!("Showing the last fetch from {}", when),
            Message::NoCachedFetch => "Nothing has been fetched yet. Run `clockout today` first.".to_string(),
            Message::CacheSaveFailed(error) => format!("Could not cache this fetch: {}", error),

            // === REMINDER MESSAGES ===
            Message::ReminderAdded(id) => format!("Reminder {} added", id),
            Message::ReminderDeleted(id) => format!("Reminder {} deleted", id),
            Message::ReminderNotFound(id) => format!("No reminder with id {}", id),
            Message::ReminderInvalid(error) => format!("Invalid reminder: {}", error),
            Message::NoReminders => "No reminders set".to_string(),
            Message::RemindersHeader => "Reminders:".to_string(),
            Message::ReminderDue { time, message } => format!("⏰ {} (clock-out at {})", message, time),
            Message::UpcomingReminder { time, message } => format!("Next reminder at {}: {}", time, message),

            // === WATCH MESSAGES ===
            Message::WatchStarted(interval) => format!("Watching attendance, refreshing every {} min. Press Ctrl-C to stop.", interval),
            Message::WatchStopped => "Stopped watching attendance".to_string(),
            Message::WatchReceivedCtrlC => "Received Ctrl-C, shutting down".to_string(),
            Message::WatchCtrlCListenFailed(error) => format!("Unable to listen for Ctrl-C: {}", error),
            Message::WatchIntervalInvalid(minutes) => format!("Refresh interval of {} minutes is too large", minutes),
            Message::WatchRefreshFailed(error) => format!("Refresh failed, keeping the previous data: {}", error),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure (space to select, enter to confirm)".to_string(),
            Message::PromptKekaSubdomain => "Keka subdomain (the part before .keka.com)".to_string(),
            Message::PromptDailyTarget => "Daily target (minutes)".to_string(),
            Message::PromptRefreshInterval => "Refresh interval while watching (minutes)".to_string(),
        };
        write!(f, "{}", text)
    }
}
