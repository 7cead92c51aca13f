//! Clock-out reminders kept in the configuration file.

use crate::libs::cache::LastFetch;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::reminder::Reminder;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_error, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ReminderArgs {
    #[command(subcommand)]
    command: ReminderCommand,
}

#[derive(Debug, Subcommand)]
enum ReminderCommand {
    /// Add a reminder that fires some minutes before the expected clock-out
    Add {
        /// Minutes before the expected clock-out
        #[arg(long, short)]
        minutes: u32,
        /// Text shown when the reminder fires
        #[arg(long, short = 'M')]
        message: String,
    },
    /// List reminders and when they fire today
    List,
    /// Delete a reminder by id
    Delete {
        /// Reminder id, as shown by `reminder list`
        id: String,
    },
}

pub fn cmd(args: ReminderArgs) -> Result<()> {
    let mut config = Config::read()?;

    match args.command {
        ReminderCommand::Add { minutes, message } => {
            let reminder = match Reminder::new(minutes, &message, Local::now()) {
                Ok(reminder) => reminder,
                Err(e) => msg_bail_anyhow!(Message::ReminderInvalid(e.to_string())),
            };
            let id = reminder.id.clone();
            config.add_reminder(reminder);
            config.save()?;
            msg_success!(Message::ReminderAdded(id));
        }
        ReminderCommand::List => {
            let now = Local::now();
            // A broken cache only hides the fire times.
            let summary = LastFetch::new().and_then(|cache| cache.load()).unwrap_or(None);
            View::reminders(&config.reminders, summary.as_ref(), now);
            if let Some(summary) = &summary {
                View::upcoming(summary, &config.reminders, now);
            }
        }
        ReminderCommand::Delete { id } => {
            if config.remove_reminder(&id) {
                config.save()?;
                msg_success!(Message::ReminderDeleted(id));
            } else {
                msg_error!(Message::ReminderNotFound(id));
            }
        }
    }

    Ok(())
}
