//! Foreground watcher: refreshes attendance on an interval and fires
//! clock-out reminders until Ctrl+C.

use crate::commands::today;
use crate::libs::cache::LastFetch;
use crate::libs::config::Config;
use crate::libs::formatter::format_time;
use crate::libs::messages::Message;
use crate::libs::reminder::ReminderLog;
use crate::libs::summary::AttendanceSummary;
use crate::{msg_bail_anyhow, msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::{DateTime, Duration, Local};
use clap::Args;
use std::time::Duration as StdDuration;

/// How often due reminders are checked.
const TICK: StdDuration = StdDuration::from_secs(30);

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Minutes between attendance refreshes (defaults to the configured interval)
    #[arg(long, short)]
    interval: Option<u64>,

    /// Bearer token to use instead of the stored one
    #[arg(long, short)]
    token: Option<String>,
}

pub async fn cmd(args: WatchArgs) -> Result<()> {
    let config = Config::read()?;
    let refresh_minutes = args.interval.unwrap_or(config.workday().refresh_interval).max(1);
    let refresh_every = refresh_period(refresh_minutes)?;

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => msg_info!(Message::WatchReceivedCtrlC),
            Err(e) => msg_error!(Message::WatchCtrlCListenFailed(e.to_string())),
        }
        let _ = shutdown_tx.send(());
    });

    msg_info!(Message::WatchStarted(refresh_minutes));
    tokio::select! {
        result = run_watcher(config, refresh_every, args.token) => result?,
        _ = shutdown_rx => {}
    }

    msg_info!(Message::WatchStopped);
    Ok(())
}

/// Refresh interval in minutes as a duration; rejects values chrono cannot hold.
pub fn refresh_period(minutes: u64) -> Result<Duration> {
    match i64::try_from(minutes).ok().and_then(Duration::try_minutes) {
        Some(period) => Ok(period),
        None => msg_bail_anyhow!(Message::WatchIntervalInvalid(minutes)),
    }
}

async fn run_watcher(config: Config, refresh_every: Duration, token: Option<String>) -> Result<()> {
    let mut log = ReminderLog::new(Local::now());
    let mut latest: Option<AttendanceSummary> = None;
    let mut last_refresh: Option<DateTime<Local>> = None;
    let mut tick = tokio::time::interval(TICK);

    loop {
        tick.tick().await;
        let now = Local::now();

        if last_refresh.map_or(true, |at| now - at >= refresh_every) {
            last_refresh = Some(now);
            match today::fetch_summary(&config, token.clone(), None, now).await {
                Ok(summary) => {
                    if let Err(e) = LastFetch::new().and_then(|cache| cache.save(&summary)) {
                        msg_warning!(Message::CacheSaveFailed(e.to_string()));
                    }
                    status_line(&summary);
                    latest = Some(summary);
                }
                // Keep using the previous summary until a refresh succeeds.
                Err(e) => msg_warning!(Message::WatchRefreshFailed(e.to_string())),
            }
        }

        let Some(summary) = latest.as_ref() else {
            continue;
        };

        let clock_out = summary.expected_completion_time.map(|t| format_time(&t)).unwrap_or_default();
        for due in log.take_due(summary, &config.reminders, now) {
            msg_success!(Message::ReminderDue {
                time: clock_out.clone(),
                message: due.message,
            });
        }
        if let Some(wait) = log.next_due_in(summary, &config.reminders, now) {
            tracing::debug!(minutes = wait.num_minutes(), "next reminder");
        }
    }
}

fn status_line(summary: &AttendanceSummary) {
    msg_print!(Message::WorkedTotal(summary.total_worked.clone()));
    match summary.expected_completion_time {
        Some(expected) => msg_print!(Message::ExpectedOut(format_time(&expected))),
        None if summary.is_day_complete() => msg_print!(Message::DayComplete),
        None => msg_print!(Message::NotClockedIn),
    }
}
