//! Today's attendance summary command.
//!
//! Fetches the current day from Keka (or a saved response with `--file`),
//! runs it through the summary pipeline with the configured daily target and
//! prints worked time, expected clock-out, punches and sessions. Each
//! successful fetch is cached; `--cached` shows that cache without touching
//! the network.

use crate::api::{AttendanceSource, Keka, PayloadFile};
use crate::libs::cache::LastFetch;
use crate::libs::config::Config;
use crate::libs::formatter::format_time;
use crate::libs::messages::Message;
use crate::libs::summary::{summarize, AttendanceSummary};
use crate::libs::token::{mask, TokenSource};
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_debug, msg_error_anyhow, msg_info, msg_warning};
use anyhow::Result;
use chrono::{DateTime, Local};
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct TodayArgs {
    /// Bearer token to use instead of the stored one
    #[arg(long, short)]
    token: Option<String>,

    /// Read a saved attendance response instead of calling Keka
    #[arg(long, short, conflicts_with = "cached")]
    file: Option<PathBuf>,

    /// Show the last successful fetch without calling Keka
    #[arg(long)]
    cached: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

pub async fn cmd(args: TodayArgs) -> Result<()> {
    if args.cached {
        return show_cached(args.json);
    }

    let config = Config::read()?;
    let now = Local::now();
    let summary = fetch_summary(&config, args.token, args.file.as_deref(), now).await?;

    if let Err(e) = LastFetch::new().and_then(|cache| cache.save(&summary)) {
        msg_warning!(Message::CacheSaveFailed(e.to_string()));
    }

    render(&summary, args.json)?;
    if !args.json {
        View::upcoming(&summary, &config.reminders, now);
    }
    Ok(())
}

/// Loads today's record from the chosen source and summarizes it at `now`.
pub async fn fetch_summary(config: &Config, token: Option<String>, file: Option<&Path>, now: DateTime<Local>) -> Result<AttendanceSummary> {
    let record = match file {
        Some(path) => {
            msg_debug!(Message::FetchingAttendance(path.display().to_string()));
            load(&PayloadFile::new(path), "").await?
        }
        None => {
            let resolved = TokenSource::new(token).resolve()?;
            msg_debug!(Message::TokenResolved {
                origin: resolved.origin.to_string(),
                masked: mask(&resolved.token),
            });

            let keka_config = config.keka();
            msg_debug!(Message::FetchingAttendance(keka_config.origin()));
            let keka = Keka::new(&keka_config)?;
            load(&keka, &resolved.token).await?
        }
    };

    Ok(summarize(&record, now, config.daily_target()))
}

async fn load<S: AttendanceSource>(source: &S, token: &str) -> Result<crate::libs::punch::AttendanceRecord> {
    source
        .fetch_latest(token)
        .await
        .map_err(|e| msg_error_anyhow!(Message::FetchFailed(e.to_string())))
}

fn show_cached(json: bool) -> Result<()> {
    let Some(summary) = LastFetch::new()?.load()? else {
        msg_bail_anyhow!(Message::NoCachedFetch);
    };

    if !json {
        msg_info!(Message::CachedFetchFrom(format_time(&summary.generated_at)));
    }
    render(&summary, json)
}

fn render(summary: &AttendanceSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        View::summary(summary);
    }
    Ok(())
}
