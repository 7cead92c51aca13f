//! Configuration management for clockout.
//!
//! Settings live in `config.json` in the data directory (see
//! [`DataStorage`]). A missing file is not an error: every section is
//! optional and falls back to its defaults.
//!
//! ## Configuration Structure
//!
//! - **keka**: which Keka tenant to talk to (subdomain, optional origin override)
//! - **workday**: daily target and the refresh interval used by `watch`
//! - **reminders**: notifications ahead of the projected clock-out
//!
//! The bearer token is never written here; it goes to the encrypted token
//! store instead.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use clockout::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Daily target: {} minutes", config.daily_target().num_minutes());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::keka::KekaConfig;
use crate::libs::messages::Message;
use crate::libs::projector::{default_daily_target, DEFAULT_DAILY_TARGET_MINUTES};
use crate::libs::reminder::Reminder;
use crate::msg_print;
use anyhow::Result;
use chrono::Duration;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A section offered by the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Key used to route the selection
    pub key: String,
    /// Name shown in the selection list
    pub name: String,
}

/// Workday settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WorkdayConfig {
    /// Length of a full workday in minutes.
    pub daily_target_minutes: u64,

    /// Minutes between fetches while `watch` is running.
    pub refresh_interval: u64,
}

impl Default for WorkdayConfig {
    /// 8 hour workday, refreshed every 5 minutes.
    fn default() -> Self {
        WorkdayConfig {
            daily_target_minutes: DEFAULT_DAILY_TARGET_MINUTES as u64,
            refresh_interval: 5,
        }
    }
}

impl WorkdayConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "workday".to_string(),
            name: "Workday".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keka: Option<KekaConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workday: Option<WorkdayConfig>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reminders: Vec<Reminder>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reads the configuration, or the default one if no file exists.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns whether one existed.
    pub fn delete() -> Result<bool> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    pub fn keka(&self) -> KekaConfig {
        self.keka.clone().unwrap_or_default()
    }

    pub fn workday(&self) -> WorkdayConfig {
        self.workday.clone().unwrap_or_default()
    }

    /// The configured daily target, 8 hours unless set or out of range.
    pub fn daily_target(&self) -> Duration {
        let minutes = self.workday().daily_target_minutes;
        i64::try_from(minutes).ok().and_then(Duration::try_minutes).unwrap_or_else(|| {
            tracing::warn!(minutes, "daily target out of range, using the default");
            default_daily_target()
        })
    }

    pub fn add_reminder(&mut self, reminder: Reminder) {
        self.reminders.push(reminder);
    }

    /// Removes the reminder with `id`. Returns whether it existed.
    pub fn remove_reminder(&mut self, id: &str) -> bool {
        let before = self.reminders.len();
        self.reminders.retain(|r| r.id != id);
        self.reminders.len() < before
    }

    /// Runs the interactive setup, starting from the saved values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![KekaConfig::module(), WorkdayConfig::module()];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "keka" => config.keka = Some(KekaConfig::init(&config.keka)?),
                "workday" => {
                    let default = config.workday();
                    msg_print!(Message::ConfigModuleWorkday);
                    config.workday = Some(WorkdayConfig {
                        daily_target_minutes: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDailyTarget.to_string())
                            .default(default.daily_target_minutes)
                            .interact_text()?,
                        refresh_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptRefreshInterval.to_string())
                            .default(default.refresh_interval)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
