//! Location of clockout's files (config, cached fetch, encrypted token).
//!
//! - **Windows**: `%LOCALAPPDATA%\clockout\`
//! - **macOS**: `~/Library/Application Support/clockout/`
//! - **Linux**: `~/.local/share/clockout/`
//!
//! `CLOCKOUT_HOME` overrides the directory on every platform.

use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "clockout";
pub const HOME_ENV: &str = "CLOCKOUT_HOME";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStorage {
    pub fn new() -> Self {
        if let Ok(home) = var(HOME_ENV) {
            return Self::at(home);
        }

        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        Self::at(Path::new(&base_path).join(APP_NAME))
    }

    pub fn at(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    /// Path of `file_name` inside the storage directory, creating the
    /// directory on first use.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}
