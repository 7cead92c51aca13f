//! Keka attendance API client.
//!
//! Calls the private "my time" summary endpoint of a Keka tenant with the
//! user's bearer token:
//!
//! ```text
//! GET https://{subdomain}.keka.com/k/attendance/api/mytime/attendance/summary
//! Authorization: Bearer eyJ...
//! ```
//!
//! The body lists one record per day; the last one is today. Parsing and
//! status handling are plain functions so they can be exercised without a
//! network.

use super::AttendanceSource;
use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::punch::{AttendanceRecord, AttendanceResponse};
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{header::ACCEPT, Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_SUBDOMAIN: &str = "webosmotic";
const SUMMARY_PATH: &str = "k/attendance/api/mytime/attendance/summary";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum KekaError {
    #[error("Keka rejected the token (HTTP {0}). Sign in to Keka again and refresh the stored token")]
    Unauthorized(u16),
    #[error("Keka API failed: HTTP {0}")]
    Status(u16),
    #[error("Keka API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Keka API returned an unexpected body: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("No attendance data returned by Keka API")]
    NoAttendanceData,
}

/// Maps a non-success HTTP status to an error.
pub fn check_status(status: StatusCode) -> Result<(), KekaError> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(KekaError::Unauthorized(status.as_u16())),
        s => Err(KekaError::Status(s.as_u16())),
    }
}

pub fn parse_response(body: &str) -> Result<AttendanceResponse, KekaError> {
    Ok(serde_json::from_str(body)?)
}

/// Today's record: the last one in the response.
pub fn select_latest(response: AttendanceResponse) -> Result<AttendanceRecord, KekaError> {
    response.into_latest().ok_or(KekaError::NoAttendanceData)
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KekaConfig {
    /// Tenant name, the `acme` in `acme.keka.com`.
    pub subdomain: String,
    /// Replaces `https://{subdomain}.keka.com` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for KekaConfig {
    fn default() -> Self {
        Self {
            subdomain: DEFAULT_SUBDOMAIN.to_string(),
            base_url: None,
        }
    }
}

impl KekaConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "keka".to_string(),
            name: "Keka".to_string(),
        }
    }

    pub fn origin(&self) -> String {
        match self.base_url.as_deref().map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.keka.com", self.subdomain.trim()),
        }
    }

    pub fn summary_url(&self) -> String {
        format!("{}/{}", self.origin(), SUMMARY_PATH)
    }

    pub fn init(config: &Option<KekaConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleKeka);

        let subdomain: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptKekaSubdomain.to_string())
            .default(config.subdomain)
            .interact_text()?;
        let subdomain = match subdomain.trim() {
            "" => DEFAULT_SUBDOMAIN.to_string(),
            s => s.to_string(),
        };

        Ok(Self {
            subdomain,
            base_url: config.base_url,
        })
    }
}

#[derive(Debug)]
pub struct Keka {
    client: Client,
    config: KekaConfig,
}

impl Keka {
    pub fn new(config: &KekaConfig) -> Result<Self, KekaError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub async fn fetch_summary(&self, token: &str) -> Result<AttendanceResponse, KekaError> {
        let url = self.config.summary_url();
        tracing::debug!(%url, "requesting attendance summary");

        let res = self.client.get(&url).bearer_auth(token).header(ACCEPT, "application/json").send().await?;
        let status = res.status();
        tracing::debug!(status = status.as_u16(), "attendance summary responded");
        check_status(status)?;

        let body = res.text().await?;
        parse_response(&body)
    }
}

impl AttendanceSource for Keka {
    async fn fetch_latest(&self, token: &str) -> Result<AttendanceRecord> {
        let response = self.fetch_summary(token).await?;
        Ok(select_latest(response)?)
    }
}
