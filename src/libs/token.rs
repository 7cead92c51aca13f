//! Where the Keka bearer token comes from.
//!
//! A token is resolved in this order:
//!
//! 1. an explicit `--token` argument
//! 2. the `CLOCKOUT_TOKEN` environment variable (a `.env` file works too)
//! 3. the encrypted token stored by `clockout token set` / `token import`
//!
//! `token import` reads a dump of the Keka tab's `localStorage` and
//! `sessionStorage` and picks the access token out of it with
//! [`extract_from_storage`]. A dump looks like:
//!
//! ```json
//! {
//!   "localStorage":   { "access_token": "eyJhbGciOi..." },
//!   "sessionStorage": { "oidc.user": "{\"accessToken\":\"eyJhbGciOi...\"}" }
//! }
//! ```

use crate::libs::secret::Secret;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::env;
use std::fmt;
use thiserror::Error;

pub const TOKEN_ENV: &str = "CLOCKOUT_TOKEN";
pub const TOKEN_SECRET_FILE: &str = ".keka_token";
pub const TOKEN_PROMPT: &str = "Paste your Keka access token";

/// Every JWT starts with the base64 of `{"`.
const JWT_PREFIX: &str = "eyJ";

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("No Keka token found. Run `clockout token set`, `clockout token import <file>` or export CLOCKOUT_TOKEN")]
    NotFound,
    #[error("No access token found in the storage dump")]
    NotInStorage,
    #[error("Stored token could not be read: {0}")]
    Unreadable(String),
}

/// Where a resolved token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenOrigin {
    Argument,
    Environment,
    Store,
}

impl fmt::Display for TokenOrigin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenOrigin::Argument => write!(f, "command line"),
            TokenOrigin::Environment => write!(f, "{}", TOKEN_ENV),
            TokenOrigin::Store => write!(f, "token store"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedToken {
    pub token: String,
    pub origin: TokenOrigin,
}

pub struct TokenSource {
    explicit: Option<String>,
    env_var: String,
    secret: Secret,
}

impl TokenSource {
    pub fn new(explicit: Option<String>) -> Self {
        Self::with_store(explicit, TOKEN_ENV, token_store())
    }

    pub fn with_store(explicit: Option<String>, env_var: &str, secret: Secret) -> Self {
        Self {
            explicit,
            env_var: env_var.to_string(),
            secret,
        }
    }

    pub fn resolve(&self) -> Result<ResolvedToken, TokenError> {
        if let Some(token) = non_empty(self.explicit.as_deref()) {
            return Ok(ResolvedToken {
                token,
                origin: TokenOrigin::Argument,
            });
        }

        if let Some(token) = non_empty(env::var(&self.env_var).ok().as_deref()) {
            return Ok(ResolvedToken {
                token,
                origin: TokenOrigin::Environment,
            });
        }

        match self.secret.get() {
            Ok(Some(token)) if !token.trim().is_empty() => Ok(ResolvedToken {
                token: token.trim().to_string(),
                origin: TokenOrigin::Store,
            }),
            Ok(_) => Err(TokenError::NotFound),
            Err(e) => Err(TokenError::Unreadable(e.to_string())),
        }
    }
}

/// The encrypted store used for the bearer token.
pub fn token_store() -> Secret {
    Secret::new(TOKEN_SECRET_FILE, TOKEN_PROMPT)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

pub fn looks_like_jwt(value: &str) -> bool {
    value.starts_with(JWT_PREFIX)
}

/// Browser storage exported from a logged-in Keka tab.
///
/// Non-string values are kept as their JSON text. Keys are visited in
/// sorted order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageDump {
    #[serde(default)]
    pub local_storage: BTreeMap<String, Value>,
    #[serde(default)]
    pub session_storage: BTreeMap<String, Value>,
}

impl StorageDump {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn extract(&self) -> Option<ExtractedToken> {
        extract_from_storage(&pairs(&self.local_storage), &pairs(&self.session_storage))
    }
}

fn pairs(storage: &BTreeMap<String, Value>) -> Vec<(String, String)> {
    storage
        .iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), text)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedToken {
    pub token: String,
    /// `localStorage:<key>` or `sessionStorage:<key>`.
    pub source: String,
}

/// Finds the access token in page storage.
///
/// `localStorage` is scanned first. Keys mentioning `id_token` are never
/// used. A key mentioning `access` may hold the raw JWT; any value may be a
/// JSON object whose `accessToken` field is the JWT. `sessionStorage` is only
/// consulted when `localStorage` has nothing, and only for the JSON form.
pub fn extract_from_storage(local: &[(String, String)], session: &[(String, String)]) -> Option<ExtractedToken> {
    for (key, value) in local.iter().filter(|(key, value)| usable(key, value)) {
        if key.to_lowercase().contains("access") && looks_like_jwt(value) {
            return Some(found("localStorage", key, value.clone()));
        }
        if let Some(token) = json_access_token(value) {
            return Some(found("localStorage", key, token));
        }
    }

    session
        .iter()
        .filter(|(key, value)| usable(key, value))
        .find_map(|(key, value)| json_access_token(value).map(|token| found("sessionStorage", key, token)))
}

fn usable(key: &str, value: &str) -> bool {
    !value.is_empty() && !key.to_lowercase().contains("id_token")
}

fn json_access_token(value: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(value).ok()?;
    parsed
        .get("accessToken")
        .and_then(Value::as_str)
        .filter(|token| looks_like_jwt(token))
        .map(str::to_string)
}

fn found(area: &str, key: &str, token: String) -> ExtractedToken {
    tracing::debug!(area, key, "found access token");
    ExtractedToken {
        token,
        source: format!("{}:{}", area, key),
    }
}

/// Short form of a token for display: first 6 and last 4 characters.
pub fn mask(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 12 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}
