//! Macros for printing [`Message`](super::Message)s.
//!
//! In debug mode (`CLOCKOUT_DEBUG` or `RUST_LOG` set) every macro goes
//! through `tracing`; otherwise they print straight to the terminal.
//!
//! ```text
//! msg_info!(..) ──▶ debug mode? ──yes──▶ tracing::info!
//!                        │
//!                        └──no───▶ println!
//! ```
//!
//! - **`msg_print!`**: plain message
//! - **`msg_success!`** / **`msg_info!`** / **`msg_warning!`** / **`msg_error!`**: prefixed with ✅ ℹ️ ⚠️ ❌
//! - **`msg_debug!`**: only in debug mode
//! - **`msg_error_anyhow!`** / **`msg_bail_anyhow!`**: build or return an `anyhow::Error`
//!
//! ```rust
//! use clockout::libs::messages::Message;
//! use clockout::{msg_error_anyhow, msg_success};
//!
//! msg_success!(Message::TokenStored);
//! let err = msg_error_anyhow!(Message::NoCachedFetch);
//! assert!(err.to_string().starts_with("❌"));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether debug output is enabled. Checked once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("CLOCKOUT_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Shared body of the printing macros: tracing at `$level` in debug mode,
/// `$print!` otherwise. `padded` surrounds the line with blank lines.
#[doc(hidden)]
#[macro_export]
macro_rules! __msg_emit {
    ($level:ident, $print:ident, $prefix:literal, $msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("{}{}", $prefix, $msg);
        } else {
            $print!("{}{}", $prefix, $msg);
        }
    };
    ($level:ident, $print:ident, $prefix:literal, $msg:expr, padded) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("\n{}{}\n", $prefix, $msg);
        } else {
            $print!("\n{}{}\n", $prefix, $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "", $msg, padded)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "✅ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "✅ ", $msg, padded)
    };
}

/// Errors go to stderr outside debug mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_emit!(error, eprintln, "❌ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(error, eprintln, "❌ ", $msg, padded)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_emit!(warn, println, "⚠️ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(warn, println, "⚠️ ", $msg, padded)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "ℹ️ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "ℹ️ ", $msg, padded)
    };
}

/// Silent unless debug mode is on.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` carrying the message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Returns early with the message as an `anyhow::Error`.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
