//! Tracing setup.
//!
//! Structured logs are only emitted in debug mode (`CLOCKOUT_DEBUG` or
//! `RUST_LOG` set); otherwise the message macros print plain text and no
//! subscriber is installed. Logs go to stderr so `today --json` output stays
//! clean.

use crate::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=debug", env!("CARGO_PKG_NAME").replace('-', "_"))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
