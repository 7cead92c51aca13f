//! # clockout
//!
//! Reads today's punches from Keka and tells you how long you have worked,
//! how long is left and when you can clock out.
//!
//! The pipeline is pure and lives in [`libs`]:
//!
//! - [`libs::normalizer`]: sort punches and drop same-minute duplicates
//! - [`libs::projector`]: pair IN/OUT punches into sessions and project the
//!   expected clock-out
//! - [`libs::summary`]: the display-ready record built from both
//!
//! [`api`] fetches attendance from Keka and [`commands`] wires everything to
//! the CLI.
//!
//! ```rust,no_run
//! use clockout::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
