//! Core library modules for clockout.
//!
//! - **Pipeline**: punches, normalization, projection, summaries, formatting
//! - **Infrastructure**: configuration, data storage, secrets, token lookup, cache
//! - **Output**: messages, terminal views, logging
//!
//! ```rust
//! use chrono::{Local, TimeZone};
//! use clockout::libs::normalizer::normalize_events;
//! use clockout::libs::projector::{default_daily_target, project};
//! use clockout::libs::punch::PunchEvent;
//!
//! let nine = Local.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
//! let noon = Local.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
//!
//! let entries = normalize_events(vec![PunchEvent::clock_in(nine)]);
//! let projection = project(&entries, noon, default_daily_target());
//! assert_eq!(projection.total_worked.num_hours(), 3);
//! assert_eq!(projection.remaining.num_hours(), 5);
//! ```

pub mod cache;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod normalizer;
pub mod projector;
pub mod punch;
pub mod reminder;
pub mod secret;
pub mod summary;
pub mod token;
pub mod view;
