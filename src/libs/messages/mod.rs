//! User-facing text: the [`Message`] enum, its wording and the printing macros.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
