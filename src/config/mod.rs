//! Configuration for the slide runtime.
//!
//! Tunables live in an optional TOML document grouped into `[navigation]`,
//! `[presenter]` and `[logging]` tables. Missing or invalid entries fall back
//! to defaults so a deck always starts.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{parse_config, serialize_config};
pub use models::{DeckConfig, LogLevel};
