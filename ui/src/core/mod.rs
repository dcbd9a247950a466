//! Platform-agnostic metric generation and formatting. Nothing in here
//! touches Dioxus so it can be unit tested on any target.

pub mod directory;
pub mod format;
pub mod generator;
pub mod kpi;
pub mod metrics;
pub mod sources;
pub mod time_range;
