//! Pure decoding rules shared by every extraction backend.
//!
//! - [`options`]: extraction settings (time zone, link handling)
//! - [`time`]: conversion of raw stat times into timezone-aware instants

#![allow(clippy::multiple_crate_versions)]

pub mod options;
pub mod time;

pub use options::{ExtractOptions, TimeZonePolicy};
