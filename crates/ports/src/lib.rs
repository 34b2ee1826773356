//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`identity`]: user/group directory lookups
//! - [`extractor`]: platform metadata extraction backends
//! - [`stat`]: taking a stat snapshot of a path
//!
//! These ports keep the extraction backends independent of the host's
//! account database and of the filesystem.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod extractor;
pub mod identity;
pub mod stat;

pub use extractor::MetadataExtractor;
pub use identity::IdentityDirectory;
pub use stat::StatSource;
