//! OS adapters for the ports: stat capture, identity directories and the
//! compile-time choice of extraction backend.

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod identity;
pub mod platform;
pub mod stat;

pub use identity::SystemIdentityDirectory;
pub use platform::{PlatformExtractor, default_extractor};
pub use stat::FsStatSource;
