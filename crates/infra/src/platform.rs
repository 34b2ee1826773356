// crates/infra/src/platform.rs
//! Compile-time selection of the extraction backend.
//!
//! Centralizes the OS-specific choice so callers never write `cfg` blocks:
//! they take [`PlatformExtractor`] from [`default_extractor`] and use it
//! through the [`MetadataExtractor`] port.
//!
//! [`MetadataExtractor`]: file_meta_ports::MetadataExtractor

use file_meta_domain::ExtractOptions;

use crate::identity::SystemIdentityDirectory;

/// Extraction backend for the current platform.
#[cfg(not(windows))]
pub type PlatformExtractor = file_meta_usecase::UnixMetadataExtractor<SystemIdentityDirectory>;

#[cfg(windows)]
pub type PlatformExtractor = file_meta_usecase::WindowsMetadataExtractor<SystemIdentityDirectory>;

/// Create the extraction backend for the current platform.
pub fn default_extractor(options: ExtractOptions) -> PlatformExtractor {
    PlatformExtractor::new(SystemIdentityDirectory, options)
}
