//! # Use Cases
//!
//! Application-level logic built on the ports:
//!
//! - [`extraction`]: the Unix and Windows [`MetadataExtractor`] backends
//! - [`describe`]: stat a path once and extract its [`FileInfo`]
//!
//! Use cases depend on both domain and ports, but not on infrastructure.
//!
//! [`MetadataExtractor`]: file_meta_ports::MetadataExtractor
//! [`FileInfo`]: file_meta_shared_kernel::FileInfo

#![allow(clippy::multiple_crate_versions)]

pub mod describe;
pub mod extraction;

pub use describe::DescribePath;
pub use extraction::{UnixMetadataExtractor, WindowsMetadataExtractor};
