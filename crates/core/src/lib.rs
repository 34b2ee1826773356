//! Normalized permission, ownership and timestamp information for
//! filesystem entries.
//!
//! ```no_run
//! use file_meta_core::{ExtractOptions, FileMetadataService};
//!
//! let service = FileMetadataService::new(ExtractOptions::default());
//! let info = service.describe("/etc/hosts".as_ref())?;
//! println!("{} {}", info.user(), info.permissions().map_or("-", |p| p.as_str()));
//! # Ok::<(), file_meta_core::FileMetaError>(())
//! ```

#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod service;

pub use file_meta_domain::{ExtractOptions, TimeZonePolicy};
pub use file_meta_infra::{FsStatSource, PlatformExtractor, SystemIdentityDirectory, default_extractor};
pub use file_meta_ports::{IdentityDirectory, MetadataExtractor, StatSource};
pub use file_meta_shared_kernel::{
    AccountSid, ExtractionError, FileInfo, FileMetaError, FileTimes, FileTimestamps, GroupId,
    InfrastructureError, LookupError, Permissions, RawStat, Result, StatTime, UnixStat, UserId, WindowsStat,
};
pub use file_meta_usecase::{DescribePath, UnixMetadataExtractor, WindowsMetadataExtractor};
pub use service::{FileMetadataService, describe};
