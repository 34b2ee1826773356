// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ExtractionError, ExtractionResult, FileMetaError, InfraResult, InfrastructureError,
    LookupError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{
    AccountSid, FileInfo, FileTimes, FileTimestamps, GroupId, Permissions, RawStat, StatTime, UnixStat, UserId,
    WindowsStat,
};
