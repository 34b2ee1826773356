// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_info;
pub mod identity;
pub mod raw_stat;

pub use file_info::{FileInfo, FileTimes, FileTimestamps, Permissions};
pub use identity::{AccountSid, GroupId, UserId};
pub use raw_stat::{RawStat, StatTime, UnixStat, WindowsStat};
