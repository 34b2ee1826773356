// crates/shared-kernel/src/value_objects/file_info.rs
use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::value_objects::{AccountSid, GroupId, UserId};

/// Access-permission bits of a POSIX mode (setuid, setgid, sticky, rwx).
const ACCESS_BITS: u32 = 0o7777;

/// Access-permission bits rendered as a fixed-width octal string, e.g. `0644`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Permissions(String);

impl Permissions {
    /// Masks off the file-type bits of `mode` and renders the rest.
    pub fn from_mode(mode: u32) -> Self {
        Self(format!("{:04o}", mode & ACCESS_BITS))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Permissions {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized, timezone-aware timestamps of one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileTimes {
    pub access: DateTime<FixedOffset>,
    pub modify: DateTime<FixedOffset>,
    /// Metadata change time; Windows has no equivalent.
    pub change: Option<DateTime<FixedOffset>>,
}

/// The instants of [`FileTimes`] as Unix epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileTimestamps {
    pub access: i64,
    pub modify: i64,
    pub change: Option<i64>,
}

impl From<&FileTimes> for FileTimestamps {
    fn from(times: &FileTimes) -> Self {
        Self {
            access: times.access.timestamp(),
            modify: times.modify.timestamp(),
            change: times.change.map(|t| t.timestamp()),
        }
    }
}

/// Normalized description of one filesystem entry's permissions, ownership
/// and timestamps.
///
/// Values are built in one extraction call from a single stat snapshot and
/// have no setters; the name/id pairs therefore always describe the same
/// owner and group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    permissions: Option<Permissions>,
    user: String,
    uid: Option<UserId>,
    group: Option<String>,
    gid: Option<GroupId>,
    #[serde(rename = "SID")]
    sid: Option<AccountSid>,
    time: FileTimes,
    timestamp: FileTimestamps,
}

impl FileInfo {
    /// Record for a POSIX entry: mode bits plus numeric and resolved identities.
    pub fn posix(
        permissions: Permissions,
        (uid, user): (UserId, String),
        (gid, group): (GroupId, String),
        time: FileTimes,
    ) -> Self {
        Self {
            permissions: Some(permissions),
            user,
            uid: Some(uid),
            group: Some(group),
            gid: Some(gid),
            sid: None,
            timestamp: FileTimestamps::from(&time),
            time,
        }
    }

    /// Record for a Windows entry: owner SID and its account name only.
    pub fn windows(sid: AccountSid, user: String, time: FileTimes) -> Self {
        Self {
            permissions: None,
            user,
            uid: None,
            group: None,
            gid: None,
            sid: Some(sid),
            timestamp: FileTimestamps::from(&time),
            time,
        }
    }

    pub fn permissions(&self) -> Option<&Permissions> {
        self.permissions.as_ref()
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn uid(&self) -> Option<UserId> {
        self.uid
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn gid(&self) -> Option<GroupId> {
        self.gid
    }

    pub fn sid(&self) -> Option<&AccountSid> {
        self.sid.as_ref()
    }

    pub fn time(&self) -> &FileTimes {
        &self.time
    }

    pub fn timestamp(&self) -> &FileTimestamps {
        &self.timestamp
    }
}
