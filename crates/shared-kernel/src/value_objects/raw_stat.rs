// crates/shared-kernel/src/value_objects/raw_stat.rs
use crate::value_objects::AccountSid;

/// Seconds and nanoseconds since the Unix epoch, as stored in `struct stat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StatTime {
    pub secs: i64,
    pub nanos: i64,
}

impl StatTime {
    #[inline]
    pub const fn new(secs: i64, nanos: i64) -> Self {
        Self { secs, nanos }
    }

    #[inline]
    pub const fn from_secs(secs: i64) -> Self {
        Self { secs, nanos: 0 }
    }
}

/// Fields of a POSIX stat result the extractors consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnixStat {
    /// Full `st_mode`, file-type bits included.
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    pub atime: StatTime,
    pub mtime: StatTime,
    /// Last status (metadata) change.
    pub ctime: StatTime,
}

/// Fields of a Windows file query the extractors consume.
///
/// Times are FILETIME values: 100-nanosecond ticks since 1601-01-01 UTC.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowsStat {
    /// `None` when the security descriptor could not be read.
    pub owner_sid: Option<AccountSid>,
    pub size: u64,
    pub last_access: u64,
    pub last_write: u64,
}

/// One stat snapshot in the native shape of the platform that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawStat {
    Unix(UnixStat),
    Windows(WindowsStat),
}

impl RawStat {
    /// Short name of the native shape, used when a backend rejects it.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unix(_) => "unix",
            Self::Windows(_) => "windows",
        }
    }

    pub const fn size(&self) -> u64 {
        match self {
            Self::Unix(stat) => stat.size,
            Self::Windows(stat) => stat.size,
        }
    }
}

impl From<UnixStat> for RawStat {
    fn from(stat: UnixStat) -> Self {
        Self::Unix(stat)
    }
}

impl From<WindowsStat> for RawStat {
    fn from(stat: WindowsStat) -> Self {
        Self::Windows(stat)
    }
}
