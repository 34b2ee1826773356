// crates/domain/src/time.rs
//! Raw stat times to timezone-aware instants.

use chrono::{DateTime, FixedOffset, Local, Utc};
use file_meta_shared_kernel::StatTime;

use crate::options::TimeZonePolicy;

/// Seconds between 1601-01-01 and 1970-01-01, the FILETIME and Unix epochs.
const FILETIME_EPOCH_OFFSET_SECS: i64 = 11_644_473_600;
const FILETIME_TICKS_PER_SEC: u64 = 10_000_000;
const NANOS_PER_TICK: u64 = 100;

/// Converts a stat time into an instant in the zone chosen by `policy`.
///
/// Returns `None` when the nanosecond part is outside `0..1_000_000_000` or
/// the instant is outside the range chrono can represent.
pub fn normalize(raw: StatTime, policy: TimeZonePolicy) -> Option<DateTime<FixedOffset>> {
    let nanos = u32::try_from(raw.nanos).ok().filter(|n| *n < 1_000_000_000)?;
    let utc = DateTime::<Utc>::from_timestamp(raw.secs, nanos)?;
    Some(match policy {
        TimeZonePolicy::Local => utc.with_timezone(&Local).fixed_offset(),
        TimeZonePolicy::Utc => utc.fixed_offset(),
    })
}

/// Converts a FILETIME (100 ns ticks since 1601) into a Unix-epoch stat time.
pub fn from_filetime(ticks: u64) -> StatTime {
    // Both parts fit: u64::MAX / 10^7 is far below i64::MAX.
    let secs = (ticks / FILETIME_TICKS_PER_SEC) as i64 - FILETIME_EPOCH_OFFSET_SECS;
    let nanos = ((ticks % FILETIME_TICKS_PER_SEC) * NANOS_PER_TICK) as i64;
    StatTime::new(secs, nanos)
}
