// crates/infra/src/stat.rs
use std::{io, path::Path};

use file_meta_ports::StatSource;
use file_meta_shared_kernel::{InfraResult, InfrastructureError, RawStat};

#[cfg(windows)]
mod windows;

/// Stat snapshots through `std::fs`, decoded into the platform's native shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStatSource;

impl StatSource for FsStatSource {
    fn stat(&self, path: &Path, follow_links: bool) -> InfraResult<RawStat> {
        capture(path, follow_links)
    }
}

/// Takes one snapshot of `path`; `follow_links = false` describes a symlink itself.
pub fn capture(path: &Path, follow_links: bool) -> InfraResult<RawStat> {
    snapshot(path, follow_links).map_err(|source| InfrastructureError::Stat { path: path.to_path_buf(), source })
}

#[cfg(unix)]
fn snapshot(path: &Path, follow_links: bool) -> io::Result<RawStat> {
    use std::os::unix::fs::MetadataExt;

    use file_meta_shared_kernel::{StatTime, UnixStat};

    let metadata = if follow_links { std::fs::metadata(path)? } else { std::fs::symlink_metadata(path)? };
    Ok(RawStat::Unix(UnixStat {
        mode: metadata.mode(),
        uid: metadata.uid(),
        gid: metadata.gid(),
        size: metadata.size(),
        atime: StatTime::new(metadata.atime(), metadata.atime_nsec()),
        mtime: StatTime::new(metadata.mtime(), metadata.mtime_nsec()),
        ctime: StatTime::new(metadata.ctime(), metadata.ctime_nsec()),
    }))
}

#[cfg(windows)]
fn snapshot(path: &Path, follow_links: bool) -> io::Result<RawStat> {
    windows::capture(path, follow_links)
}

#[cfg(all(not(unix), not(windows)))]
fn snapshot(path: &Path, follow_links: bool) -> io::Result<RawStat> {
    // Surface a missing path as NotFound before reporting the platform gap.
    let _metadata = if follow_links { std::fs::metadata(path)? } else { std::fs::symlink_metadata(path)? };
    Err(io::Error::new(io::ErrorKind::Unsupported, "no native stat shape for this platform"))
}
