// crates/usecase/src/extraction/windows.rs
use file_meta_domain::{ExtractOptions, TimeZonePolicy, time::from_filetime};
use file_meta_ports::{IdentityDirectory, MetadataExtractor};
use file_meta_shared_kernel::{ExtractionError, ExtractionResult, FileInfo, FileTimes, LookupError, RawStat};

use super::normalize_time;

/// Windows backend: owner SID resolved to an account name, access and
/// last-write times. Mode bits, numeric ids and the primary group are not
/// reported.
#[derive(Debug, Clone)]
pub struct WindowsMetadataExtractor<D> {
    directory: D,
    timezone: TimeZonePolicy,
}

impl<D: IdentityDirectory> WindowsMetadataExtractor<D> {
    pub fn new(directory: D, options: ExtractOptions) -> Self {
        Self { directory, timezone: options.timezone }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }
}

impl<D: IdentityDirectory> MetadataExtractor for WindowsMetadataExtractor<D> {
    fn extract(&self, stat: &RawStat, display_name: &str) -> ExtractionResult<FileInfo> {
        let RawStat::Windows(stat) = stat else {
            return Err(ExtractionError::Permissions {
                name: display_name.to_owned(),
                found: stat.kind(),
            });
        };

        let sid = stat.owner_sid.clone().ok_or_else(|| ExtractionError::User {
            name: display_name.to_owned(),
            source: LookupError::Unavailable { what: "owner SID".to_owned() },
        })?;
        let user = self
            .directory
            .account_name(&sid)
            .map_err(|source| ExtractionError::User { name: display_name.to_owned(), source })?;

        let time = FileTimes {
            access: normalize_time(from_filetime(stat.last_access), self.timezone, display_name, "access time")?,
            modify: normalize_time(from_filetime(stat.last_write), self.timezone, display_name, "modification time")?,
            change: None,
        };

        Ok(FileInfo::windows(sid, user, time))
    }
}
