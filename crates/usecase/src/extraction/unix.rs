// crates/usecase/src/extraction/unix.rs
use file_meta_domain::{ExtractOptions, TimeZonePolicy};
use file_meta_ports::{IdentityDirectory, MetadataExtractor};
use file_meta_shared_kernel::{
    ExtractionError, ExtractionResult, FileInfo, FileTimes, GroupId, Permissions, RawStat, UserId,
};

use super::normalize_time;

/// POSIX backend: mode bits, numeric uid/gid resolved through the directory,
/// access/modify/change times.
#[derive(Debug, Clone)]
pub struct UnixMetadataExtractor<D> {
    directory: D,
    timezone: TimeZonePolicy,
}

impl<D: IdentityDirectory> UnixMetadataExtractor<D> {
    pub fn new(directory: D, options: ExtractOptions) -> Self {
        Self { directory, timezone: options.timezone }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }
}

impl<D: IdentityDirectory> MetadataExtractor for UnixMetadataExtractor<D> {
    fn extract(&self, stat: &RawStat, display_name: &str) -> ExtractionResult<FileInfo> {
        let RawStat::Unix(stat) = stat else {
            return Err(ExtractionError::Permissions {
                name: display_name.to_owned(),
                found: stat.kind(),
            });
        };

        let permissions = Permissions::from_mode(stat.mode);

        let uid = UserId::new(stat.uid);
        let user = self
            .directory
            .user_name(uid)
            .map_err(|source| ExtractionError::User { name: display_name.to_owned(), source })?;

        let gid = GroupId::new(stat.gid);
        let group = self
            .directory
            .group_name(gid)
            .map_err(|source| ExtractionError::Group { name: display_name.to_owned(), source })?;

        let time = FileTimes {
            access: normalize_time(stat.atime, self.timezone, display_name, "access time")?,
            modify: normalize_time(stat.mtime, self.timezone, display_name, "modification time")?,
            change: Some(normalize_time(stat.ctime, self.timezone, display_name, "change time")?),
        };

        Ok(FileInfo::posix(permissions, (uid, user), (gid, group), time))
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use file_meta_shared_kernel::{AccountSid, LookupError, StatTime, UnixStat, WindowsStat};
    use proptest::prelude::*;

    use super::*;
    use crate::extraction::stub::StubDirectory;

    fn alice_staff() -> StubDirectory {
        StubDirectory::default().with_user(1000, "alice").with_group(1000, "staff")
    }

    fn regular_file() -> UnixStat {
        UnixStat {
            mode: 0o100644,
            uid: 1000,
            gid: 1000,
            size: 12,
            atime: StatTime::from_secs(1_700_000_000),
            mtime: StatTime::from_secs(1_700_000_050),
            ctime: StatTime::from_secs(1_700_000_100),
        }
    }

    fn extractor(directory: StubDirectory) -> UnixMetadataExtractor<StubDirectory> {
        UnixMetadataExtractor::new(directory, ExtractOptions::default())
    }

    #[test]
    fn describes_a_regular_file() {
        let info = extractor(alice_staff()).extract(&regular_file().into(), "/home/alice/notes").unwrap();

        assert_eq!(info.permissions().map(Permissions::as_str), Some("0644"));
        assert_eq!(info.user(), "alice");
        assert_eq!(info.uid(), Some(UserId::new(1000)));
        assert_eq!(info.group(), Some("staff"));
        assert_eq!(info.gid(), Some(GroupId::new(1000)));
        assert!(info.sid().is_none());
        assert_eq!(info.time().access.timestamp(), 1_700_000_000);
        assert_eq!(info.time().change.map(|t| t.timestamp()), Some(1_700_000_100));
        assert_eq!(info.timestamp().access, 1_700_000_000);
        assert_eq!(info.timestamp().modify, 1_700_000_050);
        assert_eq!(info.timestamp().change, Some(1_700_000_100));
    }

    #[test]
    fn utc_policy_renders_zero_offset() {
        let extractor = UnixMetadataExtractor::new(
            alice_staff(),
            ExtractOptions::default().with_timezone(TimeZonePolicy::Utc),
        );
        let info = extractor.extract(&regular_file().into(), "f").unwrap();
        assert_eq!(info.time().access.to_rfc3339(), "2023-11-14T22:13:20+00:00");
    }

    #[test]
    fn unknown_owner_fails_before_group_lookup() {
        let directory = alice_staff();
        let extractor = extractor(directory);
        let stat = UnixStat { uid: 9999, ..regular_file() };

        let err = extractor.extract(&stat.into(), "/srv/orphan").unwrap_err();

        assert!(matches!(
            &err,
            ExtractionError::User { name, source: LookupError::UnknownUser(uid) }
                if name == "/srv/orphan" && uid.as_raw() == 9999
        ));
        assert_eq!(err.to_string(), "Cannot obtain /srv/orphan user information: user: unknown userid 9999");
        assert_eq!(extractor.directory().calls(), vec!["user 9999".to_string()]);
    }

    #[test]
    fn unknown_group_fails_after_owner_resolved() {
        let extractor = extractor(alice_staff());
        let stat = UnixStat { gid: 4242, ..regular_file() };

        let err = extractor.extract(&stat.into(), "shared.txt").unwrap_err();

        assert!(matches!(err, ExtractionError::Group { source: LookupError::UnknownGroup(_), .. }));
        assert_eq!(extractor.directory().calls(), vec!["user 1000".to_string(), "group 4242".to_string()]);
    }

    #[test]
    fn directory_fault_is_wrapped_not_swallowed() {
        let extractor = extractor(alice_staff().broken());
        let err = extractor.extract(&regular_file().into(), "a").unwrap_err();
        assert!(matches!(err, ExtractionError::User { source: LookupError::Directory { .. }, .. }));
        assert!(err.to_string().contains("directory offline"));
    }

    #[test]
    fn group_directory_fault_surfaces_after_owner_resolved() {
        let extractor = extractor(alice_staff().broken_groups());
        let err = extractor.extract(&regular_file().into(), "/srv/shared").unwrap_err();

        match &err {
            ExtractionError::Group { name, source: LookupError::Directory { what, .. } } => {
                assert_eq!(name, "/srv/shared");
                assert_eq!(what, "group 1000");
            }
            other => panic!("unexpected error: {other}"),
        }
        let lookup = err.source().expect("group error chains the lookup failure");
        assert_eq!(lookup.to_string(), "group 1000 lookup failed: directory offline");
        let io = lookup.source().expect("lookup failure chains the io error");
        assert_eq!(io.to_string(), "directory offline");
        assert_eq!(extractor.directory().calls(), vec!["user 1000".to_string(), "group 1000".to_string()]);
    }

    #[test]
    fn windows_snapshot_is_rejected_without_lookups() {
        let extractor = extractor(alice_staff());
        let stat = WindowsStat { owner_sid: Some(AccountSid::new("S-1-5-18")), ..WindowsStat::default() };

        let err = extractor.extract(&stat.into(), "C:\\x").unwrap_err();

        assert!(matches!(err, ExtractionError::Permissions { found: "windows", .. }));
        assert_eq!(err.to_string(), "Cannot obtain C:\\x permission information");
        assert!(extractor.directory().calls().is_empty());
    }

    #[test]
    fn out_of_range_time_fails_whole_extraction() {
        let stat = UnixStat { ctime: StatTime::new(0, 2_000_000_000), ..regular_file() };
        let err = extractor(alice_staff()).extract(&stat.into(), "weird").unwrap_err();
        assert!(matches!(err, ExtractionError::Time { field: "change time", .. }));
    }

    #[test]
    fn display_name_does_not_affect_output() {
        let extractor = extractor(alice_staff());
        let a = extractor.extract(&regular_file().into(), "one").unwrap();
        let b = extractor.extract(&regular_file().into(), "two").unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn permissions_ignore_file_type_bits(access in 0u32..=0o7777, file_type in prop::sample::select(vec![
            0o010000u32, 0o020000, 0o040000, 0o060000, 0o100000, 0o120000, 0o140000,
        ])) {
            let stat = UnixStat { mode: file_type | access, ..regular_file() };
            let info = extractor(alice_staff()).extract(&stat.into(), "p").unwrap();
            let expected = format!("{access:04o}");
            prop_assert_eq!(info.permissions().map(Permissions::as_str), Some(expected.as_str()));
        }

        #[test]
        fn later_access_time_is_later(secs in 0i64..4_000_000_000, delta in 1i64..10_000_000) {
            let extractor = extractor(alice_staff());
            let early = UnixStat { atime: StatTime::from_secs(secs), ..regular_file() };
            let late = UnixStat { atime: StatTime::from_secs(secs + delta), ..regular_file() };
            let early = extractor.extract(&early.into(), "t").unwrap();
            let late = extractor.extract(&late.into(), "t").unwrap();
            prop_assert!(late.time().access > early.time().access);
            prop_assert_eq!(late.time().modify, early.time().modify);
        }
    }
}
