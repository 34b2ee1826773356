// crates/usecase/src/extraction.rs
use chrono::{DateTime, FixedOffset};
use file_meta_domain::{TimeZonePolicy, time};
use file_meta_shared_kernel::{ExtractionError, ExtractionResult, StatTime};

pub mod unix;
pub mod windows;

pub use unix::UnixMetadataExtractor;
pub use windows::WindowsMetadataExtractor;

fn normalize_time(
    raw: StatTime,
    policy: TimeZonePolicy,
    name: &str,
    field: &'static str,
) -> ExtractionResult<DateTime<FixedOffset>> {
    time::normalize(raw, policy).ok_or_else(|| ExtractionError::Time { name: name.to_owned(), field })
}

#[cfg(test)]
pub(crate) mod stub {
    use std::{collections::HashMap, sync::Mutex};

    use file_meta_ports::IdentityDirectory;
    use file_meta_shared_kernel::{AccountSid, GroupId, LookupError, UserId};

    /// In-memory directory that records which lookups were made.
    #[derive(Default)]
    pub struct StubDirectory {
        users: HashMap<u32, String>,
        groups: HashMap<u32, String>,
        accounts: HashMap<String, String>,
        broken: bool,
        broken_groups: bool,
        calls: Mutex<Vec<String>>,
    }

    impl StubDirectory {
        pub fn with_user(mut self, uid: u32, name: &str) -> Self {
            self.users.insert(uid, name.to_owned());
            self
        }

        pub fn with_group(mut self, gid: u32, name: &str) -> Self {
            self.groups.insert(gid, name.to_owned());
            self
        }

        pub fn with_account(mut self, sid: &str, name: &str) -> Self {
            self.accounts.insert(sid.to_owned(), name.to_owned());
            self
        }

        /// Every lookup fails as if the directory service were down.
        pub fn broken(mut self) -> Self {
            self.broken = true;
            self
        }

        /// Only group lookups fail; user and account lookups still answer.
        pub fn broken_groups(mut self) -> Self {
            self.broken_groups = true;
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) -> Result<(), LookupError> {
            self.calls.lock().unwrap().push(call.clone());
            if self.broken || (self.broken_groups && call.starts_with("group ")) {
                return Err(LookupError::directory(call, std::io::Error::other("directory offline")));
            }
            Ok(())
        }
    }

    impl IdentityDirectory for StubDirectory {
        fn user_name(&self, uid: UserId) -> Result<String, LookupError> {
            self.record(format!("user {uid}"))?;
            self.users.get(&uid.as_raw()).cloned().ok_or(LookupError::UnknownUser(uid))
        }

        fn group_name(&self, gid: GroupId) -> Result<String, LookupError> {
            self.record(format!("group {gid}"))?;
            self.groups.get(&gid.as_raw()).cloned().ok_or(LookupError::UnknownGroup(gid))
        }

        fn account_name(&self, sid: &AccountSid) -> Result<String, LookupError> {
            self.record(format!("account {sid}"))?;
            self.accounts
                .get(sid.as_str())
                .cloned()
                .ok_or_else(|| LookupError::UnknownAccount(sid.clone()))
        }
    }
}
