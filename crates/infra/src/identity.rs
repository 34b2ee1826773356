// crates/infra/src/identity.rs
//! Host account databases behind the [`IdentityDirectory`] port.
//!
//! [`IdentityDirectory`]: file_meta_ports::IdentityDirectory

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::SystemIdentityDirectory;
#[cfg(windows)]
pub use windows::SystemIdentityDirectory;

#[cfg(all(not(unix), not(windows)))]
pub use fallback::SystemIdentityDirectory;

#[cfg(all(not(unix), not(windows)))]
mod fallback {
    use file_meta_ports::IdentityDirectory;
    use file_meta_shared_kernel::{GroupId, LookupError, UserId};

    /// Directory for targets without an account database; every lookup fails.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemIdentityDirectory;

    impl IdentityDirectory for SystemIdentityDirectory {
        fn user_name(&self, uid: UserId) -> Result<String, LookupError> {
            Err(LookupError::Unsupported { what: format!("user {uid}") })
        }

        fn group_name(&self, gid: GroupId) -> Result<String, LookupError> {
            Err(LookupError::Unsupported { what: format!("group {gid}") })
        }
    }
}
