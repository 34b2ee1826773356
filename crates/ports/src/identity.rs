// crates/ports/src/identity.rs
use file_meta_shared_kernel::{AccountSid, GroupId, LookupError, UserId};

/// Port for the host's user/group directory (passwd, NSS, SAM, ...).
///
/// Implementations return `LookupError::Unknown*` when the directory has no
/// entry for the id and `LookupError::Directory` when the lookup itself fails.
pub trait IdentityDirectory: Send + Sync {
    fn user_name(&self, uid: UserId) -> Result<String, LookupError>;

    fn group_name(&self, gid: GroupId) -> Result<String, LookupError>;

    /// Resolves a Windows SID to `DOMAIN\account`.
    fn account_name(&self, sid: &AccountSid) -> Result<String, LookupError> {
        Err(LookupError::Unsupported { what: format!("account {sid}") })
    }
}

impl<D: IdentityDirectory + ?Sized> IdentityDirectory for &D {
    fn user_name(&self, uid: UserId) -> Result<String, LookupError> {
        (**self).user_name(uid)
    }

    fn group_name(&self, gid: GroupId) -> Result<String, LookupError> {
        (**self).group_name(gid)
    }

    fn account_name(&self, sid: &AccountSid) -> Result<String, LookupError> {
        (**self).account_name(sid)
    }
}
