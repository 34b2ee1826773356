// crates/infra/src/identity/unix.rs
use file_meta_ports::IdentityDirectory;
use file_meta_shared_kernel::{GroupId, LookupError, UserId};
use nix::unistd::{Gid, Group, Uid, User};

/// passwd/group lookups through `getpwuid_r`/`getgrgid_r`, so NSS sources
/// (LDAP, sssd, ...) are consulted like any other libc caller would.
///
/// Users are reported by their GECOS display name, groups by group name.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentityDirectory;

impl IdentityDirectory for SystemIdentityDirectory {
    fn user_name(&self, uid: UserId) -> Result<String, LookupError> {
        match User::from_uid(Uid::from_raw(uid.as_raw())) {
            Ok(Some(user)) => Ok(display_name(user.gecos.as_bytes())),
            Ok(None) => Err(LookupError::UnknownUser(uid)),
            Err(errno) => Err(LookupError::directory(format!("user {uid}"), errno.into())),
        }
    }

    fn group_name(&self, gid: GroupId) -> Result<String, LookupError> {
        match Group::from_gid(Gid::from_raw(gid.as_raw())) {
            Ok(Some(group)) => Ok(group.name),
            Ok(None) => Err(LookupError::UnknownGroup(gid)),
            Err(errno) => Err(LookupError::directory(format!("group {gid}"), errno.into())),
        }
    }
}

/// Full name from a GECOS field: everything before the first comma
/// (room, phone and other subfields follow it). Empty stays empty.
fn display_name(gecos: &[u8]) -> String {
    let full = gecos.split(|&b| b == b',').next().unwrap_or_default();
    String::from_utf8_lossy(full).into_owned()
}
