// crates/infra/src/identity/windows.rs
use std::{ffi::OsStr, io, iter, os::windows::ffi::OsStrExt, ptr};

use file_meta_ports::IdentityDirectory;
use file_meta_shared_kernel::{AccountSid, GroupId, LookupError, UserId};
use windows_sys::Win32::{
    Foundation::{ERROR_INSUFFICIENT_BUFFER, ERROR_NONE_MAPPED, GetLastError, LocalFree, PSID},
    Security::{Authorization::ConvertStringSidToSidW, LookupAccountSidW, SID_NAME_USE},
};

/// Account lookups through `LookupAccountSidW` on the local machine, which
/// forwards to the domain controller for domain SIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentityDirectory;

impl IdentityDirectory for SystemIdentityDirectory {
    fn user_name(&self, uid: UserId) -> Result<String, LookupError> {
        Err(LookupError::Unsupported { what: format!("user {uid}") })
    }

    fn group_name(&self, gid: GroupId) -> Result<String, LookupError> {
        Err(LookupError::Unsupported { what: format!("group {gid}") })
    }

    fn account_name(&self, sid: &AccountSid) -> Result<String, LookupError> {
        let wide: Vec<u16> = OsStr::new(sid.as_str()).encode_wide().chain(iter::once(0)).collect();
        let mut psid: PSID = ptr::null_mut();
        // SAFETY: `wide` is NUL-terminated and outlives the call.
        if unsafe { ConvertStringSidToSidW(wide.as_ptr(), &mut psid) } == 0 {
            return Err(LookupError::directory(format!("account {sid}"), io::Error::last_os_error()));
        }

        let result = lookup_account(psid, sid);
        // SAFETY: `psid` was allocated by ConvertStringSidToSidW.
        unsafe { LocalFree(psid) };
        result
    }
}

fn lookup_account(psid: PSID, sid: &AccountSid) -> Result<String, LookupError> {
    let mut name_len = 0u32;
    let mut domain_len = 0u32;
    let mut kind: SID_NAME_USE = 0;

    // First call only reports the buffer sizes.
    // SAFETY: null buffers with zero lengths are the documented size query.
    let ok = unsafe {
        LookupAccountSidW(
            ptr::null(),
            psid,
            ptr::null_mut(),
            &mut name_len,
            ptr::null_mut(),
            &mut domain_len,
            &mut kind,
        )
    };
    if ok == 0 {
        // SAFETY: no other API call since LookupAccountSidW.
        let code = unsafe { GetLastError() };
        if code == ERROR_NONE_MAPPED {
            return Err(LookupError::UnknownAccount(sid.clone()));
        }
        if code != ERROR_INSUFFICIENT_BUFFER {
            return Err(LookupError::directory(format!("account {sid}"), io::Error::from_raw_os_error(code as i32)));
        }
    }

    let mut name = vec![0u16; name_len as usize];
    let mut domain = vec![0u16; domain_len as usize];
    // SAFETY: buffers are sized from the previous call and outlive this one.
    let ok = unsafe {
        LookupAccountSidW(
            ptr::null(),
            psid,
            name.as_mut_ptr(),
            &mut name_len,
            domain.as_mut_ptr(),
            &mut domain_len,
            &mut kind,
        )
    };
    if ok == 0 {
        return Err(LookupError::directory(format!("account {sid}"), io::Error::last_os_error()));
    }

    // On success the lengths exclude the terminating NUL.
    let name = String::from_utf16_lossy(&name[..name_len as usize]);
    let domain = String::from_utf16_lossy(&domain[..domain_len as usize]);
    Ok(if domain.is_empty() { name } else { format!("{domain}\\{name}") })
}
