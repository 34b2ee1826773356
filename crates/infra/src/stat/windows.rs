// crates/infra/src/stat/windows.rs
use std::{
    fs::{File, OpenOptions},
    io,
    os::windows::{
        fs::{MetadataExt, OpenOptionsExt},
        io::AsRawHandle,
    },
    path::Path,
    ptr,
};

use file_meta_shared_kernel::{AccountSid, RawStat, WindowsStat};
use windows_sys::{
    Win32::{
        Foundation::{ERROR_SUCCESS, HANDLE, LocalFree, PSID},
        Security::{
            Authorization::{ConvertSidToStringSidW, GetSecurityInfo, SE_FILE_OBJECT},
            OWNER_SECURITY_INFORMATION, PSECURITY_DESCRIPTOR,
        },
        Storage::FileSystem::{
            FILE_FLAG_BACKUP_SEMANTICS, FILE_FLAG_OPEN_REPARSE_POINT, FILE_READ_ATTRIBUTES, FILE_SHARE_DELETE,
            FILE_SHARE_READ, FILE_SHARE_WRITE, READ_CONTROL,
        },
    },
    core::PWSTR,
};

/// Opens `path` once and reads both times and owner through that handle, so
/// the two always describe the same object. Without `follow_links` the
/// handle is the reparse point itself.
pub(super) fn capture(path: &Path, follow_links: bool) -> io::Result<RawStat> {
    let (file, owner_readable) = match open(path, follow_links, READ_CONTROL | FILE_READ_ATTRIBUTES) {
        Ok(file) => (file, true),
        Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
            log::debug!("no READ_CONTROL on {}: {err}", path.display());
            (open(path, follow_links, FILE_READ_ATTRIBUTES)?, false)
        }
        Err(err) => return Err(err),
    };

    let metadata = file.metadata()?;
    let owner_sid = if owner_readable {
        match owner_sid(&file) {
            Ok(sid) => Some(sid),
            Err(err) => {
                log::debug!("no owner SID for {}: {err}", path.display());
                None
            }
        }
    } else {
        None
    };

    Ok(RawStat::Windows(WindowsStat {
        owner_sid,
        size: metadata.file_size(),
        last_access: metadata.last_access_time(),
        last_write: metadata.last_write_time(),
    }))
}

fn open(path: &Path, follow_links: bool, access: u32) -> io::Result<File> {
    // Directories can only be opened with backup semantics.
    let mut flags = FILE_FLAG_BACKUP_SEMANTICS;
    if !follow_links {
        flags |= FILE_FLAG_OPEN_REPARSE_POINT;
    }
    OpenOptions::new()
        .access_mode(access)
        .share_mode(FILE_SHARE_READ | FILE_SHARE_WRITE | FILE_SHARE_DELETE)
        .custom_flags(flags)
        .open(path)
}

/// Reads the owner SID from the security descriptor of an open handle.
fn owner_sid(file: &File) -> io::Result<AccountSid> {
    let mut owner: PSID = ptr::null_mut();
    let mut descriptor: PSECURITY_DESCRIPTOR = ptr::null_mut();

    // SAFETY: the handle stays open for the call; `owner` points into
    // `descriptor`, which is released below after the SID has been copied out.
    let code = unsafe {
        GetSecurityInfo(
            file.as_raw_handle() as HANDLE,
            SE_FILE_OBJECT,
            OWNER_SECURITY_INFORMATION,
            &mut owner,
            ptr::null_mut(),
            ptr::null_mut(),
            ptr::null_mut(),
            &mut descriptor,
        )
    };
    if code != ERROR_SUCCESS {
        return Err(io::Error::from_raw_os_error(code as i32));
    }

    let sid = sid_to_string(owner);
    // SAFETY: `descriptor` was allocated by GetSecurityInfo.
    unsafe { LocalFree(descriptor) };
    sid
}

fn sid_to_string(sid: PSID) -> io::Result<AccountSid> {
    let mut text: PWSTR = ptr::null_mut();
    // SAFETY: `sid` is a valid SID from the security descriptor.
    if unsafe { ConvertSidToStringSidW(sid, &mut text) } == 0 {
        return Err(io::Error::last_os_error());
    }

    // SAFETY: ConvertSidToStringSidW returns a NUL-terminated wide string.
    let value = unsafe {
        let len = (0..).take_while(|&i| *text.add(i) != 0).count();
        String::from_utf16_lossy(std::slice::from_raw_parts(text, len))
    };
    // SAFETY: `text` was allocated by ConvertSidToStringSidW.
    unsafe { LocalFree(text.cast()) };
    Ok(AccountSid::new(value))
}
