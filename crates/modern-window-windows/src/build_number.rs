//! Detection of the running Windows build.
//!
//! `GetVersionEx` lies to unmanifested processes, so the build number is
//! read from `HKLM\SOFTWARE\Microsoft\Windows NT\CurrentVersion` instead.

use std::sync::OnceLock;

use modern_window_core::version::parse_build_number;
use modern_window_core::{WindowsVersion, log_debug, log_warn};
use windows::Win32::System::Registry::{
    HKEY, HKEY_LOCAL_MACHINE, KEY_QUERY_VALUE, RegCloseKey, RegOpenKeyExW, RegQueryValueExW,
};
use windows::core::PCWSTR;

use crate::wide;

const CURRENT_VERSION_KEY: &str = r"SOFTWARE\Microsoft\Windows NT\CurrentVersion";
const BUILD_NUMBER_VALUE: &str = "CurrentBuildNumber";

static BUILD_NUMBER: OnceLock<u32> = OnceLock::new();

/// Returns the OS build number, or 0 if it cannot be read.
///
/// The registry is queried once per process.
pub fn build_number() -> u32 {
    *BUILD_NUMBER.get_or_init(|| match read_build_number() {
        Ok(build) => {
            log_debug!("Windows build number: {build}");
            build
        }
        Err(e) => {
            log_warn!("Could not read Windows build number: {e}");
            0
        }
    })
}

/// The Windows release this process runs on.
pub fn windows_version() -> WindowsVersion {
    WindowsVersion::from_build(build_number())
}

fn read_build_number() -> Result<u32, String> {
    let key_path = wide(CURRENT_VERSION_KEY);
    let mut key = HKEY::default();
    // SAFETY: key_path is NUL-terminated and outlives the call.
    let status = unsafe {
        RegOpenKeyExW(
            HKEY_LOCAL_MACHINE,
            PCWSTR(key_path.as_ptr()),
            None,
            KEY_QUERY_VALUE,
            &mut key,
        )
    };
    if status.is_err() {
        return Err(format!("failed to open registry key: {status:?}"));
    }

    let name = wide(BUILD_NUMBER_VALUE);
    let mut data = [0u16; 32];
    let mut size = (data.len() * 2) as u32;
    // SAFETY: data is writable for `size` bytes; size is updated in place.
    let status = unsafe {
        RegQueryValueExW(
            key,
            PCWSTR(name.as_ptr()),
            None,
            None,
            Some(data.as_mut_ptr().cast()),
            Some(&mut size as *mut u32),
        )
    };
    // SAFETY: key was opened above.
    let _ = unsafe { RegCloseKey(key) };
    if status.is_err() {
        return Err(format!("failed to query {BUILD_NUMBER_VALUE}: {status:?}"));
    }

    let len = (size as usize / 2).min(data.len());
    let build = parse_build_number(&String::from_utf16_lossy(&data[..len]));
    if build == 0 {
        return Err(format!("{BUILD_NUMBER_VALUE} is not a number"));
    }
    Ok(build)
}
