//! DWORD values in the Windows registry
//!
//! Only the two operations the keyboard settings need: read a DWORD
//! (absent is not an error) and write one (creating the key if needed).

use std::ffi::c_void;

use crate::config::{Hive, RegistryKey};
use crate::error::TabTipError;
use windows::Win32::Foundation::{ERROR_FILE_NOT_FOUND, ERROR_SUCCESS, WIN32_ERROR};
use windows::Win32::System::Registry::*;
use windows::core::HSTRING;

fn hkey_for(hive: Hive) -> HKEY {
    match hive {
        Hive::CurrentUser => HKEY_CURRENT_USER,
    }
}

fn describe(status: WIN32_ERROR) -> String {
    windows::core::Error::from(status.to_hresult()).message().to_string()
}

/// Reads a DWORD value
///
/// # Returns
/// `Ok(None)` when the key or the value does not exist
pub fn read_dword(key: &RegistryKey, name: &str) -> Result<Option<u32>, TabTipError> {
    let mut value: u32 = 0;
    let mut size = std::mem::size_of::<u32>() as u32;

    let status = unsafe {
        RegGetValueW(
            hkey_for(key.hive),
            &HSTRING::from(key.path.as_str()),
            &HSTRING::from(name),
            RRF_RT_REG_DWORD,
            None,
            Some(&mut value as *mut u32 as *mut c_void),
            Some(&mut size),
        )
    };

    if status == ERROR_SUCCESS {
        Ok(Some(value))
    } else if status == ERROR_FILE_NOT_FOUND {
        Ok(None)
    } else {
        Err(TabTipError::RegistryReadFailed {
            key: key.to_string(),
            name: name.to_string(),
            message: describe(status),
        })
    }
}

/// Writes a DWORD value, creating the key when missing
pub fn write_dword(key: &RegistryKey, name: &str, value: u32) -> Result<(), TabTipError> {
    let status = unsafe {
        RegSetKeyValueW(
            hkey_for(key.hive),
            &HSTRING::from(key.path.as_str()),
            &HSTRING::from(name),
            REG_DWORD.0,
            Some(&value as *const u32 as *const c_void),
            std::mem::size_of::<u32>() as u32,
        )
    };

    if status == ERROR_SUCCESS {
        Ok(())
    } else {
        Err(TabTipError::RegistryWriteFailed {
            key: key.to_string(),
            name: name.to_string(),
            message: describe(status),
        })
    }
}
