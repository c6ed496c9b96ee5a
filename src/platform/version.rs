//! Operating system version
//!
//! Only used to decide whether the desktop auto-invoke tweak applies.

/// Version numbers as reported by the kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

impl OsVersion {
    pub fn new(major: u32, minor: u32, build: u32) -> Self {
        Self {
            major,
            minor,
            build,
        }
    }

    /// Windows 10 and 11 both report major version 10
    pub fn is_windows10_family(&self) -> bool {
        self.major == 10
    }
}

/// Queries the real OS version
///
/// `RtlGetVersion` is used because `GetVersionEx` lies to unmanifested
/// binaries.
#[cfg(windows)]
pub fn query_os_version() -> Result<OsVersion, crate::error::TabTipError> {
    use windows::Wdk::System::SystemServices::RtlGetVersion;
    use windows::Win32::System::SystemInformation::OSVERSIONINFOW;

    let mut info = OSVERSIONINFOW {
        dwOSVersionInfoSize: std::mem::size_of::<OSVERSIONINFOW>() as u32,
        ..Default::default()
    };

    let status = unsafe { RtlGetVersion(&mut info) };
    if status.is_err() {
        return Err(crate::error::TabTipError::OsVersionFailed(format!(
            "RtlGetVersion returned {:#x}",
            status.0
        )));
    }

    Ok(OsVersion::new(
        info.dwMajorVersion,
        info.dwMinorVersion,
        info.dwBuildNumber,
    ))
}
