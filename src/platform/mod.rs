//! Platform-specific Windows implementations
//!
//! This module encapsulates all native calls behind the [`Platform`] trait
//! and provides a clean interface to the rest of the application. The
//! controller only ever talks to the trait, so tests swap in a scripted fake.

pub mod process;
pub mod version;

#[cfg(windows)]
pub mod registry;
#[cfg(windows)]
pub mod window;
#[cfg(windows)]
pub mod windows;

#[cfg(test)]
pub(crate) mod fake;

use crate::config::RegistryKey;
use crate::domain::core::WindowEdges;
use crate::domain::window::WindowHandle;
use crate::error::TabTipError;

pub use version::OsVersion;

/// The native surface the keyboard controller is built on
///
/// Window queries, registry access, process control and the OS version.
/// Every fallible call returns a [`TabTipError`]; callers decide what to do
/// with it.
pub trait Platform: Send + Sync + 'static {
    /// Finds a top-level window by class name
    fn find_window(&self, class: &str) -> Option<WindowHandle>;

    /// Reads the window's style bits (0 when the query fails)
    fn window_style(&self, handle: WindowHandle) -> u32;

    /// Reads the window's bounding edges in screen coordinates
    fn window_rect(&self, handle: WindowHandle) -> Result<WindowEdges, TabTipError>;

    /// Posts the system-menu close command to the window
    fn post_system_close(&self, handle: WindowHandle) -> Result<(), TabTipError>;

    /// Reads a DWORD value; `Ok(None)` when absent
    fn read_dword(&self, key: &RegistryKey, name: &str) -> Result<Option<u32>, TabTipError>;

    /// Writes a DWORD value
    fn write_dword(&self, key: &RegistryKey, name: &str, value: u32) -> Result<(), TabTipError>;

    /// Starts an executable by absolute path
    fn launch(&self, path: &str) -> Result<(), TabTipError>;

    /// Lists PIDs of running processes with the given name
    fn processes_named(&self, name: &str) -> Vec<u32>;

    /// Terminates a process
    fn kill(&self, pid: u32, name: &str) -> Result<(), TabTipError>;

    /// Reports the running OS version
    fn os_version(&self) -> Result<OsVersion, TabTipError>;
}

/// The real Win32 implementation
#[cfg(windows)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Platform;

#[cfg(windows)]
impl Platform for Win32Platform {
    fn find_window(&self, class: &str) -> Option<WindowHandle> {
        window::find_window(class)
    }

    fn window_style(&self, handle: WindowHandle) -> u32 {
        window::window_style(handle)
    }

    fn window_rect(&self, handle: WindowHandle) -> Result<WindowEdges, TabTipError> {
        window::window_rect(handle)
    }

    fn post_system_close(&self, handle: WindowHandle) -> Result<(), TabTipError> {
        window::post_system_close(handle)
    }

    fn read_dword(&self, key: &RegistryKey, name: &str) -> Result<Option<u32>, TabTipError> {
        registry::read_dword(key, name)
    }

    fn write_dword(&self, key: &RegistryKey, name: &str, value: u32) -> Result<(), TabTipError> {
        registry::write_dword(key, name, value)
    }

    fn launch(&self, path: &str) -> Result<(), TabTipError> {
        process::launch(path)
    }

    fn processes_named(&self, name: &str) -> Vec<u32> {
        process::find_processes(name)
    }

    fn kill(&self, pid: u32, name: &str) -> Result<(), TabTipError> {
        process::kill_process(pid, name)
    }

    fn os_version(&self) -> Result<OsVersion, TabTipError> {
        version::query_os_version()
    }
}
