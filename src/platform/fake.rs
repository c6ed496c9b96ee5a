//! Scripted in-memory platform for controller tests

use std::collections::HashMap;
use std::sync::Mutex;

use super::{OsVersion, Platform};
use crate::config::RegistryKey;
use crate::domain::core::WindowEdges;
use crate::domain::window::WindowHandle;
use crate::error::TabTipError;

/// A native call the controller made, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FindWindow,
    WindowRect,
    PostClose(WindowHandle),
    Read(String),
    Write(String, u32),
    Launch(String),
    Enumerate(String),
    Kill(u32),
}

#[derive(Debug)]
struct FakeState {
    window: Option<WindowHandle>,
    style: u32,
    rect: Option<WindowEdges>,
    registry: HashMap<String, u32>,
    fail_registry_reads: bool,
    fail_registry_writes: bool,
    processes: Vec<u32>,
    fail_kills: bool,
    fail_launch: bool,
    fail_post: bool,
    version: OsVersion,
    calls: Vec<Call>,
}

#[derive(Debug)]
pub struct FakePlatform {
    state: Mutex<FakeState>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeState {
                window: None,
                style: 0,
                rect: None,
                registry: HashMap::new(),
                fail_registry_reads: false,
                fail_registry_writes: false,
                processes: Vec::new(),
                fail_kills: false,
                fail_launch: false,
                fail_post: false,
                version: OsVersion::new(10, 0, 19045),
                calls: Vec::new(),
            }),
        }
    }

    pub fn set_window(&self, window: Option<WindowHandle>) {
        self.state.lock().unwrap().window = window;
    }

    pub fn set_style(&self, style: u32) {
        self.state.lock().unwrap().style = style;
    }

    /// None makes the rectangle query fail
    pub fn set_rect(&self, rect: Option<WindowEdges>) {
        self.state.lock().unwrap().rect = rect;
    }

    pub fn set_registry(&self, name: &str, value: u32) {
        self.state.lock().unwrap().registry.insert(name.to_string(), value);
    }

    pub fn registry(&self, name: &str) -> Option<u32> {
        self.state.lock().unwrap().registry.get(name).copied()
    }

    pub fn fail_registry_reads(&self) {
        self.state.lock().unwrap().fail_registry_reads = true;
    }

    pub fn fail_registry_writes(&self) {
        self.state.lock().unwrap().fail_registry_writes = true;
    }

    pub fn set_processes(&self, pids: Vec<u32>) {
        self.state.lock().unwrap().processes = pids;
    }

    pub fn fail_kills(&self) {
        self.state.lock().unwrap().fail_kills = true;
    }

    pub fn fail_launch(&self) {
        self.state.lock().unwrap().fail_launch = true;
    }

    pub fn fail_post(&self) {
        self.state.lock().unwrap().fail_post = true;
    }

    pub fn set_version(&self, version: OsVersion) {
        self.state.lock().unwrap().version = version;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Calls other than window lookups and rect queries
    pub fn side_effects(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, Call::FindWindow | Call::WindowRect))
            .collect()
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }
}

impl Platform for FakePlatform {
    fn find_window(&self, _class: &str) -> Option<WindowHandle> {
        self.record(Call::FindWindow);
        self.state.lock().unwrap().window
    }

    fn window_style(&self, _handle: WindowHandle) -> u32 {
        self.state.lock().unwrap().style
    }

    fn window_rect(&self, _handle: WindowHandle) -> Result<WindowEdges, TabTipError> {
        self.record(Call::WindowRect);
        self.state
            .lock()
            .unwrap()
            .rect
            .ok_or_else(|| TabTipError::RectQueryFailed("scripted failure".to_string()))
    }

    fn post_system_close(&self, handle: WindowHandle) -> Result<(), TabTipError> {
        self.record(Call::PostClose(handle));
        if self.state.lock().unwrap().fail_post {
            Err(TabTipError::PostMessageFailed("scripted failure".to_string()))
        } else {
            Ok(())
        }
    }

    fn read_dword(&self, key: &RegistryKey, name: &str) -> Result<Option<u32>, TabTipError> {
        self.record(Call::Read(name.to_string()));
        let state = self.state.lock().unwrap();
        if state.fail_registry_reads {
            return Err(TabTipError::RegistryReadFailed {
                key: key.to_string(),
                name: name.to_string(),
                message: "scripted failure".to_string(),
            });
        }
        Ok(state.registry.get(name).copied())
    }

    fn write_dword(&self, key: &RegistryKey, name: &str, value: u32) -> Result<(), TabTipError> {
        self.record(Call::Write(name.to_string(), value));
        let mut state = self.state.lock().unwrap();
        if state.fail_registry_writes {
            return Err(TabTipError::RegistryWriteFailed {
                key: key.to_string(),
                name: name.to_string(),
                message: "scripted failure".to_string(),
            });
        }
        state.registry.insert(name.to_string(), value);
        Ok(())
    }

    fn launch(&self, path: &str) -> Result<(), TabTipError> {
        self.record(Call::Launch(path.to_string()));
        if self.state.lock().unwrap().fail_launch {
            Err(TabTipError::LaunchFailed {
                path: path.to_string(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            })
        } else {
            Ok(())
        }
    }

    fn processes_named(&self, name: &str) -> Vec<u32> {
        self.record(Call::Enumerate(name.to_string()));
        self.state.lock().unwrap().processes.clone()
    }

    fn kill(&self, pid: u32, name: &str) -> Result<(), TabTipError> {
        self.record(Call::Kill(pid));
        if self.state.lock().unwrap().fail_kills {
            Err(TabTipError::KillFailed {
                pid,
                name: name.to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn os_version(&self) -> Result<OsVersion, TabTipError> {
        Ok(self.state.lock().unwrap().version)
    }
}
