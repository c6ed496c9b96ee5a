//! Keyboard process enumeration, termination and launch
//!
//! Enumeration and termination go through `sysinfo`; launching goes through
//! `ShellExecuteW` because TabTip.exe carries a uiAccess manifest that
//! `CreateProcess` refuses to start.

use sysinfo::{Pid, ProcessesToUpdate, System};
use tracing::debug;

use crate::error::TabTipError;

/// Strips a trailing `.exe`, ignoring case
fn strip_exe(name: &str) -> &str {
    let len = name.len();
    if len > 4 && name.is_char_boundary(len - 4) && name[len - 4..].eq_ignore_ascii_case(".exe") {
        &name[..len - 4]
    } else {
        name
    }
}

/// Check if a process name matches the expected executable name
///
/// Windows process names are case-insensitive and may or may not carry the
/// `.exe` suffix depending on who reports them.
pub fn process_name_matches(actual: &str, expected: &str) -> bool {
    strip_exe(actual).eq_ignore_ascii_case(strip_exe(expected))
}

/// Lists the PIDs of every running process with the given name
pub fn find_processes(name: &str) -> Vec<u32> {
    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::All, true);

    let pids: Vec<u32> = system
        .processes()
        .values()
        .filter(|process| process_name_matches(&process.name().to_string_lossy(), name))
        .map(|process| process.pid().as_u32())
        .collect();

    debug!(
        event = "tabtip.process.enumerated",
        name = name,
        count = pids.len(),
        "Enumerated keyboard processes"
    );

    pids
}

/// Kills a process, checking it still carries the expected name
pub fn kill_process(pid: u32, expected_name: &str) -> Result<(), TabTipError> {
    let mut system = System::new();
    let pid_obj = Pid::from_u32(pid);
    system.refresh_processes(ProcessesToUpdate::Some(&[pid_obj]), true);

    let kill_failed = || TabTipError::KillFailed {
        pid,
        name: expected_name.to_string(),
    };

    match system.process(pid_obj) {
        Some(process) if process_name_matches(&process.name().to_string_lossy(), expected_name) => {
            if process.kill() {
                Ok(())
            } else {
                Err(kill_failed())
            }
        }
        // Exited (or the PID was reused) between enumeration and kill
        Some(_) | None => Err(kill_failed()),
    }
}

/// Starts an executable through the shell
#[cfg(windows)]
pub fn launch(path: &str) -> Result<(), TabTipError> {
    use windows::Win32::Foundation::HWND;
    use windows::Win32::UI::Shell::ShellExecuteW;
    use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;
    use windows::core::{HSTRING, PCWSTR, w};

    let file = HSTRING::from(path);
    let result = unsafe {
        ShellExecuteW(
            HWND(0),
            w!("open"),
            &file,
            PCWSTR::null(),
            PCWSTR::null(),
            SW_SHOWNORMAL,
        )
    };

    // Values above 32 mean success
    if result.0 > 32 {
        Ok(())
    } else {
        Err(TabTipError::LaunchFailed {
            path: path.to_string(),
            source: std::io::Error::last_os_error(),
        })
    }
}
