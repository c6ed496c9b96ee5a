use std::fmt;
use std::time::Duration;

use crate::domain::window::CLOSED_WINDOW_STYLE;

/// Registry root a key lives under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hive {
    CurrentUser,
}

impl Hive {
    pub fn name(&self) -> &'static str {
        match self {
            Hive::CurrentUser => "HKEY_CURRENT_USER",
        }
    }
}

/// A registry key: a hive plus a backslash-separated subkey path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistryKey {
    pub hive: Hive,
    pub path: String,
}

impl RegistryKey {
    pub fn current_user(path: impl Into<String>) -> Self {
        Self {
            hive: Hive::CurrentUser,
            path: path.into(),
        }
    }
}

impl fmt::Display for RegistryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\\{}", self.hive.name(), self.path)
    }
}

/// Everything the controller needs to find and drive the touch keyboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabTipConfig {
    /// Absolute path of the keyboard executable
    pub executable_path: String,
    /// Process name used when killing running instances
    pub process_name: String,
    /// Window class of the keyboard's top-level window
    pub window_class: String,
    /// Key holding the keyboard's user preferences
    pub registry_key: RegistryKey,
    /// Lets the keyboard pop up on desktop (non-tablet) mode; Windows 10 only
    pub desktop_auto_invoke_value: String,
    /// 1 = docked, 0 = floating
    pub docked_state_value: String,
    /// Style bits of the collapsed keyboard window
    pub closed_style: u32,
    /// Delay before the first closed-state check
    pub poll_initial_delay: Duration,
    /// Delay between closed-state checks
    pub poll_interval: Duration,
    /// Delay of the one-shot rectangle re-query after a miss
    pub rect_recheck_delay: Duration,
}

impl TabTipConfig {
    pub const EXECUTABLE_PATH: &'static str =
        r"C:\Program Files\Common Files\microsoft shared\ink\TabTip.exe";
    pub const PROCESS_NAME: &'static str = "TabTip.exe";
    pub const WINDOW_CLASS: &'static str = "IPTip_Main_Window";
    pub const REGISTRY_PATH: &'static str = r"Software\Microsoft\TabletTip\1.7";
    pub const DESKTOP_AUTO_INVOKE: &'static str = "EnableDesktopModeAutoInvoke";
    pub const DOCKED_STATE: &'static str = "EdgeTargetDockedState";
    pub const POLL_INITIAL_DELAY: Duration = Duration::from_millis(700);
    pub const POLL_INTERVAL: Duration = Duration::from_millis(50);
    pub const RECT_RECHECK_DELAY: Duration = Duration::from_secs(1);

    pub fn with_poll_timing(mut self, initial_delay: Duration, interval: Duration) -> Self {
        self.poll_initial_delay = initial_delay;
        self.poll_interval = interval;
        self
    }

    pub fn with_rect_recheck_delay(mut self, delay: Duration) -> Self {
        self.rect_recheck_delay = delay;
        self
    }
}

impl Default for TabTipConfig {
    fn default() -> Self {
        Self {
            executable_path: Self::EXECUTABLE_PATH.to_string(),
            process_name: Self::PROCESS_NAME.to_string(),
            window_class: Self::WINDOW_CLASS.to_string(),
            registry_key: RegistryKey::current_user(Self::REGISTRY_PATH),
            desktop_auto_invoke_value: Self::DESKTOP_AUTO_INVOKE.to_string(),
            docked_state_value: Self::DOCKED_STATE.to_string(),
            closed_style: CLOSED_WINDOW_STYLE,
            poll_initial_delay: Self::POLL_INITIAL_DELAY,
            poll_interval: Self::POLL_INTERVAL,
            rect_recheck_delay: Self::RECT_RECHECK_DELAY,
        }
    }
}
