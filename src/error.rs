//! Error type shared by the platform layer and the controller
//!
//! The controller never returns these to its callers. They are handed to
//! exception subscribers and logged instead.

use std::io;

/// Failures of the native calls behind the keyboard controller
#[derive(Debug, thiserror::Error)]
pub enum TabTipError {
    #[error("Failed to query window rectangle: {0}")]
    RectQueryFailed(String),

    #[error("Failed to post close command to keyboard window: {0}")]
    PostMessageFailed(String),

    #[error("Failed to read registry value {key}\\{name}: {message}")]
    RegistryReadFailed {
        key: String,
        name: String,
        message: String,
    },

    #[error("Failed to write registry value {key}\\{name}: {message}")]
    RegistryWriteFailed {
        key: String,
        name: String,
        message: String,
    },

    #[error("Failed to launch {path}: {source}")]
    LaunchFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to kill process {pid} ({name})")]
    KillFailed { pid: u32, name: String },

    #[error("Failed to query OS version: {0}")]
    OsVersionFailed(String),

    #[error("The touch keyboard is only available on Windows")]
    Unsupported,
}
