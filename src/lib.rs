//! tabtip-win: control the Windows on-screen touch keyboard
//!
//! Opens the keyboard docked or floating, closes it, reports its on-screen
//! rectangle and notifies when it collapses. See [`TabTip`].

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod platform;

pub use app::{PollHandle, PollOutcome, TabTip};
pub use config::TabTipConfig;
pub use domain::core::Rect;
pub use error::TabTipError;
pub use platform::Platform;
