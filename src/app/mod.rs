//! Application orchestration layer
//!
//! The keyboard controller, its notifications, and the background poll it
//! uses to detect the keyboard closing.

pub mod controller;
pub mod events;
pub mod poller;

pub use controller::TabTip;
pub use poller::{PollError, PollHandle, PollOutcome};
