//! Subscriber lists for the controller's notifications
//!
//! `Closed` fires when the closed-state poll completes; the exception
//! notification fires for every native failure the controller swallows.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::TabTipError;

/// Callback for the keyboard closing
pub type ClosedCallback = Arc<dyn Fn() + Send + Sync>;

/// Callback for a caught native failure
pub type ExceptionCallback = Arc<dyn Fn(&TabTipError) + Send + Sync>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panicking subscriber must not disable notifications for good
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Default)]
pub struct EventHub {
    closed: Mutex<Vec<ClosedCallback>>,
    exception: Mutex<Vec<ExceptionCallback>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe_closed(&self, callback: ClosedCallback) {
        lock(&self.closed).push(callback);
    }

    pub fn subscribe_exception(&self, callback: ExceptionCallback) {
        lock(&self.exception).push(callback);
    }

    /// Invokes every closed subscriber
    ///
    /// Subscribers run outside the lock so they may subscribe in turn.
    pub fn emit_closed(&self) {
        let subscribers: Vec<ClosedCallback> = lock(&self.closed).clone();
        for callback in subscribers {
            callback();
        }
    }

    pub fn emit_exception(&self, error: &TabTipError) {
        let subscribers: Vec<ExceptionCallback> = lock(&self.exception).clone();
        for callback in subscribers {
            callback(error);
        }
    }
}

impl std::fmt::Debug for EventHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHub")
            .field("closed", &lock(&self.closed).len())
            .field("exception", &lock(&self.exception).len())
            .finish()
    }
}
