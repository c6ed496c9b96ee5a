//! Touch keyboard controller
//!
//! The controller opens, undocks and closes the touch keyboard, reports where
//! it sits on screen, and watches for it to collapse. It never returns an
//! error: every native failure is logged and handed to the exception
//! subscribers, and the operation carries on as a no-op.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

use tracing::{debug, info, warn};

use crate::app::events::EventHub;
use crate::app::poller::{PollHandle, poll};
use crate::config::TabTipConfig;
use crate::domain::core::Rect;
use crate::domain::window::{self, WindowHandle};
use crate::error::TabTipError;
use crate::platform::Platform;

struct Inner<P> {
    platform: P,
    config: TabTipConfig,
    /// Last rectangle a query actually returned; never reset
    last_rect: Mutex<Rect>,
    /// Set while a deferred re-query is scheduled
    recheck_pending: AtomicBool,
    events: EventHub,
}

/// Controller for the on-screen touch keyboard
///
/// Cheap to clone; clones share the rectangle cache and subscribers. The
/// closed-state poll and the deferred rectangle re-query run on their own
/// threads with a clone of the controller.
pub struct TabTip<P: Platform> {
    inner: Arc<Inner<P>>,
}

impl<P: Platform> Clone for TabTip<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(windows)]
impl TabTip<crate::platform::Win32Platform> {
    /// Creates a controller for the real keyboard with default settings
    pub fn new() -> Self {
        Self::with_platform(crate::platform::Win32Platform, TabTipConfig::default())
    }
}

#[cfg(windows)]
impl Default for TabTip<crate::platform::Win32Platform> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Platform> TabTip<P> {
    /// Creates a controller over the given platform
    ///
    /// # Arguments
    /// * `platform` - Native call surface
    /// * `config` - Paths, registry names, constants and timings
    pub fn with_platform(platform: P, config: TabTipConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                platform,
                config,
                last_rect: Mutex::new(Rect::EMPTY),
                recheck_pending: AtomicBool::new(false),
                events: EventHub::new(),
            }),
        }
    }

    /// Settings the controller was built with, shared by every clone
    pub fn config(&self) -> &TabTipConfig {
        &self.inner.config
    }

    /// Subscribes to the keyboard closing
    ///
    /// Only fires from a poll started with
    /// [`start_polling_for_closed_event`](Self::start_polling_for_closed_event)
    /// or [`open_undocked_and_start_polling_for_closed_event`](Self::open_undocked_and_start_polling_for_closed_event).
    pub fn on_closed<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.inner.events.subscribe_closed(Arc::new(callback));
    }

    /// Subscribes to native failures the controller swallowed
    pub fn on_exception<F>(&self, callback: F)
    where
        F: Fn(&TabTipError) + Send + Sync + 'static,
    {
        self.inner.events.subscribe_exception(Arc::new(callback));
    }

    /// Opens the keyboard
    ///
    /// On Windows 10 the desktop auto-invoke preference is switched on first,
    /// otherwise the keyboard refuses to show outside tablet mode.
    pub fn open(&self) {
        if self.is_windows10() {
            self.enable_desktop_auto_invoke();
        }

        let path = &self.inner.config.executable_path;
        match self.inner.platform.launch(path) {
            Ok(()) => info!(event = "tabtip.controller.launched", path = %path, "Launched touch keyboard"),
            Err(e) => self.report(e),
        }
    }

    /// Opens the keyboard floating instead of docked
    ///
    /// The docked preference is only read when the keyboard process starts,
    /// so a running docked keyboard is killed before reopening.
    pub fn open_undocked(&self) {
        let config = &self.inner.config;
        let docked = self
            .inner
            .platform
            .read_dword(&config.registry_key, &config.docked_state_value)
            // Absent means docked
            .map(|value| value.unwrap_or(1));

        match docked {
            Ok(1) => {
                info!(event = "tabtip.controller.undocking", "Keyboard is docked, switching to floating");
                if let Err(e) =
                    self.inner
                        .platform
                        .write_dword(&config.registry_key, &config.docked_state_value, 0)
                {
                    self.report(e);
                }
                self.kill_running_instances();
            }
            Ok(state) => debug!(event = "tabtip.controller.already_floating", state = state, "Keyboard already floating"),
            Err(e) => self.report(e),
        }

        self.open();
    }

    /// Closes the keyboard if its window exists
    pub fn close(&self) {
        let Some(handle) = self.find_window() else {
            debug!(event = "tabtip.controller.close_skipped", "Keyboard window not found, nothing to close");
            return;
        };

        match self.inner.platform.post_system_close(handle) {
            Ok(()) => info!(event = "tabtip.controller.close_posted", "Posted close to keyboard window"),
            Err(e) => self.report(e),
        }
    }

    /// Opens the keyboard undocked and starts watching for it to close
    ///
    /// This is the way to get a reliable `Closed` notification: the poll's
    /// initial delay covers the window appearing after the restart.
    pub fn open_undocked_and_start_polling_for_closed_event(&self) -> PollHandle {
        self.open_undocked();
        self.start_polling_for_closed_event()
    }

    /// Starts the closed-state poll
    ///
    /// Fires the closed subscribers once, the first time the keyboard is seen
    /// closed. There is no timeout: a keyboard build whose collapsed style
    /// differs from the configured one is never seen closed.
    pub fn start_polling_for_closed_event(&self) -> PollHandle {
        let config = &self.inner.config;
        let watcher = self.clone();
        let notifier = self.clone();

        debug!(
            event = "tabtip.controller.poll_started",
            initial_delay_ms = config.poll_initial_delay.as_millis() as u64,
            interval_ms = config.poll_interval.as_millis() as u64,
            "Polling for keyboard close"
        );

        poll(
            move || watcher.is_closed(),
            move || {
                info!(event = "tabtip.controller.closed", "Touch keyboard closed");
                notifier.inner.events.emit_closed();
            },
            config.poll_initial_delay,
            config.poll_interval,
        )
    }

    /// True if the keyboard window exists
    ///
    /// This checks the window, not the process: a running TabTip process with
    /// no window reports false.
    pub fn is_running(&self) -> bool {
        self.find_window().is_some()
    }

    /// True if there is no keyboard window or it carries the collapsed style
    pub fn is_closed(&self) -> bool {
        let platform = &self.inner.platform;
        window::is_closed(self.find_window(), self.inner.config.closed_style, |handle| {
            platform.window_style(handle)
        })
    }

    /// Where the keyboard is on screen, or [`Rect::EMPTY`] when it is closed
    pub fn rectangle(&self) -> Rect {
        if self.is_closed() {
            Rect::EMPTY
        } else {
            self.would_be_rectangle()
        }
    }

    /// Where the keyboard is, or last was, on screen
    ///
    /// Queries the window; when that fails the last known rectangle is
    /// returned instead. If nothing is known yet a single re-query is
    /// scheduled in the background to warm the cache for later calls.
    pub fn would_be_rectangle(&self) -> Rect {
        if let Some(rect) = self.query_rectangle() {
            return rect;
        }

        let cached = self.cached_rectangle();
        if cached.is_empty() {
            self.schedule_recheck();
        }
        cached
    }

    /// Last rectangle a query returned, without querying
    pub fn cached_rectangle(&self) -> Rect {
        *lock(&self.inner.last_rect)
    }

    /// Part of `target` the keyboard currently covers
    ///
    /// # Returns
    /// None when the keyboard is closed or does not overlap `target`
    pub fn occlusion(&self, target: Rect) -> Option<Rect> {
        let keyboard = self.rectangle();
        if keyboard.is_empty() {
            return None;
        }
        keyboard.intersection(&target)
    }

    fn find_window(&self) -> Option<WindowHandle> {
        self.inner.platform.find_window(&self.inner.config.window_class)
    }

    /// Queries the window rectangle and caches it on success
    fn query_rectangle(&self) -> Option<Rect> {
        let handle = self.find_window()?;

        match self.inner.platform.window_rect(handle) {
            Ok(edges) => {
                let rect = Rect::from_inclusive_edges(edges);
                *lock(&self.inner.last_rect) = rect;
                Some(rect)
            }
            Err(e) => {
                debug!(event = "tabtip.controller.rect_query_failed", error = %e, "Keyboard rectangle unavailable");
                None
            }
        }
    }

    fn schedule_recheck(&self) {
        if self.inner.recheck_pending.swap(true, Ordering::AcqRel) {
            return;
        }

        let this = self.clone();
        let delay = self.inner.config.rect_recheck_delay;
        thread::spawn(move || {
            thread::sleep(delay);
            let found = this.query_rectangle();
            debug!(
                event = "tabtip.controller.rect_recheck",
                found = found.is_some(),
                "Deferred keyboard rectangle query finished"
            );
            this.inner.recheck_pending.store(false, Ordering::Release);
        });
    }

    fn is_windows10(&self) -> bool {
        match self.inner.platform.os_version() {
            Ok(version) => version.is_windows10_family(),
            Err(e) => {
                self.report(e);
                false
            }
        }
    }

    fn enable_desktop_auto_invoke(&self) {
        let config = &self.inner.config;
        let platform = &self.inner.platform;

        let current = match platform.read_dword(&config.registry_key, &config.desktop_auto_invoke_value) {
            Ok(value) => value.unwrap_or(0),
            Err(e) => {
                self.report(e);
                return;
            }
        };

        if current != 1 {
            match platform.write_dword(&config.registry_key, &config.desktop_auto_invoke_value, 1) {
                Ok(()) => info!(event = "tabtip.controller.auto_invoke_enabled", "Enabled desktop mode auto invoke"),
                Err(e) => self.report(e),
            }
        }
    }

    fn kill_running_instances(&self) {
        let name = &self.inner.config.process_name;
        for pid in self.inner.platform.processes_named(name) {
            match self.inner.platform.kill(pid, name) {
                Ok(()) => info!(event = "tabtip.controller.killed", pid = pid, "Killed keyboard process"),
                Err(e) => self.report(e),
            }
        }
    }

    fn report(&self, error: TabTipError) {
        warn!(event = "tabtip.controller.exception_caught", error = %error, "Native call failed");
        self.inner.events.emit_exception(&error);
    }
}

impl<P: Platform> std::fmt::Debug for TabTip<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabTip")
            .field("config", &self.inner.config)
            .field("last_rect", &self.cached_rectangle())
            .field("events", &self.inner.events)
            .finish()
    }
}

fn lock(mutex: &Mutex<Rect>) -> MutexGuard<'_, Rect> {
    // Rect writes are single assignments, a poisoned value is still whole
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
