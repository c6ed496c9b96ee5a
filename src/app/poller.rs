//! Repeating background poll
//!
//! Runs a predicate on a dedicated thread until it holds, then invokes a
//! callback once. Used to detect the keyboard collapsing.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;

/// How a poll ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The predicate held and the callback ran
    Fired,
    /// Cancelled before the predicate held; the callback never ran
    Cancelled,
}

#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("Poll thread panicked")]
    ThreadJoinFailed,
}

/// Handle to a running poll
///
/// Dropping the handle detaches the poll; it keeps running until its
/// predicate holds.
#[derive(Debug)]
pub struct PollHandle {
    // Set by `cancel`, checked before every evaluation
    cancelled: Arc<AtomicBool>,
    // Set by the poll thread when it exits
    finished: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<PollOutcome>>,
}

impl PollHandle {
    /// Stops the poll before its next evaluation
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Check if the poll thread has exited
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }

    /// Waits for the poll to end
    pub fn join(mut self) -> Result<PollOutcome, PollError> {
        match self.thread_handle.take() {
            Some(handle) => handle.join().map_err(|_| PollError::ThreadJoinFailed),
            None => Err(PollError::ThreadJoinFailed),
        }
    }
}

/// Starts polling `predicate` on a background thread
///
/// Sleeps `initial_delay`, then evaluates `predicate` every `interval`. The
/// first time it returns true, `callback` is invoked once and the thread
/// exits.
pub fn poll<P, C>(mut predicate: P, callback: C, initial_delay: Duration, interval: Duration) -> PollHandle
where
    P: FnMut() -> bool + Send + 'static,
    C: FnOnce() + Send + 'static,
{
    let cancelled = Arc::new(AtomicBool::new(false));
    let finished = Arc::new(AtomicBool::new(false));

    let thread_cancelled = Arc::clone(&cancelled);
    let thread_finished = Arc::clone(&finished);

    let handle = thread::spawn(move || {
        thread::sleep(initial_delay);

        let mut evaluations: u64 = 0;
        let outcome = loop {
            if thread_cancelled.load(Ordering::Relaxed) {
                break PollOutcome::Cancelled;
            }

            evaluations += 1;
            if predicate() {
                debug!(
                    event = "tabtip.poll.predicate_held",
                    evaluations = evaluations,
                    "Poll predicate held"
                );
                callback();
                break PollOutcome::Fired;
            }

            thread::sleep(interval);
        };

        thread_finished.store(true, Ordering::Release);
        outcome
    });

    PollHandle {
        cancelled,
        finished,
        thread_handle: Some(handle),
    }
}
