//! Bounded synchronous wait for a predicate.
//!
//! This is the arrival-wait collaborator of the navigation engine: block
//! the calling thread until a zero-argument predicate returns true or a
//! timeout elapses. The only cancellation mechanism is the timeout.

use std::time::{Duration, Instant};
use thiserror::Error;

/// The predicate never returned true within the window.
#[derive(Debug, Error)]
#[error("Predicate did not succeed within {timeout:?}")]
pub struct TimedOut {
    pub timeout: Duration,
}

/// Poll `predicate` every `interval` until it returns true or `timeout`
/// elapses. The predicate is always checked at least once, even with a
/// zero timeout.
pub fn wait_for<F>(mut predicate: F, timeout: Duration, interval: Duration) -> Result<(), TimedOut>
where
    F: FnMut() -> bool,
{
    let deadline = Instant::now() + timeout;
    loop {
        if predicate() {
            return Ok(());
        }
        let now = Instant::now();
        if now >= deadline {
            return Err(TimedOut { timeout });
        }
        // Never oversleep past the deadline.
        let remaining = deadline.saturating_duration_since(now);
        std::thread::sleep(interval.min(remaining));
    }
}
