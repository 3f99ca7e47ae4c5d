//! Wall-clock time sources for timing-based entropy.
//!
//! The pool measures the interval between successive timing events and
//! stirs that interval in. The time source is a trait so that tests and
//! simulations can drive it by hand.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// A source of wall-clock readings in microseconds since the Unix epoch.
pub trait Clock {
    /// Returns the current time in whole microseconds.
    fn now_micros(&self) -> i64;
}

/// Reads the system's UTC wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_micros(&self) -> i64 {
        Utc::now().timestamp_micros()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same reading, so a test can keep one handle while the
/// pool owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    /// Creates a clock reading `start_micros`.
    pub fn new(start_micros: i64) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(start_micros)),
        }
    }

    /// Sets the current reading.
    pub fn set(&self, micros: i64) {
        self.now.store(micros, Ordering::SeqCst);
    }

    /// Moves the reading forward by `micros`.
    pub fn advance(&self, micros: i64) {
        self.now.fetch_add(micros, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_micros(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}
