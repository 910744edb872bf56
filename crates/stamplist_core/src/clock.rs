//! Time source port used when stamping new records.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Provides the current time in Unix epoch milliseconds.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        // Clock before the epoch is clamped to zero.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// Deterministic time source for tests and previews.
///
/// Each `now_ms()` call returns the current value, then advances it by `step_ms`.
#[derive(Debug)]
pub struct FixedClock {
    current_ms: AtomicI64,
    step_ms: i64,
}

impl FixedClock {
    /// Always returns `at_ms`.
    pub fn new(at_ms: i64) -> Self {
        Self::stepping(at_ms, 0)
    }

    /// Starts at `start_ms` and advances by `step_ms` after every read.
    pub fn stepping(start_ms: i64, step_ms: i64) -> Self {
        Self {
            current_ms: AtomicI64::new(start_ms),
            step_ms,
        }
    }

    pub fn set(&self, at_ms: i64) {
        self.current_ms.store(at_ms, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.current_ms.fetch_add(self.step_ms, Ordering::SeqCst)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, FixedClock, SystemClock};

    #[test]
    fn fixed_clock_steps_after_each_read() {
        let clock = FixedClock::stepping(100, 10);
        assert_eq!(clock.now_ms(), 100);
        assert_eq!(clock.now_ms(), 110);
        clock.set(5);
        assert_eq!(clock.now_ms(), 5);
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.now_ms() > 1_577_836_800_000);
    }
}
