//! Clock implementations.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[inline]
pub(crate) fn duration_to_nanos_saturating(duration: Duration) -> i64 {
    i64::try_from(duration.as_nanos()).unwrap_or(i64::MAX)
}

/// Source of the current time, in nanoseconds since the Unix epoch.
///
/// Signers read the clock once per call and never cache it.
pub trait Clock: Send + Sync {
    /// Returns the current time in nanoseconds since the Unix epoch.
    fn now_nanos(&self) -> i64;
}

/// Wall clock time source for production use.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_nanos(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => duration_to_nanos_saturating(since),
            // Clock set before 1970: report a negative offset.
            Err(err) => duration_to_nanos_saturating(err.duration()).saturating_neg(),
        }
    }
}

/// Manually driven clock for deterministic tests.
///
/// Time only moves when [`advance`](Self::advance) or [`set`](Self::set)
/// is called.
///
/// # Example
///
/// ```
/// use signet::time::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::starting_at(1_000);
/// clock.advance(Duration::from_nanos(500));
/// assert_eq!(clock.now_nanos(), 1_500);
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    /// Creates a clock at the Unix epoch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock at the given nanosecond timestamp.
    #[must_use]
    pub fn starting_at(nanos: i64) -> Self {
        Self {
            now: AtomicI64::new(nanos),
        }
    }

    /// Moves the clock forward by `by`, saturating at `i64::MAX`.
    pub fn advance(&self, by: Duration) {
        let delta = duration_to_nanos_saturating(by);
        // The closure always returns `Some`, so the update cannot fail.
        let _ = self
            .now
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |now| {
                Some(now.saturating_add(delta))
            });
    }

    /// Sets the clock to an absolute nanosecond timestamp.
    pub fn set(&self, nanos: i64) {
        self.now.store(nanos, Ordering::Release);
    }
}

impl Clock for ManualClock {
    fn now_nanos(&self) -> i64 {
        self.now.load(Ordering::Acquire)
    }
}
