//! Monotonic clock abstraction used by the control loop.
//!
//! The kernel never sleeps. It reads the clock once per poll and compares
//! elapsed milliseconds against fixed thresholds, so any monotonic counter
//! (embassy-time, a SysTick millisecond counter, a test mock) will do.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations backed by wrapping counters should use wrapping
    /// subtraction so a rollover never yields a bogus huge value.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Returns true once strictly more than `millis` have passed since `earlier`.
    #[inline]
    fn elapsed_beyond(&self, earlier: Self, millis: u64) -> bool {
        self.duration_since(earlier).as_millis() > millis
    }
}
