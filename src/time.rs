//! Time abstraction traits for platform-agnostic timing.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Saturating subtraction (returns zero on underflow).
    fn saturating_sub(self, other: Self) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// `earlier` must not be later than `self`; implementations may
    /// saturate to zero or panic otherwise.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

impl TimeDuration for core::time::Duration {
    fn as_millis(&self) -> u64 {
        core::time::Duration::as_millis(self).min(u64::MAX as u128) as u64
    }

    fn from_millis(millis: u64) -> Self {
        core::time::Duration::from_millis(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        core::time::Duration::saturating_sub(self, other)
    }
}

/// Monotonic wall-clock instant for desktop hosts.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StdInstant(pub std::time::Instant);

#[cfg(feature = "std")]
impl TimeInstant for StdInstant {
    type Duration = core::time::Duration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        self.0.saturating_duration_since(earlier.0)
    }
}

/// Time source backed by `std::time::Instant`.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StdClock;

#[cfg(feature = "std")]
impl TimeSource<StdInstant> for StdClock {
    fn now(&self) -> StdInstant {
        StdInstant(std::time::Instant::now())
    }
}
