//! Time abstraction traits for platform-agnostic timing.
//!
//! Debouncing works in microseconds, matching the resolution of the free-running
//! hardware timers the core is usually paired with.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq + PartialOrd + core::fmt::Debug {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to microseconds.
    fn as_micros(&self) -> u64;

    /// Creates duration from microseconds.
    fn from_micros(micros: u64) -> Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64 {
        self.as_micros() / 1_000
    }
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// The clock epoch (boot).
    const EPOCH: Self;

    /// Calculates duration since an earlier instant.
    ///
    /// Must saturate to `ZERO` when `earlier` is actually later than `self`.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Microsecond duration used by the crate's own defaults and by hosts without a HAL clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Micros(pub u64);

impl TimeDuration for Micros {
    const ZERO: Self = Micros(0);

    fn as_micros(&self) -> u64 {
        self.0
    }

    fn from_micros(micros: u64) -> Self {
        Micros(micros)
    }
}

/// Microseconds elapsed since the clock epoch (boot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MicrosInstant(pub u64);

impl TimeInstant for MicrosInstant {
    type Duration = Micros;

    const EPOCH: Self = MicrosInstant(0);

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Micros(self.0.saturating_sub(earlier.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_since_saturates_on_reordered_instants() {
        let early = MicrosInstant(5_000);
        let late = MicrosInstant(9_000);

        assert_eq!(late.duration_since(early), Micros(4_000));
        assert_eq!(early.duration_since(late), Micros::ZERO);
    }

    #[test]
    fn millis_are_truncated() {
        assert_eq!(Micros(199_999).as_millis(), 199);
        assert_eq!(Micros::from_micros(200_000).as_millis(), 200);
    }
}
