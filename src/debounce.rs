//! Minimum-interval debouncing for edge-triggered buttons.
//!
//! Mechanical contacts bounce and raise a burst of edges per press. A
//! [`DebounceGate`] accepts the first edge and then ignores its source until the
//! configured interval has passed since the last *accepted* edge. Rejected edges do
//! not extend the window.

use crate::time::{TimeDuration, TimeInstant};
use crate::types::ButtonSource;

/// Debounce state for a single input source.
#[derive(Debug, Clone, Copy)]
pub struct DebounceGate<I: TimeInstant> {
    interval: I::Duration,
    last_accepted: Option<I>,
}

impl<I: TimeInstant> DebounceGate<I> {
    /// Creates a gate with no history: the first edge always passes.
    pub fn new(interval: I::Duration) -> Self {
        Self {
            interval,
            last_accepted: None,
        }
    }

    /// Creates a gate that treats `epoch` as the last accepted edge.
    ///
    /// Edges arriving within one interval of `epoch` are rejected.
    pub fn starting_at(interval: I::Duration, epoch: I) -> Self {
        Self {
            interval,
            last_accepted: Some(epoch),
        }
    }

    /// Returns `true` and records `now` iff at least one interval has elapsed since
    /// the last accepted edge.
    pub fn accept(&mut self, now: I) -> bool {
        if let Some(last) = self.last_accepted {
            if now.duration_since(last) < self.interval {
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }

    /// Instant of the last accepted edge, if any.
    pub fn last_accepted(&self) -> Option<I> {
        self.last_accepted
    }

    /// Configured minimum interval.
    pub fn interval(&self) -> I::Duration {
        self.interval
    }
}

/// One [`DebounceGate`] per debounced button.
///
/// Gates never share records, so a bouncing joystick button cannot suppress a
/// toggle press and vice versa. [`ButtonSource::Reset`] has no gate.
#[derive(Debug, Clone, Copy)]
pub struct DebounceTable<I: TimeInstant> {
    toggle: DebounceGate<I>,
    joystick: DebounceGate<I>,
}

impl<I: TimeInstant> DebounceTable<I> {
    /// Creates gates that treat the clock epoch as the last accepted edge.
    ///
    /// Presses within one interval of boot are dropped along with power-on glitches.
    pub fn new(interval_micros: u64) -> Self {
        Self::starting_at(interval_micros, I::EPOCH)
    }

    /// Creates gates with no history: the first edge on each source passes.
    pub fn without_history(interval_micros: u64) -> Self {
        let interval = I::Duration::from_micros(interval_micros);
        Self {
            toggle: DebounceGate::new(interval),
            joystick: DebounceGate::new(interval),
        }
    }

    /// Creates gates that treat `epoch` as the last accepted edge.
    pub fn starting_at(interval_micros: u64, epoch: I) -> Self {
        let interval = I::Duration::from_micros(interval_micros);
        Self {
            toggle: DebounceGate::starting_at(interval, epoch),
            joystick: DebounceGate::starting_at(interval, epoch),
        }
    }

    /// Filters an edge from `source` observed at `now`.
    ///
    /// Edges from sources without a gate always pass.
    pub fn accept(&mut self, source: ButtonSource, now: I) -> bool {
        match self.gate_mut(source) {
            Some(gate) => gate.accept(now),
            None => true,
        }
    }

    /// Gate for `source`, or `None` if the source is not debounced.
    pub fn gate(&self, source: ButtonSource) -> Option<&DebounceGate<I>> {
        match source {
            ButtonSource::Toggle => Some(&self.toggle),
            ButtonSource::Joystick => Some(&self.joystick),
            ButtonSource::Reset => None,
        }
    }

    fn gate_mut(&mut self, source: ButtonSource) -> Option<&mut DebounceGate<I>> {
        match source {
            ButtonSource::Toggle => Some(&mut self.toggle),
            ButtonSource::Joystick => Some(&mut self.joystick),
            ButtonSource::Reset => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{Micros, MicrosInstant};

    fn gate() -> DebounceGate<MicrosInstant> {
        DebounceGate::new(Micros(200_000))
    }

    #[test]
    fn first_edge_passes_without_history() {
        let mut gate = gate();
        assert!(gate.accept(MicrosInstant(10)));
        assert_eq!(gate.last_accepted(), Some(MicrosInstant(10)));
    }

    #[test]
    fn exact_interval_is_accepted() {
        let mut gate = gate();
        assert!(gate.accept(MicrosInstant(1_000_000)));
        assert!(!gate.accept(MicrosInstant(1_199_999)));
        assert!(gate.accept(MicrosInstant(1_200_000)));
    }

    #[test]
    fn rejected_edges_do_not_extend_window() {
        let mut gate = gate();
        assert!(gate.accept(MicrosInstant(0)));
        assert!(!gate.accept(MicrosInstant(150_000)));
        assert!(!gate.accept(MicrosInstant(199_000)));
        assert_eq!(gate.last_accepted(), Some(MicrosInstant(0)));
        assert!(gate.accept(MicrosInstant(200_000)));
    }

    #[test]
    fn epoch_start_rejects_early_edges() {
        let mut gate = DebounceGate::starting_at(Micros(200_000), MicrosInstant::EPOCH);
        assert!(!gate.accept(MicrosInstant(50_000)));
        assert!(gate.accept(MicrosInstant(250_000)));
    }

    #[test]
    fn clock_going_backwards_is_rejected() {
        let mut gate = gate();
        assert!(gate.accept(MicrosInstant(900_000)));
        assert!(!gate.accept(MicrosInstant(100)));
    }

    #[test]
    fn table_keeps_sources_independent() {
        let mut table = DebounceTable::<MicrosInstant>::new(200_000);
        assert!(table.accept(ButtonSource::Toggle, MicrosInstant(1_000_000)));
        assert!(table.accept(ButtonSource::Joystick, MicrosInstant(1_010_000)));
        assert!(!table.accept(ButtonSource::Toggle, MicrosInstant(1_020_000)));
        assert!(table.accept(ButtonSource::Reset, MicrosInstant(1_020_000)));
        assert!(table.accept(ButtonSource::Reset, MicrosInstant(1_020_001)));
        assert!(table.gate(ButtonSource::Reset).is_none());
    }

    #[test]
    fn table_starts_at_epoch_unless_asked_not_to() {
        let mut table = DebounceTable::<MicrosInstant>::new(200_000);
        assert!(!table.accept(ButtonSource::Toggle, MicrosInstant(50_000)));
        assert!(table.accept(ButtonSource::Toggle, MicrosInstant(200_000)));

        let mut table = DebounceTable::<MicrosInstant>::without_history(200_000);
        assert!(table.accept(ButtonSource::Toggle, MicrosInstant(50_000)));
    }
}
