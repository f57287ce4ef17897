//! Persistent button-driven state: PWM output enable and the status indicator.

/// Whether the LED PWM outputs are running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputState {
    Enabled,
    Disabled,
}

impl OutputState {
    #[inline]
    pub fn is_enabled(self) -> bool {
        self == OutputState::Enabled
    }
}

/// Toggle counter and status flag, mutated only by accepted button events.
///
/// Outputs start enabled. Each accepted toggle looks at the counter *before*
/// incrementing it: an even count disables the outputs, an odd count enables them.
/// The first press therefore always turns the LEDs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToggleState {
    toggles: u32,
    status_on: bool,
}

impl ToggleState {
    /// Outputs enabled, status indicator off.
    pub const fn new() -> Self {
        Self {
            toggles: 0,
            status_on: false,
        }
    }

    /// Records an accepted toggle press and returns the resulting output state.
    pub fn on_toggle_event(&mut self) -> OutputState {
        let next = if self.toggles % 2 == 0 {
            OutputState::Disabled
        } else {
            OutputState::Enabled
        };
        self.toggles = self.toggles.wrapping_add(1);
        next
    }

    /// Inverts the status indicator and returns its new value.
    pub fn on_status_event(&mut self) -> bool {
        self.status_on = !self.status_on;
        self.status_on
    }

    /// Current output state, derived from the toggle count parity.
    pub fn output_state(&self) -> OutputState {
        if self.toggles % 2 == 0 {
            OutputState::Enabled
        } else {
            OutputState::Disabled
        }
    }

    pub fn outputs_enabled(&self) -> bool {
        self.output_state().is_enabled()
    }

    pub fn status_on(&self) -> bool {
        self.status_on
    }

    /// Number of accepted toggle presses (wrapping).
    pub fn toggle_count(&self) -> u32 {
        self.toggles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_enabled_with_status_off() {
        let state = ToggleState::new();
        assert!(state.outputs_enabled());
        assert!(!state.status_on());
        assert_eq!(state.toggle_count(), 0);
    }

    #[test]
    fn first_toggle_disables_second_enables() {
        let mut state = ToggleState::new();
        assert_eq!(state.on_toggle_event(), OutputState::Disabled);
        assert_eq!(state.output_state(), OutputState::Disabled);
        assert_eq!(state.on_toggle_event(), OutputState::Enabled);
        assert_eq!(state.output_state(), OutputState::Enabled);
    }

    #[test]
    fn returned_state_always_matches_parity() {
        let mut state = ToggleState::new();
        for _ in 0..9 {
            let returned = state.on_toggle_event();
            assert_eq!(returned, state.output_state());
        }
        assert!(!state.outputs_enabled());
    }

    #[test]
    fn status_flag_is_independent_of_toggles() {
        let mut state = ToggleState::new();
        assert!(state.on_status_event());
        state.on_toggle_event();
        assert!(state.status_on());
        assert!(!state.on_status_event());
    }
}
