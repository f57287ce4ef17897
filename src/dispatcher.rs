//! Button interrupt routing.
//!
//! [`InterruptDispatcher`] is the context object owned by the GPIO interrupt. It turns
//! a raw edge into a [`ButtonEvent`], filters it through the per-source debounce
//! gates and runs the toggle state machine. It returns the resulting [`Commands`]
//! instead of touching hardware, so the handler stays short and the display write
//! can be executed under whatever lock the board uses.

use crate::command::{self, Command, Commands};
use crate::config::ReactorConfig;
use crate::debounce::DebounceTable;
use crate::time::TimeInstant;
use crate::toggle::ToggleState;
use crate::types::{ButtonEvent, ButtonSource, EdgeTrigger};

/// Debounce records plus toggle state for the three buttons.
#[derive(Debug, Clone, Copy)]
pub struct InterruptDispatcher<I: TimeInstant> {
    debounce: DebounceTable<I>,
    state: ToggleState,
}

impl<I: TimeInstant> InterruptDispatcher<I> {
    /// Creates a dispatcher whose gates treat the clock epoch as the last accepted edge.
    pub fn new(config: &ReactorConfig) -> Self {
        Self::starting_at(config, I::EPOCH)
    }

    /// Creates a dispatcher whose gates have no history: the first press after boot
    /// always passes.
    pub fn without_history(config: &ReactorConfig) -> Self {
        Self {
            debounce: DebounceTable::without_history(config.debounce_micros),
            state: ToggleState::new(),
        }
    }

    /// Creates a dispatcher whose gates treat `epoch` as the last accepted edge.
    pub fn starting_at(config: &ReactorConfig, epoch: I) -> Self {
        Self {
            debounce: DebounceTable::starting_at(config.debounce_micros, epoch),
            state: ToggleState::new(),
        }
    }

    /// Handles one edge interrupt from `source` observed at `now`.
    ///
    /// Only falling edges (presses on active-low wiring) act; anything else, and any
    /// edge rejected by the debounce gate, yields no commands.
    pub fn handle(&mut self, source: ButtonSource, trigger: EdgeTrigger, now: I) -> Commands {
        if trigger != EdgeTrigger::Falling {
            return Commands::new();
        }

        if !self.debounce.accept(source, now) {
            #[cfg(feature = "defmt")]
            defmt::debug!("edge from {} rejected by debounce", source);
            return Commands::new();
        }

        self.react(source.event())
    }

    /// Runs the state machine for an already-accepted event.
    pub fn react(&mut self, event: ButtonEvent) -> Commands {
        let mut commands = Commands::new();

        match event {
            ButtonEvent::ToggleRequested => {
                let outputs = self.state.on_toggle_event();
                #[cfg(feature = "defmt")]
                defmt::debug!("toggle accepted, outputs {}", outputs);
                command::push(&mut commands, Command::SetOutputsEnabled(outputs.is_enabled()));
            }
            ButtonEvent::StatusRequested => {
                let on = self.state.on_status_event();
                #[cfg(feature = "defmt")]
                defmt::debug!("status accepted, indicator {}", on);
                command::push(&mut commands, Command::SetStatusLed(on));
                command::push(&mut commands, Command::DrawStatusBorder);
            }
            ButtonEvent::ResetRequested => {
                #[cfg(feature = "defmt")]
                defmt::info!("reset requested, entering bootloader");
                command::push(&mut commands, Command::EnterBootloader);
            }
        }

        commands
    }

    /// Current toggle and status state.
    pub fn state(&self) -> &ToggleState {
        &self.state
    }

    /// Current debounce records.
    pub fn debounce(&self) -> &DebounceTable<I> {
        &self.debounce
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::MicrosInstant;

    fn dispatcher() -> InterruptDispatcher<MicrosInstant> {
        InterruptDispatcher::new(&ReactorConfig::default())
    }

    #[test]
    fn rising_edges_are_ignored() {
        let mut dispatcher = dispatcher();
        let at = MicrosInstant(1_000_000);
        let commands = dispatcher.handle(ButtonSource::Toggle, EdgeTrigger::Rising, at);
        assert!(commands.is_empty());
        assert_eq!(dispatcher.state().toggle_count(), 0);
        // A rising edge does not consume the debounce window either.
        let at = MicrosInstant(1_000_001);
        let commands = dispatcher.handle(ButtonSource::Toggle, EdgeTrigger::Falling, at);
        assert_eq!(commands.as_slice(), &[Command::SetOutputsEnabled(false)]);
    }

    #[test]
    fn status_event_draws_border_after_led() {
        let mut dispatcher = dispatcher();
        let commands = dispatcher.react(ButtonEvent::StatusRequested);
        assert_eq!(
            commands.as_slice(),
            &[Command::SetStatusLed(true), Command::DrawStatusBorder]
        );
    }

    #[test]
    fn reset_is_never_debounced() {
        let mut dispatcher = dispatcher();
        for t in [0, 1, 2] {
            let at = MicrosInstant(t);
            let commands = dispatcher.handle(ButtonSource::Reset, EdgeTrigger::Falling, at);
            assert_eq!(commands.as_slice(), &[Command::EnterBootloader]);
        }
    }
}
