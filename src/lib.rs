#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`InterruptDispatcher`**: Owns the debounce records and toggle state; turns button
//!   edges into commands
//! - **`SamplingLoop`**: Maps each joystick sample to LED brightness and a cursor, once per period
//! - **`PwmMapper`** / **`CoordinateMapper`**: The pure analog transfer functions
//! - **`Command`**: A side effect (PWM, status LED, display, diagnostic line, bootloader)
//! - **`Board`**: Trait to implement for your hardware; executes commands
//! - **`DisplaySurface`**: Trait to implement for your display driver
//! - **`AnalogInput`**: Trait to implement for your ADC
//! - **`Shared`**: Critical-section guarded storage for state touched by interrupts
//!
//! The dispatcher runs in interrupt context and the sampling loop in thread context.
//! Both only *return* commands; the board decides how to serialize access to the
//! display and PWM peripherals they both write.

pub mod command;
pub mod config;
pub mod debounce;
pub mod dispatcher;
pub mod display;
pub mod mapping;
pub mod sampler;
pub mod shared;
pub mod time;
pub mod toggle;
pub mod types;

pub use command::{Board, Command, Commands, apply, apply_all, startup_commands};
pub use config::{ConfigBuilder, ConfigError, CursorBounds, DeadZone, ReactorConfig};
pub use debounce::{DebounceGate, DebounceTable};
pub use dispatcher::InterruptDispatcher;
pub use display::{DisplayFrame, DisplaySurface, Rect};
pub use mapping::{CoordinateMapper, PwmMapper};
pub use sampler::{AnalogInput, SamplingLoop, Tick};
pub use shared::Shared;
pub use time::{Micros, MicrosInstant, TimeDuration, TimeInstant, TimeSource};
pub use toggle::{OutputState, ToggleState};
pub use types::{
    ADC_FULL_SCALE, AnalogSample, BrightnessLevels, ButtonEvent, ButtonSource, CursorPosition,
    EdgeTrigger, PWM_WRAP,
};

/// Dispatcher and sampling loop built from one config.
///
/// Split it with [`Reactor::into_parts`] once the board is up: the dispatcher goes
/// to the interrupt handler, the sampling loop stays in `main`.
pub struct Reactor<I: TimeInstant> {
    dispatcher: InterruptDispatcher<I>,
    sampler: SamplingLoop,
}

impl<I: TimeInstant> Reactor<I> {
    pub fn new(config: ReactorConfig) -> Self {
        Self {
            dispatcher: InterruptDispatcher::new(&config),
            sampler: SamplingLoop::new(&config),
        }
    }

    /// Brings `board` into its power-on state.
    pub fn startup<B: Board + ?Sized>(&self, board: &mut B) {
        apply_all(board, &startup_commands());
    }

    pub fn dispatcher_mut(&mut self) -> &mut InterruptDispatcher<I> {
        &mut self.dispatcher
    }

    pub fn sampler(&self) -> &SamplingLoop {
        &self.sampler
    }

    pub fn into_parts(self) -> (InterruptDispatcher<I>, SamplingLoop) {
        (self.dispatcher, self.sampler)
    }
}

impl<I: TimeInstant> Default for Reactor<I> {
    fn default() -> Self {
        Self::new(ReactorConfig::default())
    }
}
