//! Fixed-period joystick sampling loop.
//!
//! Each iteration reads both axes, maps them to LED brightness and a cursor
//! position, and emits the commands that redraw the display, update the PWM duty
//! levels and report the coordinates. Nothing carries over between iterations.

use crate::command::{self, Board, Command, Commands};
use crate::config::ReactorConfig;
use crate::display::DisplayFrame;
use crate::mapping::{CoordinateMapper, PwmMapper};
use crate::types::{AnalogSample, BrightnessLevels, CursorPosition};
use embedded_hal::delay::DelayNs;

/// Trait for abstracting the joystick ADC.
///
/// Implementations return raw 12-bit conversions for both axes. Handle conversion
/// errors internally (e.g. by returning the last good reading); this cannot fail.
pub trait AnalogInput {
    fn read(&mut self) -> AnalogSample;
}

/// Everything computed from one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick {
    pub sample: AnalogSample,
    pub levels: BrightnessLevels,
    pub cursor: CursorPosition,
    pub frame: DisplayFrame,
}

impl Tick {
    /// Commands in execution order: redraw, PWM update, diagnostic line.
    pub fn commands(&self) -> Commands {
        let mut commands = Commands::new();
        command::push(&mut commands, Command::Render(self.frame));
        command::push(&mut commands, Command::SetBrightness(self.levels));
        command::push(&mut commands, Command::Report(self.cursor));
        commands
    }
}

/// The cooperative main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SamplingLoop {
    brightness: PwmMapper,
    coordinates: CoordinateMapper,
    period_ms: u32,
}

impl SamplingLoop {
    pub fn new(config: &ReactorConfig) -> Self {
        Self {
            brightness: PwmMapper::new(config.dead_zone),
            coordinates: CoordinateMapper::new(config.cursor),
            period_ms: config.sample_period_ms,
        }
    }

    /// Maps one sample without side effects.
    pub fn evaluate(&self, sample: AnalogSample) -> Tick {
        let cursor = self.coordinates.map_sample(sample);
        Tick {
            sample,
            levels: self.brightness.map_sample(sample),
            cursor,
            frame: DisplayFrame::new(cursor),
        }
    }

    /// Maps one sample to the commands of one iteration.
    pub fn tick(&self, sample: AnalogSample) -> Commands {
        self.evaluate(sample).commands()
    }

    /// Reads the ADC, computes and executes one iteration.
    pub fn run_once<A, B>(&self, adc: &mut A, board: &mut B) -> Tick
    where
        A: AnalogInput + ?Sized,
        B: Board + ?Sized,
    {
        let tick = self.evaluate(adc.read());
        command::apply_all(board, &tick.commands());
        tick
    }

    /// Runs forever, waiting at least one period after each iteration.
    pub fn run<A, B, D>(&self, adc: &mut A, board: &mut B, delay: &mut D) -> !
    where
        A: AnalogInput + ?Sized,
        B: Board + ?Sized,
        D: DelayNs + ?Sized,
    {
        loop {
            self.run_once(adc, board);
            delay.delay_ms(self.period_ms);
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn brightness(&self) -> &PwmMapper {
        &self.brightness
    }

    pub fn coordinates(&self) -> &CoordinateMapper {
        &self.coordinates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_stick_is_dark_and_centered() {
        let sampler = SamplingLoop::new(&ReactorConfig::default());
        let tick = sampler.evaluate(AnalogSample::CENTERED);
        assert_eq!(tick.levels, BrightnessLevels::OFF);
        assert_eq!(tick.cursor, CursorPosition::new(60, 28));
    }

    #[test]
    fn tick_emits_render_brightness_report() {
        let sampler = SamplingLoop::new(&ReactorConfig::default());
        let commands = sampler.tick(AnalogSample::new(4095, 0));
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], Command::Render(_)));
        assert_eq!(
            commands[1],
            Command::SetBrightness(BrightnessLevels {
                horizontal: 4094,
                vertical: 4095,
            })
        );
        assert_eq!(commands[2], Command::Report(CursorPosition::new(120, 56)));
    }
}
