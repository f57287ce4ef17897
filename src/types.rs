//! Core value types shared by the mappers, the dispatcher and the sampling loop.

use core::fmt;

/// Largest value a 12-bit ADC conversion can produce.
pub const ADC_FULL_SCALE: u16 = 4095;

/// PWM counter wrap value; levels are expressed against this top.
pub const PWM_WRAP: u16 = 4095;

/// One reading of both joystick axes.
///
/// `x` drives the horizontal cursor position and the horizontal LED channel,
/// `y` drives the vertical position (inverted) and the vertical LED channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogSample {
    pub x: u16,
    pub y: u16,
}

impl AnalogSample {
    /// Creates a sample, clamping both axes to the 12-bit ADC range.
    #[inline]
    pub fn new(x: u16, y: u16) -> Self {
        Self {
            x: x.min(ADC_FULL_SCALE),
            y: y.min(ADC_FULL_SCALE),
        }
    }

    /// Sample with both axes at rest.
    pub const CENTERED: Self = Self { x: 2048, y: 2048 };
}

/// Brightness for the two PWM-driven LED channels, each in `0..=PWM_WRAP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BrightnessLevels {
    pub horizontal: u16,
    pub vertical: u16,
}

impl BrightnessLevels {
    /// Both channels dark.
    pub const OFF: Self = Self {
        horizontal: 0,
        vertical: 0,
    };
}

/// Top-left pixel of the cursor marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorPosition {
    pub x: i32,
    pub y: i32,
}

impl CursorPosition {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Renders the diagnostic line, e.g. `X: 60, Y: 28`.
impl fmt::Display for CursorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {}, Y: {}", self.x, self.y)
    }
}

/// Physical button that raised an edge interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonSource {
    /// Enables/disables both PWM outputs.
    Toggle,
    /// Joystick push button: status LED and border.
    Joystick,
    /// Reboots into the bootloader.
    Reset,
}

impl ButtonSource {
    /// All sources, in interrupt polling order.
    pub const ALL: [ButtonSource; 3] = [
        ButtonSource::Toggle,
        ButtonSource::Joystick,
        ButtonSource::Reset,
    ];

    /// Whether events from this source pass through the debounce gate.
    #[inline]
    pub fn is_debounced(self) -> bool {
        !matches!(self, ButtonSource::Reset)
    }

    /// The logical request this button raises.
    #[inline]
    pub fn event(self) -> ButtonEvent {
        match self {
            ButtonSource::Toggle => ButtonEvent::ToggleRequested,
            ButtonSource::Joystick => ButtonEvent::StatusRequested,
            ButtonSource::Reset => ButtonEvent::ResetRequested,
        }
    }
}

/// Why an interrupt fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeTrigger {
    /// High-to-low transition (button pressed on pull-up wiring).
    Falling,
    /// Low-to-high transition (button released).
    Rising,
}

/// Logical request carried by an accepted button edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    ToggleRequested,
    StatusRequested,
    ResetRequested,
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::format;

    #[test]
    fn diagnostic_line_format() {
        assert_eq!(format!("{}", CursorPosition::new(60, 28)), "X: 60, Y: 28");
        assert_eq!(format!("{}", CursorPosition::new(0, 4)), "X: 0, Y: 4");
    }

    #[test]
    fn samples_are_clamped_to_adc_range() {
        let sample = AnalogSample::new(5000, u16::MAX);
        assert_eq!(sample, AnalogSample { x: 4095, y: 4095 });
    }

    #[test]
    fn only_reset_bypasses_debounce() {
        assert!(ButtonSource::Toggle.is_debounced());
        assert!(ButtonSource::Joystick.is_debounced());
        assert!(!ButtonSource::Reset.is_debounced());
    }
}
