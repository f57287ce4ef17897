use embedded_hal::pwm::SetDutyCycle;
use joystick_reactor::{BrightnessLevels, PWM_WRAP};
use rp_pico::hal::pwm::{FreeRunning, Pwm6, Slice};

/// PWM slice driving both joystick LEDs.
///
/// GPIO12 (blue) is channel A and GPIO13 (red) is channel B of slice 6, so a
/// single slice enable switches both LEDs at once.
pub type LedSlice = Slice<Pwm6, FreeRunning>;

/// LED pair implementation for the joystick board
///
/// The red LED follows the horizontal axis, the blue LED the vertical axis.
/// Duty levels are written straight through: the slice wraps at `PWM_WRAP`, so a
/// level maps 1:1 to on-time counts.
pub struct PwmLeds {
    slice: LedSlice,
}

impl PwmLeds {
    /// Take over a slice whose channels are already routed to the LED pins
    ///
    /// Configures the 12-bit wrap and starts the counter with both outputs dark.
    pub fn new(mut slice: LedSlice) -> Self {
        slice.set_top(PWM_WRAP);
        let _ = slice.channel_a.set_duty_cycle(0);
        let _ = slice.channel_b.set_duty_cycle(0);
        slice.enable();

        Self { slice }
    }

    /// Write both duty levels
    pub fn set_levels(&mut self, levels: BrightnessLevels) {
        let _ = self.slice.channel_b.set_duty_cycle(levels.horizontal.min(PWM_WRAP));
        let _ = self.slice.channel_a.set_duty_cycle(levels.vertical.min(PWM_WRAP));
    }

    /// Start or stop the slice; the duty levels are kept while stopped
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled {
            self.slice.enable();
        } else {
            self.slice.disable();
        }
    }
}
