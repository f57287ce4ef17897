//! Board wiring and the `Board` implementation used from both contexts.
//!
//! | Function            | GPIO | Peripheral        |
//! |---------------------|------|-------------------|
//! | Status LED (green)  | 11   | SIO output        |
//! | Vertical LED (blue) | 12   | PWM6 A            |
//! | Horizontal LED (red)| 13   | PWM6 B            |
//! | OLED SDA / SCL      | 14/15| I2C1, 400 kHz     |
//! | Toggle button (A)   | 5    | SIO input, pull-up|
//! | Reset button (B)    | 6    | SIO input, pull-up|
//! | Joystick button     | 22   | SIO input, pull-up|
//! | Vertical axis       | 26   | ADC0              |
//! | Horizontal axis     | 27   | ADC1              |
//!
//! The display and the PWM slice are written by the sampling loop and by the
//! button interrupt, so both live in [`Shared`] cells. Every draw and every PWM
//! update runs with interrupts masked.

use embedded_hal::digital::{OutputPin, PinState};
use fugit::HertzU32;
use heapless::Vec;
use joystick_reactor::{
    Board, BrightnessLevels, ButtonSource, CursorPosition, DisplaySurface, Shared,
};
use rp_pico::hal::{
    I2C,
    gpio::{
        FunctionI2C, FunctionSioInput, FunctionSioOutput, Interrupt, Pin, PullDown, PullUp, bank0,
    },
    pac,
    rom_data,
};
use rtt_target::rprintln;
use ssd1306::prelude::I2CInterface;

use crate::leds::PwmLeds;
use crate::oled::Oled;

/// I2C bus speed for the OLED
pub const I2C_FREQUENCY: HertzU32 = HertzU32::kHz(400);

pub type SdaPin = Pin<bank0::Gpio14, FunctionI2C, PullUp>;
pub type SclPin = Pin<bank0::Gpio15, FunctionI2C, PullUp>;
pub type OledBus = I2C<pac::I2C1, (SdaPin, SclPin)>;
pub type BoardOled = Oled<I2CInterface<OledBus>>;

pub type StatusLedPin = Pin<bank0::Gpio11, FunctionSioOutput, PullDown>;
pub type ToggleButtonPin = Pin<bank0::Gpio5, FunctionSioInput, PullUp>;
pub type ResetButtonPin = Pin<bank0::Gpio6, FunctionSioInput, PullUp>;
pub type JoystickButtonPin = Pin<bank0::Gpio22, FunctionSioInput, PullUp>;

pub static LEDS: Shared<PwmLeds> = Shared::new();
pub static DISPLAY: Shared<BoardOled> = Shared::new();
pub static STATUS_LED: Shared<StatusLedPin> = Shared::new();

/// The three active-low buttons, armed for falling-edge interrupts
pub struct Buttons {
    toggle: ToggleButtonPin,
    joystick: JoystickButtonPin,
    reset: ResetButtonPin,
}

impl Buttons {
    pub fn new(
        mut toggle: ToggleButtonPin,
        mut joystick: JoystickButtonPin,
        mut reset: ResetButtonPin,
    ) -> Self {
        toggle.set_interrupt_enabled(Interrupt::EdgeLow, true);
        joystick.set_interrupt_enabled(Interrupt::EdgeLow, true);
        reset.set_interrupt_enabled(Interrupt::EdgeLow, true);

        Self {
            toggle,
            joystick,
            reset,
        }
    }

    /// Acknowledge and return every button with a pending falling edge
    pub fn take_pending(&mut self) -> Vec<ButtonSource, 3> {
        let mut pending = Vec::new();

        if self.toggle.interrupt_status(Interrupt::EdgeLow) {
            self.toggle.clear_interrupt(Interrupt::EdgeLow);
            let _ = pending.push(ButtonSource::Toggle);
        }
        if self.joystick.interrupt_status(Interrupt::EdgeLow) {
            self.joystick.clear_interrupt(Interrupt::EdgeLow);
            let _ = pending.push(ButtonSource::Joystick);
        }
        if self.reset.interrupt_status(Interrupt::EdgeLow) {
            self.reset.clear_interrupt(Interrupt::EdgeLow);
            let _ = pending.push(ButtonSource::Reset);
        }

        pending
    }
}

/// Stateless handle onto the shared peripherals
///
/// Usable from `main` and from interrupt handlers alike; each call locks only the
/// resource it touches.
pub struct PicoBoard;

impl Board for PicoBoard {
    fn set_brightness(&mut self, levels: BrightnessLevels) {
        LEDS.with(|leds| leds.set_levels(levels));
    }

    fn set_outputs_enabled(&mut self, enabled: bool) {
        LEDS.with(|leds| leds.set_enabled(enabled));
    }

    fn set_status_led(&mut self, on: bool) {
        STATUS_LED.with(|pin| {
            let _ = pin.set_state(PinState::from(on));
        });
    }

    fn with_display(&mut self, draw: impl FnOnce(&mut dyn DisplaySurface)) {
        DISPLAY.with(|oled| draw(oled));
    }

    fn report(&mut self, cursor: CursorPosition) {
        rprintln!("{}", cursor);
    }

    fn enter_bootloader(&mut self) -> ! {
        rprintln!("Rebooting into USB bootloader");
        rom_data::reset_to_usb_boot(0, 0);
        loop {
            cortex_m::asm::nop();
        }
    }
}
