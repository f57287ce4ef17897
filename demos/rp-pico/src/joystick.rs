use embedded_hal_0_2::adc::OneShot;
use joystick_reactor::{AnalogInput, AnalogSample};
use rp_pico::hal::{
    Adc,
    adc::AdcPin,
    gpio::{FunctionSioInput, Pin, PullNone, bank0},
};

/// Horizontal axis: GPIO27, ADC channel 1
pub type HorizontalPin = AdcPin<Pin<bank0::Gpio27, FunctionSioInput, PullNone>>;

/// Vertical axis: GPIO26, ADC channel 0
pub type VerticalPin = AdcPin<Pin<bank0::Gpio26, FunctionSioInput, PullNone>>;

/// Polled two-axis joystick on the RP2040 ADC
pub struct JoystickAdc {
    adc: Adc,
    horizontal: HorizontalPin,
    vertical: VerticalPin,
    last: AnalogSample,
}

impl JoystickAdc {
    pub fn new(adc: Adc, horizontal: HorizontalPin, vertical: VerticalPin) -> Self {
        Self {
            adc,
            horizontal,
            vertical,
            last: AnalogSample::CENTERED,
        }
    }
}

impl AnalogInput for JoystickAdc {
    /// Reads both channels; a failed conversion repeats the previous value
    fn read(&mut self) -> AnalogSample {
        let x: Option<u16> = self.adc.read(&mut self.horizontal).ok();
        let y: Option<u16> = self.adc.read(&mut self.vertical).ok();

        self.last = AnalogSample::new(x.unwrap_or(self.last.x), y.unwrap_or(self.last.y));
        self.last
    }
}
