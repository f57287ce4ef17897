//! SSD1306 adapter for the reactor's display seam.

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use joystick_reactor::{DisplaySurface, Rect};
use ssd1306::{Ssd1306, mode::BufferedGraphicsMode, prelude::*, size::DisplaySize128x64};

/// I2C address of the panel
pub const OLED_ADDRESS: u8 = 0x3C;

/// Buffered 128x64 SSD1306
///
/// Drawing only touches the RAM frame buffer; `flush` sends it over the bus.
pub struct Oled<DI> {
    display: Ssd1306<DI, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>,
}

impl<DI: WriteOnlyDataCommand> Oled<DI> {
    /// Initialize the panel and blank it
    pub fn new(interface: DI) -> Result<Self, DisplayError> {
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init()?;
        display.clear_buffer();
        display.flush()?;

        Ok(Self { display })
    }
}

fn color(on: bool) -> BinaryColor {
    if on { BinaryColor::On } else { BinaryColor::Off }
}

impl<DI: WriteOnlyDataCommand> DisplaySurface for Oled<DI> {
    fn fill(&mut self, on: bool) {
        let _ = DrawTarget::clear(&mut self.display, color(on));
    }

    fn rect(&mut self, rect: Rect, on: bool, filled: bool) {
        let style = if filled {
            PrimitiveStyle::with_fill(color(on))
        } else {
            PrimitiveStyle::with_stroke(color(on), 1)
        };

        let _ = Rectangle::new(
            Point::new(rect.left, rect.top),
            Size::new(rect.width, rect.height),
        )
        .into_styled(style)
        .draw(&mut self.display);
    }

    fn flush(&mut self) {
        // A failed transfer leaves the previous frame on the panel; the next
        // iteration redraws everything anyway.
        let _ = self.display.flush();
    }
}
