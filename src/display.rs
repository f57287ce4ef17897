//! Frame geometry and the display seam.
//!
//! The core never touches pixels. It describes what to draw as [`Rect`]s and hands
//! them to a [`DisplaySurface`], which the board implements on top of its display
//! driver.

use crate::types::CursorPosition;

/// Panel width in pixels.
pub const DISPLAY_WIDTH: u32 = 128;

/// Panel height in pixels.
pub const DISPLAY_HEIGHT: u32 = 64;

/// Side length of the square cursor marker.
pub const CURSOR_SIZE: u32 = 8;

/// Outline drawn around the drawable area every frame.
pub const FRAME_BORDER: Rect = Rect::new(3, 3, 122, 60);

/// Outline drawn when the joystick button is pressed.
pub const STATUS_BORDER: Rect = Rect::new(5, 5, 118, 56);

/// Axis-aligned rectangle in panel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// The cursor marker with its top-left corner at `position`.
    pub const fn cursor(position: CursorPosition) -> Self {
        Self::new(position.x, position.y, CURSOR_SIZE, CURSOR_SIZE)
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.left + self.width as i32
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.top + self.height as i32
    }

    /// Whether the rectangle lies entirely on a `width` x `height` panel.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left >= 0
            && self.top >= 0
            && self.right() <= width as i32
            && self.bottom() <= height as i32
    }
}

/// Minimal drawing interface of a monochrome display with a RAM frame buffer.
///
/// Implementations should handle bus errors internally; these methods cannot fail.
pub trait DisplaySurface {
    /// Sets every pixel of the frame buffer to `on`.
    fn fill(&mut self, on: bool);

    /// Draws `rect` in color `on`, either as a one-pixel outline or filled.
    fn rect(&mut self, rect: Rect, on: bool, filled: bool);

    /// Pushes the frame buffer to the panel.
    fn flush(&mut self);
}

/// Everything drawn in one sampling iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayFrame {
    pub border: Rect,
    pub cursor: Rect,
}

impl DisplayFrame {
    /// Frame with the standard border and the cursor at `position`.
    pub fn new(position: CursorPosition) -> Self {
        Self {
            border: FRAME_BORDER,
            cursor: Rect::cursor(position),
        }
    }

    /// Clears the buffer, draws border and cursor, and flushes.
    pub fn render<D: DisplaySurface + ?Sized>(&self, surface: &mut D) {
        surface.fill(false);
        surface.rect(self.border, true, false);
        surface.rect(self.cursor, true, true);
        surface.flush();
    }
}

/// Draws the status border on top of whatever is in the buffer and flushes.
///
/// The outline is the same regardless of the status indicator's state.
pub fn draw_status_border<D: DisplaySurface + ?Sized>(surface: &mut D) {
    surface.rect(STATUS_BORDER, true, false);
    surface.flush();
}

/// Blanks the panel.
pub fn clear<D: DisplaySurface + ?Sized>(surface: &mut D) {
    surface.fill(false);
    surface.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borders_fit_on_panel() {
        assert!(FRAME_BORDER.fits_within(DISPLAY_WIDTH, DISPLAY_HEIGHT));
        assert!(STATUS_BORDER.fits_within(DISPLAY_WIDTH, DISPLAY_HEIGHT));
    }

    #[test]
    fn extreme_cursors_fit_on_panel() {
        for (x, y) in [(0, 4), (120, 56), (0, 56), (120, 4)] {
            let cursor = Rect::cursor(CursorPosition::new(x, y));
            assert!(cursor.fits_within(DISPLAY_WIDTH, DISPLAY_HEIGHT));
        }
    }
}
