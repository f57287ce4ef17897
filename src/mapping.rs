//! Analog-to-output transfer functions.
//!
//! [`PwmMapper`] turns one axis into an LED brightness; [`CoordinateMapper`] turns
//! both axes into the cursor position. Both are pure and allocation free.

use crate::config::{CursorBounds, DeadZone};
use crate::types::{ADC_FULL_SCALE, AnalogSample, BrightnessLevels, CursorPosition, PWM_WRAP};

/// Dead-zone-centered, piecewise-linear brightness law.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmMapper {
    dead_zone: DeadZone,
}

impl Default for PwmMapper {
    fn default() -> Self {
        Self::new(DeadZone::default())
    }
}

impl PwmMapper {
    pub fn new(dead_zone: DeadZone) -> Self {
        Self { dead_zone }
    }

    /// Maps a raw sample to a brightness level in `0..=max_level`, never above `PWM_WRAP`.
    pub fn map(&self, sample: u16) -> u16 {
        let dz = &self.dead_zone;
        let sample = u32::from(sample.min(ADC_FULL_SCALE));
        let center = u32::from(dz.center);

        let level = if sample > u32::from(dz.high) {
            sample.saturating_sub(center) * u32::from(dz.gain)
        } else if sample < u32::from(dz.low) {
            center.saturating_sub(sample) * u32::from(dz.gain)
        } else {
            0
        };

        level.min(u32::from(dz.max_level.min(PWM_WRAP))) as u16
    }

    /// Maps both axes to their LED channels.
    pub fn map_sample(&self, sample: AnalogSample) -> BrightnessLevels {
        BrightnessLevels {
            horizontal: self.map(sample.x),
            vertical: self.map(sample.y),
        }
    }

    pub fn dead_zone(&self) -> &DeadZone {
        &self.dead_zone
    }
}

/// Linear axis-to-pixel mapping with edge snapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoordinateMapper {
    bounds: CursorBounds,
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::new(CursorBounds::default())
    }
}

impl CoordinateMapper {
    pub fn new(bounds: CursorBounds) -> Self {
        Self { bounds }
    }

    /// Maps the horizontal and vertical samples to the cursor's top-left pixel.
    ///
    /// The vertical axis is inverted: a full-scale sample puts the cursor at the top.
    pub fn map(&self, x_sample: u16, y_sample: u16) -> CursorPosition {
        let b = &self.bounds;
        let full_scale = i64::from(b.full_scale.max(1));
        let x_sample = i64::from(x_sample.min(b.full_scale));
        let y_sample = i64::from(y_sample.min(b.full_scale));
        let (x_span, y_span) = (i64::from(b.x_span), i64::from(b.y_span));

        // Widened so that unvalidated bounds cannot overflow.
        let x_raw = x_sample * x_span / full_scale;
        let y_raw = y_span - y_sample * y_span / full_scale;

        CursorPosition {
            x: snap(x_raw, b.low_threshold, b.x_low_snap, b.x_span),
            y: snap(y_raw, b.low_threshold, b.y_low_snap, b.y_span),
        }
    }

    pub fn map_sample(&self, sample: AnalogSample) -> CursorPosition {
        self.map(sample.x, sample.y)
    }

    pub fn bounds(&self) -> &CursorBounds {
        &self.bounds
    }
}

#[inline]
fn snap(raw: i64, threshold: i32, low_snap: i32, max: i32) -> i32 {
    if raw < i64::from(threshold) {
        low_snap
    } else if raw > i64::from(max) {
        max
    } else {
        // threshold <= raw <= max, so it fits
        raw as i32
    }
}
