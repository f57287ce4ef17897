//! Tunable parameters with validated defaults.
//!
//! [`ReactorConfig::default`] reproduces the device's stock behavior. Use
//! [`ReactorConfig::builder`] to adjust individual values; the builder checks the
//! combination before handing out a config.

use crate::display::{CURSOR_SIZE, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::types::{ADC_FULL_SCALE, PWM_WRAP};

/// Minimum interval between two accepted edges on one button, in microseconds.
pub const DEFAULT_DEBOUNCE_MICROS: u64 = 200_000;

/// Sampling loop period in milliseconds.
pub const DEFAULT_SAMPLE_PERIOD_MS: u32 = 100;

/// Brightness law around the joystick rest position.
///
/// Samples strictly above `high` map to `(sample - center) * gain`, samples strictly
/// below `low` map to `(center - sample) * gain`, everything in `low..=high` is dark.
/// Results are clamped to `max_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeadZone {
    pub center: u16,
    pub low: u16,
    pub high: u16,
    pub gain: u16,
    pub max_level: u16,
}

impl Default for DeadZone {
    fn default() -> Self {
        Self {
            center: 2048,
            low: 1900,
            high: 2100,
            gain: 2,
            max_level: PWM_WRAP,
        }
    }
}

/// Scaling and edge snapping for the cursor marker.
///
/// The lower snap targets differ per axis (`0` horizontally, `4` vertically); that
/// asymmetry is how the device has always drawn the cursor against the border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorBounds {
    /// Raw sample value mapped to the far edge.
    pub full_scale: u16,
    /// Horizontal travel in pixels; also the right-hand clamp.
    pub x_span: i32,
    /// Vertical travel in pixels; also the bottom clamp.
    pub y_span: i32,
    /// Positions below this snap to `x_low_snap` / `y_low_snap`.
    pub low_threshold: i32,
    pub x_low_snap: i32,
    pub y_low_snap: i32,
}

impl Default for CursorBounds {
    fn default() -> Self {
        Self {
            full_scale: ADC_FULL_SCALE,
            x_span: 120,
            y_span: 56,
            low_threshold: 8,
            x_low_snap: 0,
            y_low_snap: 4,
        }
    }
}

/// Complete configuration of the reactive core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReactorConfig {
    pub debounce_micros: u64,
    pub sample_period_ms: u32,
    pub dead_zone: DeadZone,
    pub cursor: CursorBounds,
}

impl Default for ReactorConfig {
    fn default() -> Self {
        Self {
            debounce_micros: DEFAULT_DEBOUNCE_MICROS,
            sample_period_ms: DEFAULT_SAMPLE_PERIOD_MS,
            dead_zone: DeadZone::default(),
            cursor: CursorBounds::default(),
        }
    }
}

impl ReactorConfig {
    /// Starts a builder seeded with the default values.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Checks the invariants the mappers rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dz = &self.dead_zone;
        if dz.low > dz.high {
            return Err(ConfigError::InvertedDeadZone);
        }
        if dz.center < dz.low || dz.center > dz.high {
            return Err(ConfigError::CenterOutsideDeadZone);
        }
        if dz.gain == 0 {
            return Err(ConfigError::ZeroGain);
        }
        if dz.max_level > PWM_WRAP {
            return Err(ConfigError::LevelAboveWrap);
        }
        if self.sample_period_ms == 0 {
            return Err(ConfigError::ZeroSamplePeriod);
        }
        let c = &self.cursor;
        if c.full_scale == 0 || c.x_span <= 0 || c.y_span <= 0 {
            return Err(ConfigError::EmptyCursorRange);
        }
        // The cursor marker must stay on the panel at the far edges.
        let max_x = (DISPLAY_WIDTH - CURSOR_SIZE) as i32;
        let max_y = (DISPLAY_HEIGHT - CURSOR_SIZE) as i32;
        if c.x_span > max_x || c.y_span > max_y {
            return Err(ConfigError::CursorOffPanel);
        }
        Ok(())
    }
}

/// Builder for [`ReactorConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: ReactorConfig,
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            config: ReactorConfig::default(),
        }
    }

    /// Sets the debounce interval for the toggle and joystick buttons.
    pub fn debounce_micros(mut self, micros: u64) -> Self {
        self.config.debounce_micros = micros;
        self
    }

    /// Sets the sampling loop period.
    pub fn sample_period_ms(mut self, millis: u32) -> Self {
        self.config.sample_period_ms = millis;
        self
    }

    /// Replaces the brightness dead zone.
    pub fn dead_zone(mut self, dead_zone: DeadZone) -> Self {
        self.config.dead_zone = dead_zone;
        self
    }

    /// Replaces the cursor bounds.
    pub fn cursor(mut self, cursor: CursorBounds) -> Self {
        self.config.cursor = cursor;
        self
    }

    /// Validates and returns the config.
    pub fn build(self) -> Result<ReactorConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Dead zone lower edge is above its upper edge.
    InvertedDeadZone,

    /// Rest position is not inside the dead zone.
    CenterOutsideDeadZone,

    /// Brightness gain of zero would keep the LEDs dark.
    ZeroGain,

    /// Sampling loop would never wait.
    ZeroSamplePeriod,

    /// Cursor scale or travel is zero.
    EmptyCursorRange,

    /// Brightness ceiling exceeds the PWM wrap value.
    LevelAboveWrap,

    /// Cursor travel would push the marker past the panel edge.
    CursorOffPanel,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvertedDeadZone => {
                write!(f, "dead zone lower edge must not exceed its upper edge")
            }
            ConfigError::CenterOutsideDeadZone => {
                write!(f, "dead zone must contain the rest position")
            }
            ConfigError::ZeroGain => write!(f, "brightness gain must be non-zero"),
            ConfigError::ZeroSamplePeriod => write!(f, "sample period must be non-zero"),
            ConfigError::EmptyCursorRange => {
                write!(f, "cursor full scale and travel must be positive")
            }
            ConfigError::LevelAboveWrap => {
                write!(f, "brightness ceiling must not exceed the PWM wrap value")
            }
            ConfigError::CursorOffPanel => write!(f, "cursor travel must fit on the panel"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
