//! Eraser configuration: set once, validated against the board before painting.

use image::Rgba;

pub const DEFAULT_BLOCK_SIZE: u32 = 20;
pub const DEFAULT_SOFTNESS: f32 = 0.0;
pub const DEFAULT_COLOR: &str = "white";

/// Errors produced while building or validating an [`EraserConfig`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Block size must be a positive number of pixels.
    #[error("block size must be positive")]
    ZeroBlockSize,

    /// The block does not fit on the surface it is meant to erase.
    #[error("block size {size} exceeds surface {width}x{height}")]
    BlockExceedsSurface { size: u32, width: u32, height: u32 },

    /// Softness outside [0, 1] (or NaN).
    #[error("softness {0} is outside [0, 1]")]
    SoftnessOutOfRange(f32),

    /// An environment value could not be parsed.
    #[error("invalid {var}: '{value}'")]
    Parse { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EraserConfig {
    /// Side of the square block stamped per contact, in texture pixels.
    pub block_size: u32,
    /// Fraction of the existing pixel kept by a stamp. 0 = hard erase.
    pub softness: f32,
    /// Color the board is erased towards.
    pub color: Rgba<u8>,
}

impl Default for EraserConfig {
    fn default() -> Self {
        Self { block_size: DEFAULT_BLOCK_SIZE, softness: DEFAULT_SOFTNESS, color: Rgba([255, 255, 255, 255]) }
    }
}

impl EraserConfig {
    /// Build typed eraser config from environment variables.
    ///
    /// Optional:
    /// - `ERASER_SIZE`: block side in pixels, default 20
    /// - `ERASER_SOFTNESS`: 0 (hard erase, default) up to 1
    /// - `ERASER_COLOR`: any CSS color, default `white`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EraserConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let block_size = match lookup("ERASER_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::Parse { var: "ERASER_SIZE", value: raw.clone() })?,
            None => DEFAULT_BLOCK_SIZE,
        };
        let softness = match lookup("ERASER_SOFTNESS") {
            Some(raw) => raw
                .trim()
                .parse::<f32>()
                .map_err(|_| ConfigError::Parse { var: "ERASER_SOFTNESS", value: raw.clone() })?,
            None => DEFAULT_SOFTNESS,
        };
        let color = parse_color(lookup("ERASER_COLOR").as_deref().unwrap_or(DEFAULT_COLOR))?;

        let config = Self { block_size, softness, color };
        config.check_ranges()?;
        Ok(config)
    }

    /// 0 or negative softness overwrites; anything above blends.
    pub fn is_hard(&self) -> bool {
        self.softness <= 0.0
    }

    /// Reject configurations the painter must never run with on a `width`x`height` surface.
    pub fn validate(&self, width: u32, height: u32) -> Result<(), ConfigError> {
        self.check_ranges()?;
        if self.block_size > width || self.block_size > height {
            return Err(ConfigError::BlockExceedsSurface { size: self.block_size, width, height });
        }
        Ok(())
    }

    fn check_ranges(&self) -> Result<(), ConfigError> {
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        if !(0.0..=1.0).contains(&self.softness) {
            return Err(ConfigError::SoftnessOutOfRange(self.softness));
        }
        Ok(())
    }
}

fn parse_color(raw: &str) -> Result<Rgba<u8>, ConfigError> {
    csscolorparser::parse(raw.trim())
        .map(|c| Rgba(c.to_rgba8()))
        .map_err(|_| ConfigError::Parse { var: "ERASER_COLOR", value: raw.to_string() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
