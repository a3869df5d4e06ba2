//! Configuration for the layout engine.
//!
//! Centralizes the tunable constants of the pipeline with defaults matching
//! the stock memory-layout view. The gap size factor and the visibility floor
//! are kept as separate knobs even though both default to 3.5%.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{LayoutError, Result};

/// Fraction of the total used size given to every synthetic unused region.
pub const DEFAULT_UNUSED_SPACE_FACTOR: f64 = 0.035;

/// Minimum rendered height, in percent, of a region in the main lane.
pub const DEFAULT_MIN_SIZE_PERCENTAGE: f64 = 3.5;

/// Minimum rendered height, in percent, of a region in an overlap lane.
pub const DEFAULT_OVERLAP_MIN_HEIGHT: f64 = 2.0;

/// Zero-padding width for rendered hex addresses.
pub const DEFAULT_ADDRESS_WIDTH: usize = 8;

/// Master configuration for a layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap visual size as a fraction of the sum of region sizes.
    pub unused_space_factor: f64,
    /// Main-lane floor in percent; smaller regions are clamped up to it.
    pub min_size_percentage: f64,
    /// Overlap-lane render minimum in percent.
    pub overlap_min_height: f64,
    /// Hex digits to pad rendered addresses to.
    pub address_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            unused_space_factor: DEFAULT_UNUSED_SPACE_FACTOR,
            min_size_percentage: DEFAULT_MIN_SIZE_PERCENTAGE,
            overlap_min_height: DEFAULT_OVERLAP_MIN_HEIGHT,
            address_width: DEFAULT_ADDRESS_WIDTH,
        }
    }
}

impl LayoutConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Check that every value is within the range the pipeline can use.
    pub fn validate(&self) -> Result<()> {
        if !(self.unused_space_factor > 0.0 && self.unused_space_factor < 1.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "unused_space_factor must be in (0, 1), got {}",
                self.unused_space_factor
            )));
        }
        if !(self.min_size_percentage > 0.0 && self.min_size_percentage < 100.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "min_size_percentage must be in (0, 100), got {}",
                self.min_size_percentage
            )));
        }
        if !(0.0..=100.0).contains(&self.overlap_min_height) {
            return Err(LayoutError::InvalidConfig(format!(
                "overlap_min_height must be in [0, 100], got {}",
                self.overlap_min_height
            )));
        }
        if self.address_width == 0 || self.address_width > 16 {
            return Err(LayoutError::InvalidConfig(format!(
                "address_width must be in [1, 16], got {}",
                self.address_width
            )));
        }
        Ok(())
    }
}
