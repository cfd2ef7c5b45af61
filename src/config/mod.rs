//! Configuration module for HeatGen-RS
//!
//! This module holds the typed configuration consumed by the engine:
//!
//! - [`SurfaceConfig`] - Bounded surface dimensions in pixels
//! - [`ValueConfig`] - The value stamped on recorded samples and the random
//!   value ceiling
//! - [`DensityProfile`] - Area-fraction bounds sizing a random dataset
//! - [`AppConfig`] - The complete configuration surface edited by the UI
//!
//! Every type validates itself with [`InvalidConfig`](crate::error::HeatGenError::InvalidConfig)
//! before the engine acts on it; a rejected edit leaves the prior
//! configuration in effect.

use crate::error::{HeatGenError, Result};
use crate::types::Unit;
use serde::{Deserialize, Serialize};

/// Default surface width in pixels
pub const DEFAULT_SURFACE_WIDTH: u32 = 640;

/// Default surface height in pixels
pub const DEFAULT_SURFACE_HEIGHT: u32 = 480;

/// Largest accepted surface dimension
pub const MAX_SURFACE_DIM: u32 = 4096;

/// Default value stamped on recorded samples
pub const DEFAULT_SAMPLE_VALUE: u32 = 1;

/// Default ceiling for randomly drawn values
pub const DEFAULT_MAX_VALUE: u32 = 5;

/// Default lower density bound, shared by both unit modes
pub const DENSITY_MIN: f64 = 1e-7;

/// Default upper density bound in pixel mode
pub const PIXEL_DENSITY_MAX: f64 = 1e-3;

/// Default upper density bound in percent mode
pub const PERCENT_DENSITY_MAX: f64 = 5e-3;

/// Bounded surface dimensions, always in pixel units regardless of the
/// point unit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
        }
    }
}

impl SurfaceConfig {
    /// Create a new surface configuration
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reject zero dimensions
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(HeatGenError::InvalidConfig(format!(
                "surface dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Surface area in pixels
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// The value assigned to recorder-captured points and the upper bound for
/// randomly synthesized ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueConfig {
    /// Magnitude stamped on recorded samples, in `[1, max_value]`
    pub value: u32,
    /// Ceiling for randomly drawn values, at least 1
    pub max_value: u32,
}

impl Default for ValueConfig {
    fn default() -> Self {
        Self {
            value: DEFAULT_SAMPLE_VALUE,
            max_value: DEFAULT_MAX_VALUE,
        }
    }
}

impl ValueConfig {
    /// Reject values outside `[1, max_value]`
    pub fn validate(&self) -> Result<()> {
        if self.max_value == 0 {
            return Err(HeatGenError::InvalidConfig(
                "max value must be at least 1".to_string(),
            ));
        }
        if self.value == 0 || self.value > self.max_value {
            return Err(HeatGenError::InvalidConfig(format!(
                "value must be in [1, {}], got {}",
                self.max_value, self.value
            )));
        }
        Ok(())
    }
}

/// Area-fraction bounds used to size a randomly generated dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityProfile {
    pub min: f64,
    pub max: f64,
}

impl DensityProfile {
    /// Default profile for pixel-mode generation
    pub fn pixel() -> Self {
        Self {
            min: DENSITY_MIN,
            max: PIXEL_DENSITY_MAX,
        }
    }

    /// Default profile for percent-mode generation; a higher ceiling since
    /// percent coordinates collapse many pixels onto one cell
    pub fn percent() -> Self {
        Self {
            min: DENSITY_MIN,
            max: PERCENT_DENSITY_MAX,
        }
    }

    /// Inclusive point-count bounds for a surface area:
    /// `(ceil(area * min), floor(area * max))`
    pub fn count_bounds(&self, area: u64) -> (i64, i64) {
        let lo = (area as f64 * self.min).ceil() as i64;
        let hi = (area as f64 * self.max).floor() as i64;
        (lo, hi)
    }
}

/// The complete configuration surface edited by the controls panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub surface: SurfaceConfig,
    pub value: ValueConfig,
    pub unit: Unit,
    /// Pretty (2-space indented) vs compact dataset serialization
    pub pretty: bool,
}

impl AppConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.surface.validate()?;
        self.value.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_surface_rejects_zero_dimension() {
        assert!(SurfaceConfig::new(0, 480).validate().is_err());
        assert!(SurfaceConfig::new(640, 0).validate().is_err());
        assert!(SurfaceConfig::new(640, 480).validate().is_ok());
    }

    #[test]
    fn test_value_config_bounds() {
        assert!(ValueConfig { value: 0, max_value: 5 }.validate().is_err());
        assert!(ValueConfig { value: 6, max_value: 5 }.validate().is_err());
        assert!(ValueConfig { value: 5, max_value: 5 }.validate().is_ok());
        assert!(ValueConfig { value: 1, max_value: 0 }.validate().is_err());
    }

    #[test]
    fn test_density_count_bounds() {
        // 640x480 with the default pixel profile, per the generator contract.
        let (lo, hi) = DensityProfile::pixel().count_bounds(307_200);
        assert_eq!(lo, 1); // ceil(307200 * 1e-7) = ceil(0.03072)
        assert_eq!(hi, 307); // floor(307200 * 1e-3) = floor(307.2)
    }

    #[test]
    fn test_percent_profile_has_higher_ceiling() {
        assert!(DensityProfile::percent().max > DensityProfile::pixel().max);
    }
}
