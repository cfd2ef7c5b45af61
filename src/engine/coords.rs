//! Conversion between raw surface offsets and the configured point unit

use crate::config::SurfaceConfig;
use crate::error::{HeatGenError, Result};
use crate::types::Unit;

/// Pure conversion between raw surface offsets and the configured unit.
///
/// Holds no state beyond its configuration; rebinding after a resize or unit
/// change means constructing a fresh space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateSpace {
    width: u32,
    height: u32,
    unit: Unit,
}

impl CoordinateSpace {
    /// Bind a coordinate space to validated surface dimensions
    pub fn new(surface: &SurfaceConfig, unit: Unit) -> Result<Self> {
        surface.validate()?;
        Ok(Self {
            width: surface.width,
            height: surface.height,
            unit,
        })
    }

    /// The bound unit
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// The bound surface width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The bound surface height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Convert a raw offset within the surface into the configured unit.
    ///
    /// Pixel mode floors the raw offsets; percent mode floors
    /// `raw * 100 / dimension`. A zero dimension is rejected with
    /// [`HeatGenError::DivisionGuard`] instead of producing an undefined
    /// quotient.
    pub fn convert(&self, raw_x: f64, raw_y: f64) -> Result<(i32, i32)> {
        if self.width == 0 || self.height == 0 {
            return Err(HeatGenError::DivisionGuard(format!(
                "conversion against {}x{} surface",
                self.width, self.height
            )));
        }

        Ok(match self.unit {
            Unit::Pixel => (raw_x.floor() as i32, raw_y.floor() as i32),
            Unit::Percent => (
                (raw_x * 100.0 / f64::from(self.width)).floor() as i32,
                (raw_y * 100.0 / f64::from(self.height)).floor() as i32,
            ),
        })
    }
}
