//! Random dataset synthesis
//!
//! Stateless given a random source: [`RandomDatasetGenerator::generate`] is
//! generic over [`rand::Rng`], so the application draws from thread entropy
//! while tests use a seeded [`rand::rngs::StdRng`].

use crate::config::{DensityProfile, SurfaceConfig, ValueConfig};
use crate::error::Result;
use crate::types::{Point, Unit};
use rand::Rng;

/// Uniform integer draw in `[min, max]` inclusive.
///
/// Ceiling-based: the draw is `ceil(r * span)` shifted into range, so only
/// r = 0 lands on the lower bound directly. `max < min` clamps to `min`.
pub fn rand_in_interval<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    if max < min {
        return min;
    }
    let span = (max - min + 1) as f64;
    let offset = (rng.gen::<f64>() * span).ceil() as i64;
    min + offset.max(1) - 1
}

/// Synthesizes datasets sized by a per-unit density profile
#[derive(Debug, Clone)]
pub struct RandomDatasetGenerator {
    pixel_density: DensityProfile,
    percent_density: DensityProfile,
}

impl Default for RandomDatasetGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomDatasetGenerator {
    /// Create a generator with the default density profiles
    pub fn new() -> Self {
        Self {
            pixel_density: DensityProfile::pixel(),
            percent_density: DensityProfile::percent(),
        }
    }

    /// Override the density profile for one unit mode
    pub fn with_density(mut self, unit: Unit, profile: DensityProfile) -> Self {
        match unit {
            Unit::Pixel => self.pixel_density = profile,
            Unit::Percent => self.percent_density = profile,
        }
        self
    }

    /// The density profile used for a unit mode
    pub fn density(&self, unit: Unit) -> DensityProfile {
        match unit {
            Unit::Pixel => self.pixel_density,
            Unit::Percent => self.percent_density,
        }
    }

    /// Draw a fresh dataset for the given surface and value range.
    ///
    /// The point count is a uniform draw between the density bounds scaled by
    /// the surface area. Percent mode converts generated coordinates with
    /// ceiling rounding so the last row and column never collapse onto zero;
    /// live sampling rounds down instead (see
    /// [`CoordinateSpace::convert`](crate::engine::CoordinateSpace::convert)).
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        surface: &SurfaceConfig,
        values: &ValueConfig,
        unit: Unit,
    ) -> Result<Vec<Point>> {
        surface.validate()?;
        values.validate()?;

        let (lo, hi) = self.density(unit).count_bounds(surface.area());
        let count = rand_in_interval(rng, lo, hi).max(0);

        let width = i64::from(surface.width);
        let height = i64::from(surface.height);
        let mut points = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let mut x = rand_in_interval(rng, 0, width - 1);
            let mut y = rand_in_interval(rng, 0, height - 1);
            let value = rand_in_interval(rng, 1, i64::from(values.max_value));

            if unit == Unit::Percent {
                x = (x as f64 * 100.0 / width as f64).ceil() as i64;
                y = (y as f64 * 100.0 / height as f64).ceil() as i64;
            }

            points.push(Point::new(x as i32, y as i32, value as u32));
        }

        tracing::debug!(count = points.len(), unit = %unit, "generated random dataset");
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HeatGenError;
    use crate::types::PERCENT_MAX;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xC0FFEE)
    }

    #[test]
    fn test_rand_in_interval_stays_inclusive() {
        let mut rng = rng();
        for _ in 0..10_000 {
            let v = rand_in_interval(&mut rng, 3, 7);
            assert!((3..=7).contains(&v));
        }
    }

    #[test]
    fn test_rand_in_interval_covers_bounds() {
        let mut rng = rng();
        let mut seen = [false; 5];
        for _ in 0..10_000 {
            seen[(rand_in_interval(&mut rng, 0, 4)) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "not all of [0,4] was drawn: {seen:?}");
    }

    #[test]
    fn test_rand_in_interval_inverted_bounds_clamp_to_min() {
        let mut rng = rng();
        assert_eq!(rand_in_interval(&mut rng, 10, 2), 10);
        assert_eq!(rand_in_interval(&mut rng, 5, 5), 5);
    }

    #[test]
    fn test_generator_bounds_pixel_mode() {
        let mut rng = rng();
        let surface = SurfaceConfig::new(640, 480);
        let values = ValueConfig { value: 1, max_value: 5 };
        let generator = RandomDatasetGenerator::new();

        for _ in 0..20 {
            let points = generator
                .generate(&mut rng, &surface, &values, Unit::Pixel)
                .unwrap();

            let (lo, hi) = DensityProfile::pixel().count_bounds(307_200);
            assert!((lo..=hi).contains(&(points.len() as i64)));
            for p in &points {
                assert!((0..640).contains(&p.x));
                assert!((0..480).contains(&p.y));
                assert!((1..=5).contains(&p.value));
            }
        }
    }

    #[test]
    fn test_generator_percent_mode_range() {
        let mut rng = rng();
        let surface = SurfaceConfig::new(640, 480);
        let values = ValueConfig::default();
        let points = RandomDatasetGenerator::new()
            .generate(&mut rng, &surface, &values, Unit::Percent)
            .unwrap();

        assert!(!points.is_empty());
        for p in &points {
            assert!((0..=PERCENT_MAX).contains(&p.x));
            assert!((0..=PERCENT_MAX).contains(&p.y));
            assert!(p.has_signal());
        }
    }

    #[test]
    fn test_generator_rejects_invalid_surface() {
        let mut rng = rng();
        let err = RandomDatasetGenerator::new()
            .generate(
                &mut rng,
                &SurfaceConfig::new(0, 480),
                &ValueConfig::default(),
                Unit::Pixel,
            )
            .unwrap_err();
        assert!(matches!(err, HeatGenError::InvalidConfig(_)));
    }

    #[test]
    fn test_custom_density_profile() {
        let mut rng = rng();
        let profile = DensityProfile { min: 1e-4, max: 1e-4 };
        let generator = RandomDatasetGenerator::new().with_density(Unit::Pixel, profile);
        let points = generator
            .generate(
                &mut rng,
                &SurfaceConfig::new(1000, 1000),
                &ValueConfig::default(),
                Unit::Pixel,
            )
            .unwrap();
        // min == max pins the count to area * 1e-4 = 100.
        assert_eq!(points.len(), 100);
    }
}
