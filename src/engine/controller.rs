//! Orchestration of configuration changes against the engine components
//!
//! The [`Controller`] owns the configuration, dataset store, recorder,
//! generator, tick source, and random source; every UI event routes through
//! it so resets stay consistent. Recoverable failures (rejected config
//! edits, malformed dataset text) are logged and surfaced as `Result`s with
//! the prior state left in effect; nothing in here is fatal.

use crate::config::{AppConfig, SurfaceConfig};
use crate::engine::coords::CoordinateSpace;
use crate::engine::generator::RandomDatasetGenerator;
use crate::engine::recorder::SampleRecorder;
use crate::engine::store::DatasetStore;
use crate::engine::tick::TickSource;
use crate::error::{HeatGenError, Result};
use crate::types::{SamplingState, Unit};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Mediates pointer events, the sampling tick, and configuration edits
pub struct Controller {
    config: AppConfig,
    store: DatasetStore,
    recorder: SampleRecorder,
    generator: RandomDatasetGenerator,
    ticks: TickSource,
    rng: StdRng,
}

impl Controller {
    /// Build a controller from a validated configuration
    pub fn new(config: AppConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Build with a caller-supplied random source (seeded in tests)
    pub fn with_rng(config: AppConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        let coords = CoordinateSpace::new(&config.surface, config.unit)?;
        let recorder = SampleRecorder::new(coords, config.value.value);

        Ok(Self {
            config,
            store: DatasetStore::new(),
            recorder,
            generator: RandomDatasetGenerator::new(),
            ticks: TickSource::new(),
            rng,
        })
    }

    /// The active configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The dataset store
    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// The recorder
    pub fn recorder(&self) -> &SampleRecorder {
        &self.recorder
    }

    /// The recorder's current state
    pub fn sampling_state(&self) -> SamplingState {
        self.recorder.state()
    }

    // === Pointer events ===

    /// Pointer entered the surface: arm the recorder
    pub fn pointer_entered(&mut self) {
        self.recorder.on_pointer_enter();
    }

    /// Pointer left the surface: pause the recorder
    pub fn pointer_left(&mut self) {
        self.recorder.on_pointer_leave();
    }

    /// Pointer moved over the surface, offsets relative to its origin
    pub fn pointer_moved(&mut self, raw_x: f64, raw_y: f64) {
        self.recorder.on_pointer_move(raw_x, raw_y);
    }

    // === Tick handling ===

    /// Drain the tick source, committing one sample per fired tick
    pub fn poll(&mut self) {
        for _ in 0..self.ticks.drain() {
            self.handle_tick();
        }
    }

    /// Commit the current scratch sample, if armed and carrying a signal
    pub fn handle_tick(&mut self) {
        if let Some(point) = self.recorder.on_tick() {
            self.store.append(point);
            tracing::trace!(x = point.x, y = point.y, value = point.value, "sample committed");
        }
    }

    // === Configuration edits ===

    /// Resize the surface.
    ///
    /// The recorder is paused and the tick source detached around the rebind
    /// so no in-flight sample is committed against stale dimensions; the
    /// prior Armed/Idle state is restored afterwards. Invalid sizes are
    /// rejected with the prior configuration left in effect.
    pub fn set_surface_size(&mut self, width: u32, height: u32) -> Result<()> {
        let surface = SurfaceConfig::new(width, height);
        surface.validate()?;

        let prior = self.recorder.state();
        self.recorder.on_pointer_leave();
        self.ticks.detach();

        self.config.surface = surface;
        let coords = CoordinateSpace::new(&self.config.surface, self.config.unit)?;
        self.recorder.rebind(coords);

        self.ticks.attach();
        if prior.is_armed() {
            self.recorder.on_pointer_enter();
        }

        tracing::debug!(width, height, "surface resized");
        Ok(())
    }

    /// Switch the unit for subsequent generation and recording.
    ///
    /// Existing dataset points are left as-is; a unit toggle is not a
    /// dataset transform.
    pub fn set_unit(&mut self, unit: Unit) -> Result<()> {
        if unit == self.config.unit {
            return Ok(());
        }
        self.config.unit = unit;
        let coords = CoordinateSpace::new(&self.config.surface, unit)?;
        self.recorder.rebind(coords);
        tracing::debug!(unit = %unit, "unit switched");
        Ok(())
    }

    /// Set the value stamped on recorded samples; must stay in
    /// `[1, max_value]`
    pub fn set_value(&mut self, value: u32) -> Result<()> {
        let mut values = self.config.value;
        values.value = value;
        values.validate()?;

        self.config.value = values;
        self.recorder.set_value(value);
        Ok(())
    }

    /// Set the random value ceiling; the sample value is clamped down if the
    /// new ceiling undercuts it
    pub fn set_max_value(&mut self, max_value: u32) -> Result<()> {
        if max_value == 0 {
            return Err(HeatGenError::InvalidConfig(
                "max value must be at least 1".to_string(),
            ));
        }

        self.config.value.max_value = max_value;
        if self.config.value.value > max_value {
            self.config.value.value = max_value;
            self.recorder.set_value(max_value);
        }
        Ok(())
    }

    /// Toggle pretty vs compact dataset serialization
    pub fn set_pretty(&mut self, pretty: bool) {
        self.config.pretty = pretty;
    }

    // === Dataset operations ===

    /// Replace the dataset with an empty one
    pub fn reset(&mut self) {
        self.store.clear();
        tracing::debug!("dataset reset");
    }

    /// Replace the dataset with a freshly synthesized one
    pub fn randomize(&mut self) -> Result<()> {
        let points = self.generator.generate(
            &mut self.rng,
            &self.config.surface,
            &self.config.value,
            self.config.unit,
        )?;
        self.store.replace(points);
        Ok(())
    }

    /// The dataset text in the configured format
    pub fn serialized(&self) -> Result<String> {
        self.store.serialize(self.config.pretty)
    }

    /// Apply an edited dataset text.
    ///
    /// A failed parse leaves the dataset untouched; the error is logged and
    /// returned for the caller to surface inline.
    pub fn apply_text_edit(&mut self, text: &str) -> Result<usize> {
        match self.store.apply_text(text) {
            Ok(count) => {
                tracing::debug!(count, "dataset replaced from text edit");
                Ok(count)
            }
            Err(e) => {
                tracing::warn!("rejected dataset edit: {e}");
                Err(e)
            }
        }
    }

    /// Release the tick source and pause the recorder.
    ///
    /// Called on app shutdown; dropping the controller has the same effect.
    pub fn detach(&mut self) {
        self.ticks.detach();
        self.recorder.on_pointer_leave();
    }

    #[cfg(test)]
    pub(crate) fn append_for_test(&mut self, point: crate::types::Point) {
        self.store.append(point);
    }
}
