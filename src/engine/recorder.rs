//! Live pointer-sample recorder
//!
//! A two-state machine driven by pointer enter/leave, with a private scratch
//! sample decoupling the pointer-move rate (potentially hundreds of events per
//! second) from the 10 Hz commit rate: only the last position before each
//! tick boundary is durably recorded.

use crate::engine::coords::CoordinateSpace;
use crate::types::{Point, SamplingState};

/// Arm/pause state machine that samples the current pointer position
#[derive(Debug, Clone)]
pub struct SampleRecorder {
    state: SamplingState,
    /// Scratch sample; `value == 0` means no signal yet
    current: Point,
    coords: CoordinateSpace,
    /// Value stamped on captured samples
    value: u32,
}

impl SampleRecorder {
    /// Create an idle recorder bound to a coordinate space
    pub fn new(coords: CoordinateSpace, value: u32) -> Self {
        Self {
            state: SamplingState::Idle,
            current: Point::default(),
            coords,
            value,
        }
    }

    /// Current sampling state
    pub fn state(&self) -> SamplingState {
        self.state
    }

    /// Check if armed
    pub fn is_armed(&self) -> bool {
        self.state.is_armed()
    }

    /// The scratch sample as last written by a pointer move
    pub fn current_sample(&self) -> Point {
        self.current
    }

    /// The bound coordinate space
    pub fn coords(&self) -> &CoordinateSpace {
        &self.coords
    }

    /// The value stamped on captured samples
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Arm sampling; idempotent
    pub fn on_pointer_enter(&mut self) {
        if self.state.is_armed() {
            return;
        }
        self.state = SamplingState::Armed;
        tracing::trace!("sampling armed");
    }

    /// Pause sampling; idempotent
    pub fn on_pointer_leave(&mut self) {
        if !self.state.is_armed() {
            return;
        }
        self.state = SamplingState::Idle;
        tracing::trace!("sampling paused");
    }

    /// Overwrite the scratch sample from a raw pointer offset.
    ///
    /// Dropped while idle. Never mutates the dataset. A failed conversion is
    /// a contract violation (config validation keeps zero dimensions out);
    /// the previous sample is left unchanged.
    pub fn on_pointer_move(&mut self, raw_x: f64, raw_y: f64) {
        if !self.state.is_armed() {
            return;
        }

        match self.coords.convert(raw_x, raw_y) {
            Ok((x, y)) => self.current = Point::new(x, y, self.value),
            Err(e) => {
                debug_assert!(false, "coordinate conversion failed: {e}");
                tracing::error!("coordinate conversion failed: {e}");
            }
        }
    }

    /// Tick handler: the sample to commit, if armed and carrying a signal.
    ///
    /// The scratch is not cleared; a stationary pointer repeats on every tick
    /// until the next move or pause. Dropped while idle.
    pub fn on_tick(&self) -> Option<Point> {
        if !self.state.is_armed() || !self.current.has_signal() {
            return None;
        }
        Some(self.current)
    }

    /// Swap the coordinate space after a resize or unit change.
    ///
    /// Clears the scratch so a sample computed against the old dimensions is
    /// never committed. Armed/Idle state is untouched.
    pub fn rebind(&mut self, coords: CoordinateSpace) {
        self.coords = coords;
        self.current = Point::default();
    }

    /// Update the value stamped on subsequent samples
    pub fn set_value(&mut self, value: u32) {
        self.value = value;
    }
}
