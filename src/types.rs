//! Core data types for HeatGen-RS
//!
//! This module contains the fundamental data structures shared by the
//! sampling engine and the frontend.
//!
//! # Main Types
//!
//! - [`Point`] - A weighted 2-D coordinate in the dataset
//! - [`Unit`] - The coordinate system a point is expressed in
//! - [`SamplingState`] - The recorder's arm/pause lifecycle
//!
//! # Value Semantics
//!
//! A persisted point always carries `value >= 1`. The recorder's scratch
//! sample starts at `value == 0`, which marks "no signal yet" and is filtered
//! out on every tick; see [`SampleRecorder`](crate::engine::SampleRecorder).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed period of the sampling tick that commits pointer samples
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(100);

/// Upper bound for a percent-mode coordinate
pub const PERCENT_MAX: i32 = 100;

/// A weighted 2-D coordinate in the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub value: u32,
}

impl Point {
    /// Create a new point
    pub fn new(x: i32, y: i32, value: u32) -> Self {
        Self { x, y, value }
    }

    /// Whether this point carries a recordable signal (`value != 0`)
    pub fn has_signal(&self) -> bool {
        self.value != 0
    }
}

/// The coordinate system a point is expressed in
///
/// Percent-mode points have x,y in `[0, 100]`; pixel-mode points lie within
/// the surface dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Absolute pixel offsets within the surface
    #[default]
    Pixel,
    /// Percentage of the surface dimensions
    Percent,
}

impl Unit {
    /// Get display name for this unit
    pub fn display_name(&self) -> &'static str {
        match self {
            Unit::Pixel => "Pixels",
            Unit::Percent => "Percent",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The recorder's two-state sampling lifecycle, driven by pointer enter/leave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingState {
    /// Not sampling; pointer events and ticks are dropped
    #[default]
    Idle,
    /// Sampling; pointer moves update the scratch sample, ticks commit it
    Armed,
}

impl SamplingState {
    /// Check if the recorder is armed
    pub fn is_armed(&self) -> bool {
        matches!(self, SamplingState::Armed)
    }
}

impl std::fmt::Display for SamplingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SamplingState::Idle => write!(f, "Idle"),
            SamplingState::Armed => write!(f, "Armed"),
        }
    }
}
