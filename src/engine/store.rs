//! Dataset ownership and the JSON text contract
//!
//! [`DatasetStore`] is the single point of mutation for the ordered point
//! collection. Text exchange is a JSON array of `{"x", "y", "value"}`
//! records in insertion order; parsing is all-or-nothing, so a malformed
//! edit never partially replaces the dataset.

use crate::error::{HeatGenError, Result};
use crate::types::Point;

/// The ordered, mutable point collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetStore {
    points: Vec<Point>,
}

impl DatasetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored points, in insertion order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of stored points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Wholesale swap of the dataset
    pub fn replace(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    /// Append a point at the end
    pub fn append(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Drop every point
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Produce the dataset text.
    ///
    /// Pretty mode uses standard 2-space-indented JSON; compact mode inserts
    /// no whitespace.
    pub fn serialize(&self, pretty: bool) -> Result<String> {
        let text = if pretty {
            serde_json::to_string_pretty(&self.points)
        } else {
            serde_json::to_string(&self.points)
        };
        text.map_err(|e| HeatGenError::Serialization(e.to_string()))
    }

    /// Parse-then-replace from edited text.
    ///
    /// On a parse failure the stored dataset is left untouched, so a single
    /// malformed keystroke never destroys an in-progress edit. Returns the
    /// new point count on success.
    pub fn apply_text(&mut self, text: &str) -> Result<usize> {
        let points = parse_dataset(text)?;
        let count = points.len();
        self.points = points;
        Ok(count)
    }
}

/// Parse dataset text as a JSON array of point records.
///
/// Fails with [`HeatGenError::Parse`] on malformed input or on elements
/// missing required fields or carrying wrong types.
pub fn parse_dataset(text: &str) -> Result<Vec<Point>> {
    Ok(serde_json::from_str(text)?)
}
