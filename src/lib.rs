//! # HeatGen-RS: Interactive Heatmap Dataset Generator
//!
//! A desktop tool for producing, inspecting, and editing a synthetic "heat"
//! dataset — an ordered collection of weighted 2-D points — by random
//! synthesis or by live recording of pointer movement over a bounded
//! surface, exchanged as JSON text.
//!
//! ## Architecture
//!
//! - **Engine**: the data-generation and sampling core — coordinate
//!   conversion, random synthesis, the arm/pause sample recorder, the
//!   dataset store with its JSON contract, and the orchestrating controller
//! - **Frontend**: renders the UI using eframe/egui; a thin collaborator
//!   that routes pointer and form events into the engine
//! - **Tick**: a cancellable crossbeam tick channel drives the 100 ms
//!   sampling cadence; all engine mutation stays on the UI thread
//!
//! ## Example
//!
//! ```ignore
//! use heatgen_rs::{config::AppConfig, engine::Controller, frontend::HeatGenApp};
//!
//! fn main() -> eframe::Result<()> {
//!     let controller = Controller::new(AppConfig::default()).expect("default config is valid");
//!
//!     eframe::run_native(
//!         "HeatGen",
//!         eframe::NativeOptions::default(),
//!         Box::new(|cc| Ok(Box::new(HeatGenApp::new(cc, controller)))),
//!     )
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod frontend;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, DensityProfile, SurfaceConfig, ValueConfig};
pub use engine::{
    Controller, CoordinateSpace, DatasetStore, RandomDatasetGenerator, SampleRecorder, TickSource,
};
pub use error::{HeatGenError, Result};
pub use frontend::HeatGenApp;
pub use types::{Point, SamplingState, Unit};
