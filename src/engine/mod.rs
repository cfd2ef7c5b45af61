//! Data-generation and sampling engine
//!
//! The engine owns everything with real invariants: coordinate conversion,
//! random dataset synthesis, the live pointer-sample recorder, the dataset
//! store with its JSON text contract, and the controller that keeps
//! configuration changes consistent across them.
//!
//! # Control Flow
//!
//! Pointer-enter arms the recorder; pointer-move updates only the scratch
//! current sample via [`CoordinateSpace`]; a fixed-period tick, while armed,
//! commits the scratch sample into the [`DatasetStore`] if it carries a
//! signal; pointer-leave pauses. [`RandomDatasetGenerator`] output and manual
//! JSON edits replace the store's contents wholesale, bypassing the recorder.
//!
//! All mutation happens on the UI thread; the [`TickSource`] channel only
//! carries timestamps, so the "last position wins" rate-limiting contract
//! holds without locking.

pub mod controller;
pub mod coords;
pub mod generator;
pub mod recorder;
pub mod store;
pub mod tick;

pub use controller::Controller;
pub use coords::CoordinateSpace;
pub use generator::{rand_in_interval, RandomDatasetGenerator};
pub use recorder::SampleRecorder;
pub use store::{parse_dataset, DatasetStore};
pub use tick::TickSource;
