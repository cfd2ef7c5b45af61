//! Shared helpers for integration tests

use heatgen_rs::config::AppConfig;
use heatgen_rs::engine::Controller;
use heatgen_rs::types::Unit;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build a controller with the default configuration, a chosen unit, and a
/// deterministic random source
pub fn seeded_controller(unit: Unit, seed: u64) -> Controller {
    let config = AppConfig {
        unit,
        ..AppConfig::default()
    };
    Controller::with_rng(config, StdRng::seed_from_u64(seed))
        .expect("default test configuration is valid")
}
