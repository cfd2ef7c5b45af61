//! End-to-end tests for the recording workflow
//!
//! These drive the public controller API the way the frontend does: hover
//! transitions, pointer moves, ticks, and configuration edits.

mod common;

use common::seeded_controller;
use heatgen_rs::config::SurfaceConfig;
use heatgen_rs::types::{Point, SamplingState, Unit, SAMPLE_INTERVAL};
use std::time::Duration;

#[test]
fn full_recording_cycle() {
    let mut ctl = seeded_controller(Unit::Pixel, 7);

    // Hover in, wander, and let three ticks fire.
    ctl.pointer_entered();
    ctl.pointer_moved(100.2, 200.8);
    ctl.handle_tick();
    ctl.pointer_moved(101.0, 201.0);
    ctl.handle_tick();
    ctl.handle_tick(); // stationary pointer repeats

    ctl.pointer_left();
    ctl.handle_tick(); // paused, dropped

    assert_eq!(
        ctl.store().points(),
        &[
            Point::new(100, 200, 1),
            Point::new(101, 201, 1),
            Point::new(101, 201, 1),
        ]
    );
}

#[test]
fn value_zero_is_never_committed() {
    let mut ctl = seeded_controller(Unit::Pixel, 7);

    // Any sequence of enter/tick without a move carries no signal.
    for _ in 0..5 {
        ctl.pointer_entered();
        ctl.handle_tick();
        ctl.pointer_left();
        ctl.handle_tick();
    }
    assert!(ctl.store().is_empty());
    assert!(ctl.store().points().iter().all(Point::has_signal));
}

#[test]
fn enter_leave_enter_ends_armed() {
    let mut ctl = seeded_controller(Unit::Pixel, 7);
    ctl.pointer_entered();
    ctl.pointer_left();
    ctl.pointer_entered();
    assert_eq!(ctl.sampling_state(), SamplingState::Armed);
}

#[test]
fn idle_events_are_dropped_not_queued() {
    let mut ctl = seeded_controller(Unit::Pixel, 7);

    ctl.pointer_moved(50.0, 50.0);
    ctl.handle_tick();
    assert!(ctl.store().is_empty());

    // Arming afterwards does not resurrect the dropped move.
    ctl.pointer_entered();
    ctl.handle_tick();
    assert!(ctl.store().is_empty());
}

#[test]
fn resize_mid_recording_is_safe() {
    let mut ctl = seeded_controller(Unit::Percent, 7);

    ctl.pointer_entered();
    ctl.pointer_moved(320.0, 240.0); // 50%, 50% of 640x480

    ctl.set_surface_size(1280, 960).unwrap();
    assert_eq!(ctl.sampling_state(), SamplingState::Armed);

    // The pre-resize scratch must not be committed.
    ctl.handle_tick();
    assert!(ctl.store().is_empty());

    // A fresh capture uses the new denominators: 320/1280 = 25%.
    ctl.pointer_moved(320.0, 240.0);
    ctl.handle_tick();
    assert_eq!(ctl.store().points(), &[Point::new(25, 25, 1)]);
}

#[test]
fn unit_toggle_affects_only_subsequent_recording() {
    let mut ctl = seeded_controller(Unit::Pixel, 7);

    ctl.pointer_entered();
    ctl.pointer_moved(320.0, 240.0);
    ctl.handle_tick();
    assert_eq!(ctl.store().points(), &[Point::new(320, 240, 1)]);

    ctl.set_unit(Unit::Percent).unwrap();

    // The stored pixel point is untouched; the next capture is percent.
    ctl.pointer_moved(320.0, 240.0);
    ctl.handle_tick();
    assert_eq!(
        ctl.store().points(),
        &[Point::new(320, 240, 1), Point::new(50, 50, 1)]
    );
}

#[test]
fn randomize_and_manual_edit_bypass_the_recorder() {
    let mut ctl = seeded_controller(Unit::Pixel, 7);

    ctl.randomize().unwrap();
    let generated = ctl.store().points().to_vec();
    assert!(!generated.is_empty());
    assert!(generated.iter().all(Point::has_signal));

    // A manual edit replaces the generated dataset wholesale.
    ctl.apply_text_edit(r#"[{"x":5,"y":6,"value":2}]"#).unwrap();
    assert_eq!(ctl.store().points(), &[Point::new(5, 6, 2)]);

    // A malformed edit leaves it alone.
    assert!(ctl.apply_text_edit("[{]").is_err());
    assert_eq!(ctl.store().points(), &[Point::new(5, 6, 2)]);

    ctl.reset();
    assert!(ctl.store().is_empty());
}

#[test]
fn serialized_text_round_trips_through_edit() {
    let mut ctl = seeded_controller(Unit::Percent, 7);
    ctl.randomize().unwrap();
    let before = ctl.store().points().to_vec();

    ctl.set_pretty(true);
    let text = ctl.serialized().unwrap();
    ctl.apply_text_edit(&text).unwrap();

    assert_eq!(ctl.store().points(), before.as_slice());
}

#[test]
fn live_tick_source_commits_while_armed() {
    let mut ctl = seeded_controller(Unit::Pixel, 7);

    ctl.pointer_entered();
    ctl.pointer_moved(10.0, 10.0);

    // Let the real 100 ms ticker fire at least once.
    std::thread::sleep(SAMPLE_INTERVAL + Duration::from_millis(150));
    ctl.poll();

    assert!(!ctl.store().is_empty());
    assert_eq!(ctl.store().points()[0], Point::new(10, 10, 1));
}

#[test]
fn invalid_config_edits_leave_everything_in_effect() {
    let mut ctl = seeded_controller(Unit::Pixel, 7);
    ctl.randomize().unwrap();
    let points = ctl.store().points().to_vec();

    assert!(ctl.set_surface_size(0, 100).is_err());
    assert!(ctl.set_value(99).is_err());

    assert_eq!(ctl.config().surface, SurfaceConfig::new(640, 480));
    assert_eq!(ctl.config().value.value, 1);
    assert_eq!(ctl.store().points(), points.as_slice());
}
