// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;
use trails_core::{IdentityMode, ManualClock, TouchId, TrackerConfig, TrailTracker};

#[test]
fn contacts_come_out_in_landing_order() {
    let mut reg = PointerRegistry::default();
    reg.down(9, Vec2::new(1.0, 1.0));
    reg.down(2, Vec2::new(2.0, 2.0));
    reg.down(5, Vec2::new(3.0, 3.0));

    let ids: Vec<u64> = reg.contacts().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![9, 2, 5]);
    assert_eq!(reg.positions()[2], Vec2::new(3.0, 3.0));
}

#[test]
fn hover_moves_are_ignored_until_pressed() {
    let mut reg = PointerRegistry::default();
    reg.moved(1, Vec2::new(10.0, 10.0));
    assert_eq!(reg.pressed_count(), 0);
    assert!(reg.contacts().is_empty());

    reg.down(1, Vec2::new(0.0, 0.0));
    reg.moved(1, Vec2::new(4.0, 6.0));
    let c = reg.contacts()[0];
    assert_eq!((c.x, c.y), (Some(4.0), Some(6.0)));

    reg.up(1);
    assert_eq!(reg.pressed_count(), 0);
}

#[test]
fn release_all_empties_the_registry() {
    let mut reg = PointerRegistry::default();
    reg.down(1, Vec2::ZERO);
    reg.down(2, Vec2::ZERO);
    reg.release_all();
    assert!(reg.contacts().is_empty());
}

#[test]
fn negative_pointer_ids_stay_distinct() {
    assert_ne!(pointer_key(-1), pointer_key(1));
    assert_eq!(pointer_key(7), 7);
}

#[test]
fn client_to_canvas_scales_by_backing_ratio() {
    let p = client_to_canvas_px(
        Vec2::new(110.0, 70.0),
        Vec2::new(10.0, 20.0),
        Vec2::new(200.0, 100.0),
        Vec2::new(400.0, 200.0),
    );
    assert_eq!(p, Vec2::new(200.0, 100.0));
}

#[test]
fn css_position_ignores_backing_ratio() {
    let origin = Vec2::new(10.0, 20.0);
    let client = Vec2::new(40.0, 20.0);
    let css = client_to_css_px(client, origin);
    assert_eq!(css, Vec2::new(30.0, 0.0));
    // Same touch on a 2x and a 3x backing store: CSS distance is unchanged.
    let size = Vec2::new(200.0, 100.0);
    let at_2x = client_to_canvas_px(client, origin, size, size * 2.0);
    let at_3x = client_to_canvas_px(client, origin, size, size * 3.0);
    assert_ne!(at_2x, at_3x);
}

#[test]
fn client_to_canvas_handles_collapsed_rect() {
    let p = client_to_canvas_px(
        Vec2::new(15.0, 25.0),
        Vec2::new(10.0, 20.0),
        Vec2::ZERO,
        Vec2::new(400.0, 200.0),
    );
    assert_eq!(p, Vec2::new(5.0, 5.0));
}

#[test]
fn lifting_the_first_finger_keeps_the_second_trail() {
    let clock = ManualClock::new(0);
    let mut tracker = TrailTracker::with_clock(TrackerConfig::default(), clock.clone()).unwrap();
    let mut reg = PointerRegistry::default();

    reg.down(1, Vec2::new(0.0, 0.0));
    reg.down(2, Vec2::new(100.0, 0.0));
    tracker.observe(&reg.contacts());
    clock.advance(16);

    reg.up(1);
    reg.moved(2, Vec2::new(110.0, 0.0));
    tracker.observe(&reg.contacts());

    let segs = tracker.segments_for(TouchId(2));
    assert_eq!(segs.len(), 1);
    assert_eq!((segs[0].0.x, segs[0].1.x), (100.0, 110.0));
}

#[test]
fn slot_mode_hands_the_first_trail_to_the_second_finger() {
    let clock = ManualClock::new(0);
    let config = TrackerConfig::default().with_identity_mode(IdentityMode::Slot);
    let mut tracker = TrailTracker::with_clock(config, clock.clone()).unwrap();
    let mut reg = PointerRegistry::default();

    reg.down(1, Vec2::new(0.0, 0.0));
    reg.down(2, Vec2::new(100.0, 0.0));
    tracker.observe(&reg.contacts());
    clock.advance(16);
    reg.up(1);
    tracker.observe(&reg.contacts());

    let segs = tracker.segments_for(TouchId(0));
    assert_eq!((segs[0].0.x, segs[0].1.x), (0.0, 100.0));
}
