// Host-side tests for constants and the pure stroke styling built on them.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod style {
    include!("../src/style.rs");
}

use constants::*;
use style::*;
use trails_core::{StrokeHue, TrailPoint, MAX_AGE_MS};

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(FADE_ALPHA > 0.0 && FADE_ALPHA < 1.0);
    assert!(STROKE_WIDTH_PX > 0.0);
    assert!(STROKE_MIN_ALPHA > 0.0 && STROKE_MIN_ALPHA < 1.0);
    assert!((0.0..=100.0).contains(&STROKE_SATURATION));
    assert!((0.0..=100.0).contains(&STROKE_BRIGHTNESS));
    assert!(HINT_ALPHA > 0.0 && HINT_ALPHA <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn contact_rings_surround_the_dot() {
    assert!(CONTACT_RING_RADII_PX[0] > CONTACT_DOT_RADIUS_PX);
    assert!(CONTACT_RING_RADII_PX[1] > CONTACT_RING_RADII_PX[0]);
}

#[test]
fn stroke_css_formats_rgba() {
    // Hue 0 at 80% saturation, full brightness.
    assert_eq!(stroke_css(0.0, 1.0), "rgba(255,51,51,1.000)");
    assert_eq!(stroke_css(120.0, 0.5), "rgba(51,255,51,0.500)");
    assert!(stroke_css(0.0, 7.0).ends_with(",1.000)"));
}

#[test]
fn segment_alpha_fades_with_age() {
    assert_eq!(segment_alpha(0, MAX_AGE_MS), 1.0);
    let mid = segment_alpha(MAX_AGE_MS / 2, MAX_AGE_MS);
    assert!(mid < 1.0 && mid > STROKE_MIN_ALPHA);
    assert!((segment_alpha(MAX_AGE_MS, MAX_AGE_MS) - STROKE_MIN_ALPHA).abs() < 1e-9);
    assert!((segment_alpha(10 * MAX_AGE_MS, MAX_AGE_MS) - STROKE_MIN_ALPHA).abs() < 1e-9);
}

#[test]
fn segment_hue_follows_mode() {
    let p = TrailPoint {
        x: 0.0,
        y: 0.0,
        timestamp_ms: 900,
    };
    assert_eq!(segment_hue(StrokeHue::PerIdentity, 42.0, &p), 42.0);
    assert!((segment_hue(StrokeHue::Timestamp, 42.0, &p) - 90.0).abs() < 1e-3);
}

#[test]
fn stroke_hue_toggle_round_trips() {
    let next = next_stroke_hue(StrokeHue::PerIdentity);
    assert_eq!(next, StrokeHue::Timestamp);
    assert_eq!(next_stroke_hue(next), StrokeHue::PerIdentity);
}
