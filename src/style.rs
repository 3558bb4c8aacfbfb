use crate::constants::{STROKE_BRIGHTNESS, STROKE_MIN_ALPHA, STROKE_SATURATION};
use trails_core::{hsb_to_rgb, hue_for_timestamp, StrokeHue, TrailPoint};

/// CSS `rgba(...)` string for a hue at the stroke saturation/brightness.
pub fn stroke_css(hue: f32, alpha: f64) -> String {
    let [r, g, b] = hsb_to_rgb(hue, STROKE_SATURATION, STROKE_BRIGHTNESS);
    format!(
        "rgba({},{},{},{:.3})",
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
        alpha.clamp(0.0, 1.0)
    )
}

/// Hue for one segment given the owning trail's identity hue.
#[inline]
pub fn segment_hue(mode: StrokeHue, identity_hue: f32, newer: &TrailPoint) -> f32 {
    match mode {
        StrokeHue::PerIdentity => identity_hue,
        StrokeHue::Timestamp => hue_for_timestamp(newer.timestamp_ms),
    }
}

/// Segments fade linearly from opaque (new) to `STROKE_MIN_ALPHA` (about to expire).
#[inline]
pub fn segment_alpha(age_ms: u64, max_age_ms: u64) -> f64 {
    if max_age_ms == 0 {
        return 1.0;
    }
    let t = (age_ms as f64 / max_age_ms as f64).clamp(0.0, 1.0);
    1.0 - t * (1.0 - STROKE_MIN_ALPHA)
}

#[inline]
pub fn next_stroke_hue(mode: StrokeHue) -> StrokeHue {
    match mode {
        StrokeHue::PerIdentity => StrokeHue::Timestamp,
        StrokeHue::Timestamp => StrokeHue::PerIdentity,
    }
}
