/// Canvas drawing and overlay tuning constants.
///
/// The tracker's own timings live in `trails_core::constants`; these only
/// shape how trails look.
// Per-frame background fade (alpha of a black wash), leaves a soft afterimage
pub const FADE_ALPHA: f64 = 10.0 / 255.0;

// Trail stroke
pub const STROKE_WIDTH_PX: f64 = 3.0;
pub const STROKE_SATURATION: f32 = 80.0;
pub const STROKE_BRIGHTNESS: f32 = 100.0;
pub const STROKE_MIN_ALPHA: f64 = 0.15; // alpha of a segment about to expire

// Live contact markers
pub const CONTACT_DOT_RADIUS_PX: f64 = 10.0;
pub const CONTACT_RING_RADII_PX: [f64; 2] = [40.0, 55.0];

// Status text
pub const HINT_FONT: &str = "24px system-ui";
pub const SUBHINT_FONT: &str = "16px system-ui";
pub const COUNT_FONT: &str = "72px system-ui";
pub const HINT_ALPHA: f64 = 100.0 / 255.0;
pub const SUBHINT_OFFSET_PX: f64 = 40.0;
pub const COUNT_BOTTOM_OFFSET_PX: f64 = 200.0;

// Multi-touch indicator row
pub const INDICATOR_Y_PX: f64 = 40.0;
pub const INDICATOR_RADIUS_PX: f64 = 12.0;
pub const INDICATOR_SPACING_PX: f64 = 36.0;
pub const INDICATOR_LIT: &str = "rgb(231,76,60)";
pub const INDICATOR_UNLIT: &str = "rgba(255,255,255,0.4)";
