// Shared tracking/gesture tuning constants used by both web and native frontends.

// Trail lifetime
pub const MAX_AGE_MS: u64 = 2000; // a point is discarded once it is this old
pub const INACTIVITY_TIMEOUT_MS: u64 = 100; // grace period for a contact missing from a frame

// Color
pub const DEFAULT_HUE_STEP_DEGREES: f32 = 137.5; // golden angle, spacing between consecutive identity hues
pub const TIMESTAMP_HUE_RATE: f64 = 0.1; // degrees per millisecond for timestamp-colored strokes

// Double-tap reset gesture
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300; // max gap between the two taps
pub const DOUBLE_TAP_SLOP_PX: f32 = 30.0; // max distance between the two taps, CSS pixels
pub const TAP_MAX_PRESS_MS: u64 = 250; // longer presses are strokes, not taps
pub const TAP_MAX_TRAVEL_PX: f32 = 10.0; // CSS pixels a tap may wander before it becomes a stroke

// Multi-touch status display
pub const MAX_DISPLAY_TOUCHES: usize = 10;

// Expected simultaneous contacts; per-frame id sets stay inline up to this size
pub const INLINE_CONTACTS: usize = 10;
