use crate::constants::{
    DOUBLE_TAP_SLOP_PX, DOUBLE_TAP_WINDOW_MS, TAP_MAX_PRESS_MS, TAP_MAX_TRAVEL_PX,
};
use fnv::FnvHashMap;
use glam::Vec2;

/// A pointer that is down and might still turn out to be a tap.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Press {
    at_ms: u64,
    origin: Vec2,
    travel_px: f32,
    // no other pointer was down at any point during this press
    solo: bool,
}

/// Recognizes the reset gesture: two full taps close together in time and
/// space, like a double click.
///
/// A tap is a single pointer going down and back up quickly without moving
/// far. Positions are in CSS pixels so the slop does not scale with the
/// device pixel ratio.
#[derive(Clone, Debug)]
pub struct DoubleTapDetector {
    window_ms: u64,
    slop_px: f32,
    max_press_ms: u64,
    max_travel_px: f32,
    presses: FnvHashMap<u64, Press>,
    last_tap: Option<(u64, Vec2)>,
}

impl Default for DoubleTapDetector {
    fn default() -> Self {
        Self::new(DOUBLE_TAP_WINDOW_MS, DOUBLE_TAP_SLOP_PX)
    }
}

impl DoubleTapDetector {
    pub fn new(window_ms: u64, slop_px: f32) -> Self {
        Self {
            window_ms,
            slop_px,
            max_press_ms: TAP_MAX_PRESS_MS,
            max_travel_px: TAP_MAX_TRAVEL_PX,
            presses: FnvHashMap::default(),
            last_tap: None,
        }
    }

    pub fn press(&mut self, pointer: u64, now_ms: u64, pos: Vec2) {
        let solo = self.presses.is_empty();
        for p in self.presses.values_mut() {
            p.solo = false;
        }
        self.presses.insert(
            pointer,
            Press {
                at_ms: now_ms,
                origin: pos,
                travel_px: 0.0,
                solo,
            },
        );
    }

    pub fn moved(&mut self, pointer: u64, pos: Vec2) {
        if let Some(p) = self.presses.get_mut(&pointer) {
            p.travel_px = p.travel_px.max(p.origin.distance(pos));
        }
    }

    /// End a press. Returns `true` when this release completes a double tap.
    /// A release that is not a tap (held, dragged, multi-finger) breaks any
    /// pending first tap.
    pub fn release(&mut self, pointer: u64, now_ms: u64, pos: Vec2) -> bool {
        let Some(press) = self.presses.remove(&pointer) else {
            return false;
        };
        let travel = press.travel_px.max(press.origin.distance(pos));
        let is_tap = press.solo
            && now_ms.saturating_sub(press.at_ms) <= self.max_press_ms
            && travel <= self.max_travel_px;
        if !is_tap {
            self.last_tap = None;
            return false;
        }
        self.tap(now_ms, press.origin)
    }

    /// The pointer was taken away by the host (`pointercancel`); never a tap.
    pub fn cancel(&mut self, pointer: u64) {
        self.presses.remove(&pointer);
        self.last_tap = None;
    }

    /// Drop every press at once, e.g. when the page loses focus mid-touch.
    pub fn cancel_all(&mut self) {
        self.presses.clear();
        self.last_tap = None;
    }

    pub fn reset(&mut self) {
        self.last_tap = None;
    }

    // The completing tap is consumed so a third tap starts over.
    fn tap(&mut self, now_ms: u64, pos: Vec2) -> bool {
        let hit = match self.last_tap {
            Some((t, p)) => {
                now_ms.saturating_sub(t) <= self.window_ms && p.distance(pos) <= self.slop_px
            }
            None => false,
        };
        self.last_tap = if hit { None } else { Some((now_ms, pos)) };
        hit
    }
}
