//! Text shown by frontends next to the trails.

use crate::constants::MAX_DISPLAY_TOUCHES;

pub const IDLE_HINT: &str = "Touch and drag to draw";
pub const IDLE_SUBHINT: &str = "Double tap to clear";

/// Instruction line for the multi-touch counter.
pub fn touch_status_line(count: usize) -> String {
    match count {
        0 => "Place multiple fingers on the screen!".to_string(),
        1 => "Add more fingers to see multi-touch!".to_string(),
        n => format!("Great! You have {} fingers touching!", n),
    }
}

/// Which of the fixed indicator slots are lit for `count` contacts.
pub fn indicator_slots(count: usize) -> [bool; MAX_DISPLAY_TOUCHES] {
    let mut slots = [false; MAX_DISPLAY_TOUCHES];
    for s in slots.iter_mut().take(count) {
        *s = true;
    }
    slots
}

/// The idle hint only shows when nothing is pressed and no trail is still fading.
#[inline]
pub fn show_idle_hint(pressed: bool, active_trails: usize) -> bool {
    !pressed && active_trails == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_by_count() {
        assert_eq!(touch_status_line(0), "Place multiple fingers on the screen!");
        assert_eq!(touch_status_line(1), "Add more fingers to see multi-touch!");
        assert_eq!(touch_status_line(4), "Great! You have 4 fingers touching!");
    }

    #[test]
    fn indicator_slots_saturate() {
        assert_eq!(indicator_slots(3).iter().filter(|s| **s).count(), 3);
        assert!(indicator_slots(25).iter().all(|s| *s));
        assert!(indicator_slots(0).iter().all(|s| !*s));
    }

    #[test]
    fn idle_hint_waits_for_trails_to_fade() {
        assert!(show_idle_hint(false, 0));
        assert!(!show_idle_hint(true, 0));
        assert!(!show_idle_hint(false, 1));
    }
}
