use fnv::FnvHashMap;
use glam::Vec2;
use trails_core::RawContact;

/// One pointer currently pressed on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivePointer {
    pub pos: Vec2,
    pub down_seq: u64,
}

/// Host-side mirror of pressed pointers, fed by pointer events and drained
/// once per frame into the tracker.
///
/// Mouse, pen and touch all arrive as pointers; a mouse only counts while a
/// button is held, which is the `mouseIsPressed` fallback for desktop.
#[derive(Debug, Default)]
pub struct PointerRegistry {
    pressed: FnvHashMap<i32, ActivePointer>,
    next_seq: u64,
}

impl PointerRegistry {
    pub fn down(&mut self, pointer_id: i32, pos: Vec2) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pressed.insert(
            pointer_id,
            ActivePointer {
                pos,
                down_seq: seq,
            },
        );
    }

    /// Moves of pointers that are not pressed (hovering mouse) are ignored.
    pub fn moved(&mut self, pointer_id: i32, pos: Vec2) {
        if let Some(p) = self.pressed.get_mut(&pointer_id) {
            p.pos = pos;
        }
    }

    pub fn up(&mut self, pointer_id: i32) {
        self.pressed.remove(&pointer_id);
    }

    pub fn release_all(&mut self) {
        self.pressed.clear();
    }

    #[inline]
    pub fn pressed_count(&self) -> usize {
        self.pressed.len()
    }

    /// Current contacts in landing order, like a host `touches` list.
    pub fn contacts(&self) -> Vec<RawContact> {
        let mut list: Vec<(&i32, &ActivePointer)> = self.pressed.iter().collect();
        list.sort_unstable_by_key(|(_, p)| p.down_seq);
        list.into_iter()
            .map(|(id, p)| RawContact::new(pointer_key(*id), p.pos.x as f64, p.pos.y as f64))
            .collect()
    }

    pub fn positions(&self) -> Vec<Vec2> {
        let mut list: Vec<&ActivePointer> = self.pressed.values().collect();
        list.sort_unstable_by_key(|p| p.down_seq);
        list.into_iter().map(|p| p.pos).collect()
    }
}

/// Pointer ids are signed in the DOM; keep them distinct as tracker keys.
#[inline]
pub fn pointer_key(pointer_id: i32) -> u64 {
    pointer_id as u32 as u64
}

/// Client-space position relative to the canvas, still in CSS pixels.
#[inline]
pub fn client_to_css_px(client: Vec2, rect_origin: Vec2) -> Vec2 {
    client - rect_origin
}

/// Map a client-space position into canvas backing-store pixels.
#[inline]
pub fn client_to_canvas_px(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    canvas_size: Vec2,
) -> Vec2 {
    let local = client - rect_origin;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        local / rect_size * canvas_size
    } else {
        local
    }
}
