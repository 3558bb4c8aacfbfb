use crate::dom;
use crate::input::PointerRegistry;
use crate::overlay;
use crate::render::Canvas2d;
use std::cell::RefCell;
use std::rc::Rc;
use trails_core::{status, StrokeHue, TrailTracker};
use web_sys as web;

pub struct FrameContext {
    pub tracker: Rc<RefCell<TrailTracker>>,
    pub pointers: Rc<RefCell<PointerRegistry>>,
    pub stroke_hue: Rc<RefCell<StrokeHue>>,
    pub wipe_requested: Rc<RefCell<bool>>,

    pub canvas: web::HtmlCanvasElement,
    pub surface: Canvas2d,
    pub frame_index: u64,
}

// How often the DOM status line is refreshed, in frames
const STATUS_EVERY_FRAMES: u64 = 6;

impl FrameContext {
    pub fn frame(&mut self) {
        self.frame_index += 1;
        if self.surface.width != self.canvas.width() as f64
            || self.surface.height != self.canvas.height() as f64
        {
            // Resizing the backing store already cleared the pixels.
            self.surface.resize(&self.canvas);
        }

        let (contacts, positions, pressed) = {
            let p = self.pointers.borrow();
            (p.contacts(), p.positions(), p.pressed_count())
        };

        let (snap, max_age, report, identity) = {
            let mut tracker = self.tracker.borrow_mut();
            let report = tracker.observe(&contacts);
            (
                tracker.snapshot(),
                tracker.config().max_age_ms,
                report,
                tracker.config().identity_mode,
            )
        };
        if report.created > 0 || report.removed > 0 {
            log::debug!(
                "[frame] +{} -{} active={}",
                report.created,
                report.removed,
                report.active
            );
        }

        if std::mem::take(&mut *self.wipe_requested.borrow_mut()) {
            self.surface.wipe();
        } else {
            self.surface.fade();
        }

        let hue_mode = *self.stroke_hue.borrow();
        self.surface.draw_trails(&snap, max_age, hue_mode);
        self.surface.draw_contacts(&positions);
        self.surface.draw_indicators(pressed);
        self.surface.draw_count(pressed);
        if status::show_idle_hint(pressed > 0, report.active) {
            self.surface.draw_idle_hint();
        }

        if self.frame_index % STATUS_EVERY_FRAMES == 0 {
            if let Some(document) = dom::window_document() {
                overlay::update_status(&document, pressed, report.active, identity, hue_mode);
            }
        }
    }
}
