use crate::input::{self, PointerRegistry};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use trails_core::{DoubleTapDetector, TrailTracker};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub tracker: Rc<RefCell<TrailTracker>>,
    pub pointers: Rc<RefCell<PointerRegistry>>,
    pub double_tap: Rc<RefCell<DoubleTapDetector>>,
    pub wipe_requested: Rc<RefCell<bool>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w, "pointerup");
    wire_pointerup(&w, "pointercancel");
}

/// Pointer position as `(canvas backing px, CSS px)`. Trails are drawn in the
/// former; gestures are measured in the latter.
fn pointer_positions(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> (Vec2, Vec2) {
    let rect = canvas.get_bounding_client_rect();
    let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
    let origin = Vec2::new(rect.left() as f32, rect.top() as f32);
    let canvas_px = input::client_to_canvas_px(
        client,
        origin,
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    );
    (canvas_px, input::client_to_css_px(client, origin))
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (pos, css) = pointer_positions(&ev, &w.canvas);
        w.pointers.borrow_mut().down(ev.pointer_id(), pos);

        let now = w.tracker.borrow().now_ms();
        w.double_tap
            .borrow_mut()
            .press(input::pointer_key(ev.pointer_id()), now, css);

        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (pos, css) = pointer_positions(&ev, &w.canvas);
        w.pointers.borrow_mut().moved(ev.pointer_id(), pos);
        w.double_tap
            .borrow_mut()
            .moved(input::pointer_key(ev.pointer_id()), css);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring, event: &str) {
    let w = w.clone();
    let cancelled = event == "pointercancel";

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let key = input::pointer_key(ev.pointer_id());
        w.pointers.borrow_mut().up(ev.pointer_id());

        if cancelled {
            w.double_tap.borrow_mut().cancel(key);
        } else {
            let (_, css) = pointer_positions(&ev, &w.canvas);
            let now = w.tracker.borrow().now_ms();
            if w.double_tap.borrow_mut().release(key, now, css) {
                w.tracker.borrow_mut().clear();
                *w.wipe_requested.borrow_mut() = true;
                log::info!("[touch] double tap, trails cleared");
            }
        }
        log::debug!(
            "[touch] {} ended, {} still down",
            ev.pointer_type(),
            w.pointers.borrow().pressed_count()
        );
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    // Listen on the window so releases outside the canvas still end the contact.
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
