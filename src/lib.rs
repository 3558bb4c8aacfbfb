#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use trails_core::{DoubleTapDetector, StrokeHue, TrackerConfig, TrailTracker};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod style;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Release every pointer when the page loses focus; browsers do not always
/// deliver `pointerup` for contacts that were down at that moment.
fn wire_blur_release(
    pointers: &Rc<RefCell<input::PointerRegistry>>,
    double_tap: &Rc<RefCell<DoubleTapDetector>>,
) {
    let pointers = pointers.clone();
    let double_tap = double_tap.clone();
    let closure = Closure::wrap(Box::new(move || {
        pointers.borrow_mut().release_all();
        double_tap.borrow_mut().cancel_all();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("trails-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);
    dom::lock_gestures(&canvas);
    let ctx = dom::canvas_2d(&canvas)?;

    let tracker = TrailTracker::new(TrackerConfig::default())
        .map_err(|e| anyhow::anyhow!("tracker config: {}", e))?;
    let tracker = Rc::new(RefCell::new(tracker));
    let pointers = Rc::new(RefCell::new(input::PointerRegistry::default()));
    let double_tap = Rc::new(RefCell::new(DoubleTapDetector::default()));
    let stroke_hue = Rc::new(RefCell::new(StrokeHue::default()));
    let wipe_requested = Rc::new(RefCell::new(true));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        tracker: tracker.clone(),
        pointers: pointers.clone(),
        double_tap: double_tap.clone(),
        wipe_requested: wipe_requested.clone(),
    });
    events::wire_global_keydown(events::KeyWiring {
        tracker: tracker.clone(),
        stroke_hue: stroke_hue.clone(),
        wipe_requested: wipe_requested.clone(),
    });
    wire_blur_release(&pointers, &double_tap);

    let surface = render::Canvas2d::new(ctx, &canvas);
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        tracker,
        pointers,
        stroke_hue,
        wipe_requested,
        canvas,
        surface,
        frame_index: 0,
    }));

    start_animation_loop(frame_ctx);
    log::info!("[init] animation loop running");
    Ok(())
}

fn start_animation_loop(frame_ctx: Rc<RefCell<frame::FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref::<js_sys::Function>());
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref::<js_sys::Function>());
        }
    }
}
