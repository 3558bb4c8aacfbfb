use super::keymap::{action_for_key, KeyAction};
use crate::dom;
use crate::overlay;
use crate::style;
use std::cell::RefCell;
use std::rc::Rc;
use trails_core::{IdentityMode, StrokeHue, TrailTracker};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct KeyWiring {
    pub tracker: Rc<RefCell<TrailTracker>>,
    pub stroke_hue: Rc<RefCell<StrokeHue>>,
    pub wipe_requested: Rc<RefCell<bool>>,
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &KeyWiring) {
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::Clear => {
            w.tracker.borrow_mut().clear();
            *w.wipe_requested.borrow_mut() = true;
        }
        KeyAction::ToggleIdentityMode => {
            let mut tracker = w.tracker.borrow_mut();
            let mut cfg = tracker.config().clone();
            cfg.identity_mode = match cfg.identity_mode {
                IdentityMode::Persistent => IdentityMode::Slot,
                IdentityMode::Slot => IdentityMode::Persistent,
            };
            let mode = cfg.identity_mode;
            match tracker.reconfigure(cfg) {
                Ok(()) => log::info!("[keys] identity mode {:?}", mode),
                Err(e) => log::error!("[keys] could not switch identity mode: {}", e),
            }
            *w.wipe_requested.borrow_mut() = true;
        }
        KeyAction::ToggleStrokeHue => {
            let mut hue = w.stroke_hue.borrow_mut();
            *hue = style::next_stroke_hue(*hue);
            log::info!("[keys] stroke hue {:?}", *hue);
        }
        KeyAction::ToggleStatus => {
            if let Some(document) = dom::window_document() {
                overlay::toggle_status(&document);
            }
        }
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(w: KeyWiring) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &w);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
