use trails_core::{status, IdentityMode, StrokeHue};
use web_sys as web;

const STATUS_ID: &str = "status-overlay";

/// Show or hide the status overlay. Visibility is the `hidden` class.
pub fn toggle_status(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STATUS_ID) {
        match el.class_list().toggle("hidden") {
            Ok(hidden) => log::debug!("[overlay] status hidden: {}", hidden),
            Err(e) => log::warn!("[overlay] could not toggle status: {:?}", e),
        }
    }
}

/// Update the status overlay with the live contact and trail counts
pub fn update_status(
    document: &web::Document,
    pressed: usize,
    active_trails: usize,
    identity: IdentityMode,
    stroke_hue: StrokeHue,
) {
    if let Some(el) = document.get_element_by_id(STATUS_ID) {
        let identity_text = match identity {
            IdentityMode::Persistent => "ids: persistent",
            IdentityMode::Slot => "ids: slot",
        };
        let hue_text = match stroke_hue {
            StrokeHue::PerIdentity => "color: per finger",
            StrokeHue::Timestamp => "color: time",
        };
        let text = format!(
            "{} • trails: {} • {} • {}",
            status::touch_status_line(pressed),
            active_trails,
            identity_text,
            hue_text
        );
        // Skip the DOM write when nothing changed.
        if el.text_content().as_deref() != Some(text.as_str()) {
            el.set_text_content(Some(&text));
        }
    }
}
