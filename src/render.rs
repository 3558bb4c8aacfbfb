//! Immediate-mode canvas drawing of trails, contact markers and hints.

use crate::constants::*;
use crate::style;
use glam::Vec2;
use std::f64::consts::TAU;
use trails_core::{status, StrokeHue, TrailSnapshot};
use web_sys as web;

pub struct Canvas2d {
    pub ctx: web::CanvasRenderingContext2d,
    pub width: f64,
    pub height: f64,
}

impl Canvas2d {
    pub fn new(ctx: web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement) -> Self {
        Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        }
    }

    pub fn resize(&mut self, canvas: &web::HtmlCanvasElement) {
        self.width = canvas.width() as f64;
        self.height = canvas.height() as f64;
    }

    pub fn wipe(&self) {
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_fill_style_str("#000");
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    /// Translucent black wash so old strokes fade out between frames.
    pub fn fade(&self) {
        self.ctx.set_global_alpha(FADE_ALPHA);
        self.ctx.set_fill_style_str("#000");
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
        self.ctx.set_global_alpha(1.0);
    }

    pub fn draw_trails(&self, snap: &TrailSnapshot, max_age_ms: u64, hue_mode: StrokeHue) {
        let ctx = &self.ctx;
        ctx.set_line_width(STROKE_WIDTH_PX);
        ctx.set_line_cap("round");
        for trail in &snap.trails {
            for pair in trail.points.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                let hue = style::segment_hue(hue_mode, trail.hue, b);
                let alpha = style::segment_alpha(b.age_ms(snap.now_ms), max_age_ms);
                ctx.set_stroke_style_str(&style::stroke_css(hue, alpha));
                ctx.begin_path();
                ctx.move_to(a.x as f64, a.y as f64);
                ctx.line_to(b.x as f64, b.y as f64);
                ctx.stroke();
            }
        }
    }

    pub fn draw_contacts(&self, positions: &[Vec2]) {
        let ctx = &self.ctx;
        for (i, p) in positions.iter().enumerate() {
            let (x, y) = (p.x as f64, p.y as f64);
            ctx.set_fill_style_str("#fff");
            ctx.begin_path();
            _ = ctx.arc(x, y, CONTACT_DOT_RADIUS_PX, 0.0, TAU);
            ctx.fill();

            ctx.set_stroke_style_str("rgba(255,255,255,0.4)");
            ctx.set_line_width(2.0);
            for r in CONTACT_RING_RADII_PX {
                ctx.begin_path();
                _ = ctx.arc(x, y, r, 0.0, TAU);
                ctx.stroke();
            }

            ctx.set_font(SUBHINT_FONT);
            ctx.set_text_align("center");
            _ = ctx.fill_text(&(i + 1).to_string(), x, y - CONTACT_RING_RADII_PX[1] - 6.0);
        }
    }

    pub fn draw_idle_hint(&self) {
        let ctx = &self.ctx;
        let (cx, cy) = (self.width / 2.0, self.height / 2.0);
        ctx.set_global_alpha(HINT_ALPHA);
        ctx.set_fill_style_str("#fff");
        ctx.set_text_align("center");
        ctx.set_font(HINT_FONT);
        _ = ctx.fill_text(status::IDLE_HINT, cx, cy);
        ctx.set_font(SUBHINT_FONT);
        _ = ctx.fill_text(status::IDLE_SUBHINT, cx, cy + SUBHINT_OFFSET_PX);
        ctx.set_global_alpha(1.0);
    }

    /// Row of fixed slots, one lit per pressed contact.
    pub fn draw_indicators(&self, pressed: usize) {
        let ctx = &self.ctx;
        let slots = status::indicator_slots(pressed);
        let total = (slots.len() as f64 * INDICATOR_SPACING_PX).min(self.width - 60.0);
        let step = total / slots.len() as f64;
        let start_x = self.width / 2.0 - total / 2.0 + step / 2.0;
        for (i, lit) in slots.iter().enumerate() {
            let x = start_x + i as f64 * step;
            ctx.begin_path();
            _ = ctx.arc(x, INDICATOR_Y_PX, INDICATOR_RADIUS_PX, 0.0, TAU);
            if *lit {
                ctx.set_fill_style_str(INDICATOR_LIT);
                ctx.fill();
            } else {
                ctx.set_stroke_style_str(INDICATOR_UNLIT);
                ctx.set_line_width(2.0);
                ctx.stroke();
            }
        }
    }

    pub fn draw_count(&self, pressed: usize) {
        if pressed < 2 {
            return;
        }
        let ctx = &self.ctx;
        ctx.set_fill_style_str("#fff");
        ctx.set_text_align("center");
        ctx.set_font(COUNT_FONT);
        _ = ctx.fill_text(
            &pressed.to_string(),
            self.width / 2.0,
            self.height - COUNT_BOTTOM_OFFSET_PX,
        );
    }
}
