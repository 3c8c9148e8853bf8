//! 2D canvas backend for the scene renderer

use std::f64::consts::TAU;

use game_core::DrawSurface;
use glam::Vec2;
use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|e| JsValue::from_str(&format!("Unexpected 2d context: {:?}", e)))?;
        Ok(Self { ctx })
    }
}

fn warn_on_err(what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("canvas {} failed: {:?}", what, e);
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str, alpha: f32) {
        self.ctx.save();
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        self.ctx.restore();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        warn_on_err(
            "arc",
            self.ctx
                .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU),
        );
        self.ctx.fill();
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, dash: [f32; 2], color: &str) {
        let pattern = Array::of2(
            &JsValue::from_f64(dash[0] as f64),
            &JsValue::from_f64(dash[1] as f64),
        );
        self.ctx.set_stroke_style_str(color);
        warn_on_err("setLineDash", self.ctx.set_line_dash(&pattern));
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        warn_on_err("setLineDash", self.ctx.set_line_dash(&Array::new()));
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font: &str, color: &str) {
        self.ctx.save();
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        self.ctx.set_text_align("center");
        warn_on_err("fillText", self.ctx.fill_text(text, at.x as f64, at.y as f64));
        self.ctx.restore();
    }
}
