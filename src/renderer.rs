// Canvas-2D implementation of the drawing surface, wrapping the rendering
// context the hosting page hands over.
//
// Context calls that can fail are ignored rather than propagated: the
// background is purely decorative, so a broken or missing context just
// means nothing gets drawn this frame.

use crate::color::Color;
use crate::surface::Surface;
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub struct CanvasRenderer<'a> {
    context: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasRenderer<'a> {
    pub fn new(context: &'a CanvasRenderingContext2d) -> CanvasRenderer<'a> {
        CanvasRenderer { context }
    }
}

impl<'a> Surface for CanvasRenderer<'a> {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) {
        self.context.begin_path();
        if self
            .context
            .arc(center[0], center[1], radius, 0.0, PI * 2.0)
            .is_err()
        {
            return;
        }
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_css()));
        self.context.fill();
    }

    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, color: Color) {
        self.context.begin_path();
        self.context
            .set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.context.set_line_width(1.0);
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
    }
}
