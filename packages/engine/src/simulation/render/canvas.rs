use log::warn;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::systems::body::DebugSurface;

/// Debug text drawn straight onto a 2D canvas context.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DebugSurface for CanvasSurface<'_> {
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: &str) {
        #[allow(deprecated)]
        self.ctx.set_fill_style(&JsValue::from_str(color));
        if let Err(err) = self.ctx.fill_text(text, x as f64, y as f64) {
            warn!("fill_text failed: {:?}", err);
        }
    }
}
