//! Canvas2D backend for the engine's `Surface` trait.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use glimmer_engine::{DiscInstance, LineInstance, Surface};

pub struct Canvas2dSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    /// None when the 2d context is unavailable.
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    /// Match the backing store to the viewport.
    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

fn rgba(r: f32, g: f32, b: f32, alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", r as u8, g as u8, b as u8, alpha)
}

impl Surface for Canvas2dSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_disc(&mut self, disc: &DiscInstance) {
        self.ctx
            .set_fill_style_str(&rgba(disc.r, disc.g, disc.b, disc.alpha));
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            disc.x as f64,
            disc.y as f64,
            disc.radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    fn stroke_line(&mut self, line: &LineInstance) {
        self.ctx
            .set_stroke_style_str(&rgba(line.r, line.g, line.b, line.alpha));
        self.ctx.set_line_width(line.width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(line.x0 as f64, line.y0 as f64);
        self.ctx.line_to(line.x1 as f64, line.y1 as f64);
        self.ctx.stroke();
    }
}
