use crate::core::{Surface, Swatch};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// 2D canvas implementation of the particle drawing surface.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn glow_disc(&mut self, center: Vec2, radius: f32, swatch: Swatch, blur: f32) {
        let ctx = &self.ctx;
        ctx.set_shadow_blur(blur as f64);
        ctx.set_shadow_color(swatch.glow);
        ctx.set_fill_style_str(swatch.color);
        ctx.begin_path();
        if ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_ok()
        {
            ctx.fill();
        }
        ctx.set_shadow_blur(0.0);
    }
}
