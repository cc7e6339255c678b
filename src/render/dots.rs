use super::helpers::{clear, fill_circle};
use folio_core::render::dot_color;
use folio_core::{Entity, RenderAdapter, RenderError, Rgb, Theme};
use web_sys as web;

/// Logo dots on a 2D canvas, blended from gray to their target color by
/// activation progress.
pub struct DotAdapter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    radius: f64,
    fill: Option<Rgb>,
}

impl DotAdapter {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        dot_size: f32,
    ) -> Self {
        Self {
            canvas,
            ctx,
            radius: dot_size as f64 * 0.5,
            fill: None,
        }
    }

    fn set_fill(&mut self, color: Rgb) {
        if self.fill != Some(color) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.fill = Some(color);
        }
    }
}

impl RenderAdapter<Rgb> for DotAdapter {
    fn begin_frame(&mut self, _theme: Theme) -> Result<(), RenderError> {
        if !self.canvas.is_connected() {
            return Err(RenderError::SurfaceUnavailable);
        }
        clear(&self.ctx, &self.canvas);
        // other code may have touched the context between frames
        self.fill = None;
        Ok(())
    }

    fn render(&mut self, entity: &Entity<Rgb>, _theme: Theme) -> Result<(), RenderError> {
        self.set_fill(dot_color(entity.visual, entity.activation));
        fill_circle(&self.ctx, entity.position(), self.radius)
            .map_err(|_| RenderError::SurfaceUnavailable)
    }
}
