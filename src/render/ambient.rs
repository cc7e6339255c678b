use super::helpers::{clear, fill_circle};
use folio_core::render::ambient_color;
use folio_core::{Entity, RenderAdapter, RenderError, Theme};
use web_sys as web;

/// Background particles in a single theme color. Activation is ignored,
/// so reset has nothing to do.
pub struct AmbientAdapter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    radius: f64,
}

impl AmbientAdapter {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        radius: f32,
    ) -> Self {
        Self {
            canvas,
            ctx,
            radius: radius as f64,
        }
    }
}

impl RenderAdapter<()> for AmbientAdapter {
    fn begin_frame(&mut self, theme: Theme) -> Result<(), RenderError> {
        if !self.canvas.is_connected() {
            return Err(RenderError::SurfaceUnavailable);
        }
        clear(&self.ctx, &self.canvas);
        self.ctx.set_fill_style_str(&ambient_color(theme).to_css());
        Ok(())
    }

    fn render(&mut self, entity: &Entity<()>, _theme: Theme) -> Result<(), RenderError> {
        fill_circle(&self.ctx, entity.position(), self.radius)
            .map_err(|_| RenderError::SurfaceUnavailable)
    }

    fn reset(&mut self, _entities: &mut [Entity<()>]) {}
}
