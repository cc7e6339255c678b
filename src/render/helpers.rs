use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// CSS transform for a cell displaced by `offset` pixels.
#[inline]
pub fn css_translate(offset: Vec2) -> String {
    format!("translate({:.2}px, {:.2}px)", offset.x, offset.y)
}

#[inline]
pub fn css_px(value: f32) -> String {
    format!("{}px", value)
}

/// Fills a circle of `radius` centered at `center`.
pub fn fill_circle(
    ctx: &web::CanvasRenderingContext2d,
    center: Vec2,
    radius: f64,
) -> Result<(), wasm_bindgen::JsValue> {
    ctx.begin_path();
    ctx.arc(center.x as f64, center.y as f64, radius, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}

pub fn clear(ctx: &web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement) {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
}
