use super::{to_js, Mount};
use crate::dom::{self, EventListener};
use crate::input::Bounds;
use crate::render::AmbientAdapter;
use anyhow::anyhow;
use folio_core::constants::{
    AMBIENT_GAP, AMBIENT_PARTICLE_RADIUS, AMBIENT_RADIUS, AMBIENT_VIEWPORT_FRACTION,
};
use folio_core::{lattice, plan_resize, Field, SurfaceChange, Theme, Tuning};
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Full-viewport lattice of faint particles that ripple around the
/// pointer. Follows window resizes.
#[wasm_bindgen]
pub struct AmbientField {
    mount: Mount<(), AmbientAdapter>,
    _resize: EventListener,
}

#[wasm_bindgen]
impl AmbientField {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, is_light: bool) -> Result<AmbientField, JsValue> {
        Self::mount(canvas_id, Theme::from_light(is_light)).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setLight)]
    pub fn set_light(&self, is_light: bool) {
        self.mount.set_theme(Theme::from_light(is_light));
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.mount.scene.borrow().field().len()
    }

    pub fn unmount(mut self) {
        self.mount.unmount();
    }
}

impl AmbientField {
    fn mount(canvas_id: &str, theme: Theme) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
        let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, canvas_id)?;

        let size = surface_size();
        dom::size_canvas(&canvas, size.x as u32, size.y as u32);
        let ctx = dom::context_2d(&canvas)?;
        let particles = lattice(size, AMBIENT_GAP);
        log::info!(
            "[ambient] #{}: {} particles over {}x{}",
            canvas_id,
            particles.len(),
            size.x,
            size.y
        );

        let adapter = AmbientAdapter::new(canvas.clone(), ctx, AMBIENT_PARTICLE_RADIUS);
        let mount = Mount::new(
            Field::new(particles, Tuning::ambient()),
            adapter,
            AMBIENT_RADIUS,
            theme,
            &canvas,
            Bounds::Clip,
        )?;

        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let scene = Rc::downgrade(&mount.scene);
        // logical size the particles were laid out for; the canvas itself
        // never drops below 1px
        let laid_out = Cell::new(size);
        let resize = EventListener::new(&window, "resize", move |_| {
            let Some(scene) = scene.upgrade() else {
                return;
            };
            let new = surface_size();
            let mut scene = scene.borrow_mut();
            match plan_resize(laid_out.get(), new, !scene.field().is_empty()) {
                SurfaceChange::Keep => return,
                SurfaceChange::Rescale(ratio) => scene.request_resize(ratio),
                SurfaceChange::Rebuild => scene.replace_entities(lattice(new, AMBIENT_GAP)),
            }
            laid_out.set(new);
            dom::size_canvas(&canvas, new.x as u32, new.y as u32);
            log::debug!(
                "[ambient] resized to {}x{}, {} particles",
                new.x,
                new.y,
                scene.field().len()
            );
        })?;

        mount.start();
        Ok(Self {
            mount,
            _resize: resize,
        })
    }
}

/// Canvas size for the current viewport, in whole CSS pixels.
fn surface_size() -> Vec2 {
    let (width, height) = dom::viewport_size().unwrap_or((0.0, 0.0));
    (Vec2::new(width as f32, height as f32) * AMBIENT_VIEWPORT_FRACTION).floor()
}
