//! Mountable views exported to JavaScript.

pub mod ambient;
pub mod contributions;
pub mod logo;

use crate::constants::RESET_LABEL;
use crate::dom::{self, EventListener};
use crate::events::PointerTracking;
use crate::frame::AnimationLoop;
use crate::input::Bounds;
use folio_core::{Field, PointerState, RenderAdapter, Scene, Theme};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

pub use ambient::AmbientField;
pub use contributions::ContributionGraph;
pub use logo::{generate_logo_map, LogoDots};

/// The live parts of a mounted view: scene, pointer, frame loop and
/// listeners. Unmounting stops the loop and removes the listeners.
pub(crate) struct Mount<V: 'static, A: 'static> {
    pub scene: Rc<RefCell<Scene<V, A>>>,
    pub pointer: Rc<PointerState>,
    animation: AnimationLoop,
    tracking: Option<PointerTracking>,
}

impl<V: 'static, A: RenderAdapter<V> + 'static> Mount<V, A> {
    pub fn new(
        field: Field<V>,
        adapter: A,
        radius: f32,
        theme: Theme,
        surface: &web::Element,
        bounds: Bounds,
    ) -> anyhow::Result<Self> {
        let pointer = Rc::new(PointerState::new(radius));
        let scene = Rc::new(RefCell::new(Scene::new(
            field,
            adapter,
            pointer.clone(),
            theme,
        )));
        let weak = Rc::downgrade(&scene);
        let animation = AnimationLoop::new(move || {
            if let Some(scene) = weak.upgrade() {
                let stats = scene.borrow_mut().frame();
                if stats.skipped > 0 {
                    log::trace!("[frame] {:?}", stats);
                }
            }
        });
        let tracking = PointerTracking::attach(surface, pointer.clone(), bounds)?;
        Ok(Self {
            scene,
            pointer,
            animation,
            tracking: Some(tracking),
        })
    }

    pub fn start(&self) {
        self.animation.start();
    }

    pub fn set_theme(&self, theme: Theme) {
        self.scene.borrow_mut().set_theme(theme);
    }

    pub fn reset(&self) {
        self.scene.borrow_mut().reset();
    }

    /// A "Reset" label that clears activation on this view when clicked.
    pub fn reset_control(
        &self,
        document: &web::Document,
    ) -> anyhow::Result<(web::HtmlElement, EventListener)> {
        let label: web::HtmlElement = dom::create(document, "span")?;
        label.set_inner_text(RESET_LABEL);
        dom::set_styles(&label, &[("cursor", "pointer"), ("opacity", "0.7")]);
        let scene = Rc::downgrade(&self.scene);
        let listener = EventListener::new(&label, "click", move |_| {
            if let Some(scene) = scene.upgrade() {
                scene.borrow_mut().reset();
            }
        })?;
        Ok((label, listener))
    }

    pub fn unmount(&mut self) {
        self.animation.stop();
        if self.tracking.take().is_some() {
            log::info!("[view] unmounted");
        }
    }
}

impl<V: 'static, A: 'static> Drop for Mount<V, A> {
    fn drop(&mut self) {
        self.animation.stop();
        self.tracking.take();
    }
}

pub(crate) fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}
