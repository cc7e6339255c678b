use crate::dom::EventListener;
use crate::input::{self, Bounds, ClientPointer, SurfaceRect};
use folio_core::PointerState;
use glam::Vec2;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer and touch listeners feeding one view's `PointerState`.
///
/// Dropping the tracker removes every listener it registered.
pub struct PointerTracking {
    _listeners: Vec<EventListener>,
}

#[derive(Clone)]
struct Tracked {
    surface: web::Element,
    pointer: Rc<PointerState>,
    client: Rc<ClientPointer>,
    bounds: Bounds,
}

impl Tracked {
    fn moved(&self, client: Vec2) {
        self.client.record(client);
        self.relocate();
    }

    fn relocate(&self) {
        let rect = SurfaceRect::of(&self.surface);
        match self.client.locate(&rect, self.bounds) {
            Some(local) => self.pointer.set_position(local),
            None => self.pointer.clear(),
        }
    }

    fn left(&self) {
        self.client.forget();
        self.pointer.clear();
    }
}

impl PointerTracking {
    pub fn attach(
        surface: &web::Element,
        pointer: Rc<PointerState>,
        bounds: Bounds,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let tracked = Tracked {
            surface: surface.clone(),
            pointer,
            client: Rc::new(ClientPointer::default()),
            bounds,
        };
        let mut listeners = Vec::with_capacity(6);

        {
            let tracked = tracked.clone();
            listeners.push(EventListener::new(&window, "mousemove", move |ev| {
                if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                    tracked.moved(input::mouse_client(ev));
                }
            })?);
        }

        {
            let tracked = tracked.clone();
            listeners.push(EventListener::new(&window, "touchmove", move |ev| {
                let client = ev
                    .dyn_ref::<web::TouchEvent>()
                    .and_then(input::first_touch_client);
                if let Some(client) = client {
                    tracked.moved(client);
                }
            })?);
        }

        // the surface moves under a still pointer
        {
            let tracked = tracked.clone();
            listeners.push(EventListener::new(&window, "scroll", move |_| {
                if tracked.client.is_known() {
                    tracked.relocate();
                }
            })?);
        }

        for event in ["touchend", "touchcancel"] {
            let tracked = tracked.clone();
            listeners.push(EventListener::new(&window, event, move |_| tracked.left())?);
        }

        {
            let tracked = tracked.clone();
            listeners.push(EventListener::new(&document, "mouseleave", move |_| {
                tracked.left()
            })?);
        }

        log::debug!("[pointer] tracking attached ({:?})", bounds);
        Ok(Self {
            _listeners: listeners,
        })
    }
}
