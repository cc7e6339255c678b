use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// requestAnimationFrame driver that re-arms itself after every frame
/// until stopped.
///
/// `stop` cancels the pending frame, so no frame body runs after it
/// returns. Dropping the loop stops it.
pub struct AnimationLoop {
    state: Rc<LoopState>,
}

struct LoopState {
    running: Cell<bool>,
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl AnimationLoop {
    /// Creates an idle loop around `frame`; call `start` to run it.
    pub fn new(mut frame: impl FnMut() + 'static) -> Self {
        let state = Rc::new(LoopState {
            running: Cell::new(false),
            handle: Cell::new(None),
            callback: RefCell::new(None),
        });
        let weak = Rc::downgrade(&state);
        let closure = Closure::wrap(Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.handle.set(None);
            if !state.running.get() {
                return;
            }
            frame();
            state.arm();
        }) as Box<dyn FnMut()>);
        *state.callback.borrow_mut() = Some(closure);
        Self { state }
    }

    pub fn start(&self) {
        if self.state.running.replace(true) {
            return;
        }
        self.state.arm();
    }

    pub fn stop(&self) {
        self.state.running.set(false);
        if let Some(handle) = self.state.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(handle);
            }
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
        self.state.callback.borrow_mut().take();
    }
}

impl LoopState {
    fn arm(&self) {
        if !self.running.get() || self.handle.get().is_some() {
            return;
        }
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        let requested = web::window()
            .ok_or_else(|| JsValue::from_str("no window"))
            .and_then(|w| w.request_animation_frame(callback.as_ref().unchecked_ref()));
        match requested {
            Ok(handle) => self.handle.set(Some(handle)),
            Err(e) => {
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                self.running.set(false);
            }
        }
    }
}
