use glam::Vec2;
use std::cell::Cell;
use web_sys as web;

/// What happens to a pointer outside the tracked surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bounds {
    /// Outside the surface the pointer counts as absent.
    Clip,
    /// The pointer keeps acting past the surface edges.
    Unbounded,
}

/// Client-space box of a surface, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub fn of(el: &web::Element) -> Self {
        let rect = el.get_bounding_client_rect();
        Self {
            left: rect.left() as f32,
            top: rect.top() as f32,
            width: rect.width() as f32,
            height: rect.height() as f32,
        }
    }
}

/// Maps a client-space point into surface-local coordinates.
#[inline]
pub fn client_to_local(client: Vec2, rect: &SurfaceRect, bounds: Bounds) -> Option<Vec2> {
    let local = client - Vec2::new(rect.left, rect.top);
    match bounds {
        Bounds::Unbounded => Some(local),
        Bounds::Clip => {
            let inside = (0.0..=rect.width).contains(&local.x) && (0.0..=rect.height).contains(&local.y);
            inside.then_some(local)
        }
    }
}

/// Last pointer position in client space.
///
/// Local coordinates go stale when the surface moves under a still
/// pointer (page scroll), so they are re-derived from this on demand.
#[derive(Debug, Default)]
pub struct ClientPointer {
    last: Cell<Option<Vec2>>,
}

impl ClientPointer {
    pub fn record(&self, client: Vec2) {
        self.last.set(Some(client));
    }

    pub fn forget(&self) {
        self.last.set(None);
    }

    pub fn is_known(&self) -> bool {
        self.last.get().is_some()
    }

    /// Surface-local position of the last recorded client point.
    pub fn locate(&self, rect: &SurfaceRect, bounds: Bounds) -> Option<Vec2> {
        client_to_local(self.last.get()?, rect, bounds)
    }
}

#[inline]
pub fn mouse_client(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Client position of the first active touch, if any.
#[inline]
pub fn first_touch_client(ev: &web::TouchEvent) -> Option<Vec2> {
    let touch = ev.touches().get(0)?;
    Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
}

/// Snaps a raw slider value onto the `step` grid within `[min, max]`.
#[inline]
pub fn snap_slider(raw: f32, min: f32, max: f32, step: f32) -> f32 {
    if !raw.is_finite() {
        return min;
    }
    let clamped = raw.clamp(min, max);
    if step > 0.0 {
        (min + ((clamped - min) / step).round() * step).min(max)
    } else {
        clamped
    }
}
