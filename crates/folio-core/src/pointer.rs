use crate::physics::InfluenceRadius;
use glam::Vec2;
use std::cell::Cell;

/// Latest pointer position for one mounted view.
///
/// Input handlers are the only writers of the position and the scene is
/// the only reader. Each write replaces the previous value; intermediate
/// positions between two frames are dropped.
#[derive(Debug)]
pub struct PointerState {
    position: Cell<Option<Vec2>>,
    radius: Cell<InfluenceRadius>,
}

impl PointerState {
    pub fn new(radius: impl Into<InfluenceRadius>) -> Self {
        Self {
            position: Cell::new(None),
            radius: Cell::new(radius.into()),
        }
    }

    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.position.get()
    }

    #[inline]
    pub fn set_position(&self, position: Vec2) {
        self.position.set(Some(position));
    }

    /// Marks the pointer as absent, e.g. when a touch ends.
    #[inline]
    pub fn clear(&self) {
        self.position.set(None);
    }

    #[inline]
    pub fn radius(&self) -> InfluenceRadius {
        self.radius.get()
    }

    /// Sets the influence radius, clamping unusable values.
    pub fn set_radius(&self, radius: f32) {
        self.radius.set(InfluenceRadius::new(radius));
    }
}
