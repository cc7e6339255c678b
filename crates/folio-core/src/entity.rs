//! Per-entity simulation record shared by every field.
//!
//! An entity is a dot, cell or particle anchored at a rest position. The
//! integration step only ever moves `offset`; the rest position changes
//! solely when the render surface is rescaled.

use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct Entity<V> {
    rest: Vec2,
    pub offset: Vec2,
    pub velocity: Vec2,
    /// Set once the pointer has come within the influence radius.
    pub activated: bool,
    /// Eased progress toward the activated appearance, always in \[0, 1\].
    pub activation: f32,
    /// Rendering payload fixed at construction (color, bucket, cell key).
    pub visual: V,
}

impl<V> Entity<V> {
    pub fn new(rest: Vec2, visual: V) -> Self {
        Self {
            rest,
            offset: Vec2::ZERO,
            velocity: Vec2::ZERO,
            activated: false,
            activation: 0.0,
            visual,
        }
    }

    #[inline]
    pub fn rest(&self) -> Vec2 {
        self.rest
    }

    /// Absolute position, `rest + offset`.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.rest + self.offset
    }

    /// Clears the activation state without touching motion.
    pub fn deactivate(&mut self) {
        self.activated = false;
        self.activation = 0.0;
    }

    /// Scales rest position and offset together so the entity keeps its
    /// place relative to a resized surface.
    pub fn rescale(&mut self, ratio: Vec2) {
        self.rest *= ratio;
        self.offset *= ratio;
    }
}

/// Uniform grid placement: `(column, row) * pitch + inset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub pitch: Vec2,
    pub inset: Vec2,
}

impl GridLayout {
    pub fn new(pitch: Vec2, inset: Vec2) -> Self {
        Self { pitch, inset }
    }

    /// Square cells of `size` separated by `gap`, centered in each cell.
    pub fn centered(size: f32, gap: Vec2) -> Self {
        Self::new(Vec2::splat(size) + gap, Vec2::splat(size * 0.5))
    }

    #[inline]
    pub fn rest_position(&self, column: usize, row: usize) -> Vec2 {
        Vec2::new(column as f32, row as f32) * self.pitch + self.inset
    }
}
