use crate::entity::{Entity, GridLayout};
use glam::Vec2;

/// Uniform particle lattice covering `size`, one particle every `gap`
/// pixels, walked column by column.
pub fn lattice(size: Vec2, gap: f32) -> Vec<Entity<()>> {
    if gap.is_nan() || gap <= 0.0 || !size.is_finite() || size.cmple(Vec2::ZERO).any() {
        return Vec::new();
    }
    let inset = gap * 0.5;
    let grid = GridLayout::new(Vec2::splat(gap), Vec2::splat(inset));
    // particles sit strictly inside the surface
    let count = |extent: f32| ((extent - inset) / gap).ceil().max(0.0) as usize;
    let (columns, rows) = (count(size.x), count(size.y));
    let mut particles = Vec::with_capacity(columns * rows);
    for column in 0..columns {
        for row in 0..rows {
            particles.push(Entity::new(grid.rest_position(column, row), ()));
        }
    }
    particles
}

/// Per-axis scale between two surface sizes, `None` if `old` is degenerate.
pub fn resize_ratio(old: Vec2, new: Vec2) -> Option<Vec2> {
    if old.cmple(Vec2::ZERO).any() || new.cmple(Vec2::ZERO).any() {
        return None;
    }
    let ratio = new / old;
    ratio.is_finite().then_some(ratio)
}

/// What a lattice should do when its surface changes size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceChange {
    /// Leave the particles (and the recorded size) alone.
    Keep,
    /// Scale the existing particles by this per-axis ratio.
    Rescale(Vec2),
    /// Lay out a fresh lattice over the new size.
    Rebuild,
}

/// Decides how a lattice built for `old` follows the surface to `new`.
///
/// A degenerate `new` keeps the current particles so they survive a
/// collapsed viewport. An empty field or a degenerate `old` has nothing
/// to scale from and is rebuilt.
pub fn plan_resize(old: Vec2, new: Vec2, populated: bool) -> SurfaceChange {
    if !new.is_finite() || new.cmple(Vec2::ZERO).any() || new == old {
        return SurfaceChange::Keep;
    }
    if !populated {
        return SurfaceChange::Rebuild;
    }
    resize_ratio(old, new).map_or(SurfaceChange::Rebuild, SurfaceChange::Rescale)
}
