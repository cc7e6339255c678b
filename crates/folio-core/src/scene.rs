//! Body of one animation frame: step every entity, then hand it to the
//! adapter. The platform layer decides when frames happen.

use crate::entity::Entity;
use crate::field::Field;
use crate::physics;
use crate::pointer::PointerState;
use crate::render::{RenderAdapter, Theme};
use glam::Vec2;
use std::rc::Rc;

/// Counters for a single frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub stepped: usize,
    pub rendered: usize,
    pub skipped: usize,
}

pub struct Scene<V, A> {
    field: Field<V>,
    adapter: A,
    pointer: Rc<PointerState>,
    theme: Theme,
    pending_resize: Option<Vec2>,
}

impl<V, A: RenderAdapter<V>> Scene<V, A> {
    pub fn new(field: Field<V>, adapter: A, pointer: Rc<PointerState>, theme: Theme) -> Self {
        Self {
            field,
            adapter,
            pointer,
            theme,
            pending_resize: None,
        }
    }

    pub fn field(&self) -> &Field<V> {
        &self.field
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn pointer(&self) -> &Rc<PointerState> {
        &self.pointer
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Queues a proportional rescale; it lands before the next tick reads
    /// any position. Multiple requests between frames compose.
    pub fn request_resize(&mut self, ratio: Vec2) {
        if !ratio.is_finite() || ratio.cmple(Vec2::ZERO).any() {
            log::warn!("[scene] ignoring resize ratio {ratio:?}");
            return;
        }
        self.pending_resize = Some(self.pending_resize.map_or(ratio, |r| r * ratio));
    }

    /// Installs a new entity set, dropping any queued rescale.
    pub fn replace_entities(&mut self, entities: Vec<Entity<V>>) {
        self.pending_resize = None;
        self.field.replace(entities);
    }

    pub fn reset(&mut self) {
        self.adapter.reset(self.field.entities_mut());
    }

    pub fn frame(&mut self) -> FrameStats {
        if let Some(ratio) = self.pending_resize.take() {
            self.field.rescale(ratio);
        }

        let mut stats = FrameStats::default();
        if let Err(e) = self.adapter.begin_frame(self.theme) {
            log::debug!("[scene] frame skipped: {e}");
            stats.skipped = self.field.len();
            return stats;
        }

        let pointer = self.pointer.position();
        let radius = self.pointer.radius();
        let tuning = self.field.tuning;
        for entity in self.field.entities_mut() {
            if !self.adapter.target_ready(entity) {
                stats.skipped += 1;
                continue;
            }
            physics::step(entity, pointer, radius, &tuning);
            stats.stepped += 1;
            match self.adapter.render(entity, self.theme) {
                Ok(()) => stats.rendered += 1,
                Err(e) => {
                    log::debug!("[scene] {e}");
                    stats.skipped += 1;
                }
            }
        }
        self.adapter.end_frame();
        stats
    }
}
