//! Adapter contract between a field and its drawing surface, plus the
//! appearance rules each adapter applies.

use crate::color::Rgb;
use crate::constants::{
    AMBIENT_DARK, AMBIENT_LIGHT, RAMP_ACTIVE_DARK, RAMP_ACTIVE_LIGHT, RAMP_RESTING_DARK,
    RAMP_RESTING_LIGHT, RAMP_THRESHOLDS,
};
use crate::entity::Entity;
use crate::error::RenderError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn from_light(is_light: bool) -> Self {
        if is_light {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn is_light(self) -> bool {
        matches!(self, Theme::Light)
    }
}

/// Maps entity state to something visible.
///
/// `render` failing for one entity only skips that entity for the frame;
/// `begin_frame` failing skips the whole frame. Neither stops the loop.
pub trait RenderAdapter<V> {
    fn begin_frame(&mut self, _theme: Theme) -> Result<(), RenderError> {
        Ok(())
    }

    /// Whether the entity's own target (e.g. its DOM node) exists. When it
    /// does not, the entity is neither stepped nor drawn this frame.
    fn target_ready(&self, _entity: &Entity<V>) -> bool {
        true
    }

    fn render(&mut self, entity: &Entity<V>, theme: Theme) -> Result<(), RenderError>;

    fn end_frame(&mut self) {}

    /// Clears activation on every entity; motion is left to relax.
    fn reset(&mut self, entities: &mut [Entity<V>]) {
        for entity in entities {
            entity.deactivate();
        }
    }
}

/// Ramp index for a day's contribution count: 0, <2, <5, <10, rest.
pub fn intensity_bucket(count: u32) -> usize {
    if count == 0 {
        return 0;
    }
    RAMP_THRESHOLDS
        .iter()
        .position(|&upper| count < upper)
        .map_or(RAMP_THRESHOLDS.len() + 1, |i| i + 1)
}

/// Step-function color of a calendar cell, gated by `activated` only.
pub fn cell_color(count: u32, activated: bool, theme: Theme) -> Rgb {
    let ramp = match (activated, theme) {
        (false, Theme::Light) => &RAMP_RESTING_LIGHT,
        (false, Theme::Dark) => &RAMP_RESTING_DARK,
        (true, Theme::Light) => &RAMP_ACTIVE_LIGHT,
        (true, Theme::Dark) => &RAMP_ACTIVE_DARK,
    };
    ramp[intensity_bucket(count)]
}

/// Logo dot color: grayscale of `target` at 0, full `target` at 1.
pub fn dot_color(target: Rgb, activation: f32) -> Rgb {
    if activation <= 0.0 {
        target.grayscale()
    } else if activation >= 1.0 {
        target
    } else {
        target.grayscale().lerp(target, activation)
    }
}

pub fn ambient_color(theme: Theme) -> Rgb {
    match theme {
        Theme::Light => AMBIENT_LIGHT,
        Theme::Dark => AMBIENT_DARK,
    }
}
