//! One tick of the pointer-repulsion / spring-return model.
//!
//! The offset update folds velocity and the restoring pull into a single
//! line (`offset += velocity - offset * spring`) rather than integrating
//! an acceleration. Settling behavior depends on that exact form.

use crate::constants::{
    ACTIVATION_STEP, AMBIENT_FRICTION, AMBIENT_SPRING, FRICTION, MIN_INFLUENCE_RADIUS,
    PUSH_COEFFICIENT, SPRING,
};
use crate::entity::Entity;
use glam::Vec2;

/// Per-field coefficients for the integration step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    pub push: f32,
    pub friction: f32,
    pub spring: f32,
    pub activation_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            push: PUSH_COEFFICIENT,
            friction: FRICTION,
            spring: SPRING,
            activation_step: ACTIVATION_STEP,
        }
    }
}

impl Tuning {
    /// Looser, snappier motion for the full-viewport background.
    pub fn ambient() -> Self {
        Self {
            friction: AMBIENT_FRICTION,
            spring: AMBIENT_SPRING,
            ..Self::default()
        }
    }
}

/// Distance within which entities feel the pointer.
///
/// Always finite and at least `MIN_INFLUENCE_RADIUS`, so the falloff
/// division is safe.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct InfluenceRadius(f32);

impl InfluenceRadius {
    pub fn new(radius: f32) -> Self {
        if radius.is_finite() && radius >= MIN_INFLUENCE_RADIUS {
            Self(radius)
        } else {
            if radius != 0.0 {
                log::debug!("[physics] clamping influence radius {radius} to minimum");
            }
            Self(MIN_INFLUENCE_RADIUS)
        }
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl From<f32> for InfluenceRadius {
    fn from(radius: f32) -> Self {
        Self::new(radius)
    }
}

/// Linear falloff: 1 at the pointer, 0 at the radius.
///
/// Returns `None` when the entity sits exactly under the pointer or on or
/// beyond the radius; no impulse applies in either case.
#[inline]
pub fn falloff(distance_sq: f32, radius: InfluenceRadius) -> Option<f32> {
    let r = radius.get();
    if distance_sq > 0.0 && distance_sq < r * r {
        let distance = distance_sq.sqrt();
        Some((r - distance) / r)
    } else {
        None
    }
}

/// Advances `entity` by one tick against the current pointer.
pub fn step<V>(
    entity: &mut Entity<V>,
    pointer: Option<Vec2>,
    radius: InfluenceRadius,
    tuning: &Tuning,
) {
    if let Some(pointer) = pointer {
        let d = pointer - entity.position();
        if let Some(force) = falloff(d.length_squared(), radius) {
            let angle = d.y.atan2(d.x);
            let push = force * force * tuning.push;
            entity.velocity -= push * Vec2::new(angle.cos(), angle.sin());
            entity.activated = true;
        }
    }

    entity.velocity *= tuning.friction;
    entity.offset += entity.velocity + (Vec2::ZERO - entity.offset) * tuning.spring;

    entity.activation = if entity.activated {
        (entity.activation + tuning.activation_step).min(1.0)
    } else {
        (entity.activation - tuning.activation_step).max(0.0)
    };
}
