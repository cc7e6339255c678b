// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn physics_coefficients_are_stable() {
    assert!(PUSH_COEFFICIENT > 0.0);
    assert!(FRICTION > 0.0 && FRICTION < 1.0);
    assert!(SPRING > 0.0 && SPRING < 1.0);
    assert!(AMBIENT_FRICTION > 0.0 && AMBIENT_FRICTION < 1.0);
    assert!(AMBIENT_SPRING > 0.0 && AMBIENT_SPRING < 1.0);
    assert!(ACTIVATION_STEP > 0.0 && ACTIVATION_STEP <= 1.0);
    assert!(MIN_INFLUENCE_RADIUS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn slider_range_contains_default_radius() {
    assert!(SLIDER_MIN <= CONTRIBUTION_RADIUS);
    assert!(CONTRIBUTION_RADIUS <= CONTRIBUTION_RADIUS_MAX);
    assert_eq!((CONTRIBUTION_RADIUS - SLIDER_MIN) % CONTRIBUTION_RADIUS_STEP, 0.0);
    assert_eq!((CONTRIBUTION_RADIUS_MAX - SLIDER_MIN) % CONTRIBUTION_RADIUS_STEP, 0.0);
}

#[test]
fn ramp_thresholds_are_increasing() {
    assert!(RAMP_THRESHOLDS.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(RAMP_RESTING_LIGHT.len(), RAMP_THRESHOLDS.len() + 2);
    assert_eq!(RAMP_ACTIVE_DARK.len(), RAMP_THRESHOLDS.len() + 2);
}

#[test]
fn luma_weights_sum_to_one() {
    let sum: f32 = LUMA_WEIGHTS.iter().sum();
    assert!((sum - 1.0).abs() < 1e-6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn surfaces_are_sensibly_sized() {
    assert!(AMBIENT_VIEWPORT_FRACTION > 0.0 && AMBIENT_VIEWPORT_FRACTION <= 1.0);
    assert!(AMBIENT_GAP > AMBIENT_PARTICLE_RADIUS * 2.0);
    assert!(DOT_SPACING > 0.0 && DOT_SIZE > 0.0);
    assert!(SAMPLING_GRID_WIDTH > 0);
    assert!(CONTROLS_MARGIN_PX >= 0.0);
    assert!(CONTRIBUTIONS_ENDPOINT.starts_with('/'));
    assert!(CELL_ID_PREFIX.ends_with('-'));
}
