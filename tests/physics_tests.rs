// Host-side tests for the integration step.

use folio_core::physics::falloff;
use folio_core::{step, Entity, Field, InfluenceRadius, Tuning};
use glam::Vec2;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn pointer_inside_radius_pushes_away_and_activates() {
    let mut e = Entity::new(Vec2::ZERO, ());
    step(
        &mut e,
        Some(Vec2::new(10.0, 0.0)),
        InfluenceRadius::new(50.0),
        &Tuning::default(),
    );
    assert!(e.activated);
    // force 0.8, impulse 0.8² * 2.5, then friction
    let expected = -(0.8f32 * 0.8 * 2.5) * 0.92;
    assert!(approx(e.velocity.x, expected), "vx = {}", e.velocity.x);
    assert!(approx(e.velocity.y, 0.0));
    assert!(approx(e.offset.x, expected));
    assert!(approx(e.activation, 0.05));
}

#[test]
fn pointer_on_the_radius_has_no_effect() {
    let mut e = Entity::new(Vec2::ZERO, ());
    step(
        &mut e,
        Some(Vec2::new(50.0, 0.0)),
        InfluenceRadius::new(50.0),
        &Tuning::default(),
    );
    assert!(!e.activated);
    assert_eq!(e.velocity, Vec2::ZERO);
    assert_eq!(e.offset, Vec2::ZERO);
}

#[test]
fn pointer_exactly_on_entity_applies_no_impulse() {
    let mut e = Entity::new(Vec2::new(3.0, 4.0), ());
    step(
        &mut e,
        Some(Vec2::new(3.0, 4.0)),
        InfluenceRadius::new(50.0),
        &Tuning::default(),
    );
    assert!(!e.activated);
    assert!(e.offset.is_finite() && e.velocity.is_finite());
    assert_eq!(e.offset, Vec2::ZERO);
}

#[test]
fn displaced_entity_settles_back_without_pointer() {
    let mut e = Entity::new(Vec2::new(100.0, 100.0), ());
    e.offset = Vec2::new(50.0, 50.0);
    let tuning = Tuning::default();
    for _ in 0..200 {
        step(&mut e, None, InfluenceRadius::new(50.0), &tuning);
    }
    assert!(e.offset.length() < 0.01, "offset = {:?}", e.offset);
    assert_eq!(e.rest(), Vec2::new(100.0, 100.0));
}

#[test]
fn pushed_entity_settles_once_pointer_leaves() {
    let mut e = Entity::new(Vec2::ZERO, ());
    let tuning = Tuning::default();
    let radius = InfluenceRadius::new(50.0);
    for _ in 0..10 {
        step(&mut e, Some(Vec2::new(5.0, 5.0)), radius, &tuning);
    }
    assert!(e.offset.length() > 1.0);
    for _ in 0..300 {
        step(&mut e, None, radius, &tuning);
    }
    assert!(e.offset.length() < 0.01);
    assert!(e.velocity.length() < 0.01);
}

#[test]
fn activation_climbs_to_one_and_stays_latched() {
    let mut e = Entity::new(Vec2::ZERO, ());
    let tuning = Tuning::default();
    let radius = InfluenceRadius::new(50.0);
    step(&mut e, Some(Vec2::new(10.0, 0.0)), radius, &tuning);

    let mut previous = e.activation;
    for _ in 0..40 {
        step(&mut e, None, radius, &tuning);
        assert!(e.activation >= previous);
        assert!((0.0..=1.0).contains(&e.activation));
        previous = e.activation;
    }
    assert!(e.activated);
    assert_eq!(e.activation, 1.0);
}

#[test]
fn deactivated_entity_fades_to_zero() {
    let mut e = Entity::new(Vec2::ZERO, ());
    e.activation = 0.12;
    let tuning = Tuning::default();
    for _ in 0..5 {
        step(&mut e, None, InfluenceRadius::new(50.0), &tuning);
        assert!(e.activation >= 0.0);
    }
    assert_eq!(e.activation, 0.0);
}

#[test]
fn same_inputs_give_same_states() {
    let build = || {
        Field::new(
            (0..20)
                .map(|i| Entity::new(Vec2::new(i as f32 * 7.0, (i % 4) as f32 * 9.0), ()))
                .collect(),
            Tuning::default(),
        )
    };
    let (mut a, mut b) = (build(), build());
    let path = [Vec2::new(10.0, 5.0), Vec2::new(30.0, 12.0), Vec2::new(70.0, 20.0)];
    for pointer in path.iter().copied().map(Some).chain([None, None]) {
        a.tick(pointer, InfluenceRadius::new(40.0));
        b.tick(pointer, InfluenceRadius::new(40.0));
    }
    assert_eq!(a.entities(), b.entities());
}

#[test]
fn ambient_tuning_only_changes_motion_coefficients() {
    let ambient = Tuning::ambient();
    let base = Tuning::default();
    assert_eq!(ambient.push, base.push);
    assert_eq!(ambient.activation_step, base.activation_step);
    assert!(ambient.friction > base.friction);
    assert!(ambient.spring > base.spring);
}

#[test]
fn falloff_is_linear_in_distance() {
    let r = InfluenceRadius::new(100.0);
    assert!(approx(falloff(25.0 * 25.0, r).unwrap(), 0.75));
    assert!(approx(falloff(50.0 * 50.0, r).unwrap(), 0.5));
}

#[test]
fn radius_below_minimum_is_clamped() {
    assert_eq!(InfluenceRadius::from(0.5).get(), 1.0);
    assert_eq!(InfluenceRadius::from(f32::INFINITY).get(), 1.0);
}
