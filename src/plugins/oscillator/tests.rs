use std::time::Duration;

use bevy::prelude::*;

use super::{movement_factor, Oscillator};
use crate::common::test_utils::run_system_once;

const EPS: f32 = 1e-5;

#[test]
fn factor_starts_at_origin_and_peaks_mid_period() {
    assert!(movement_factor(0.0, 10.0).unwrap().abs() < EPS);
    assert!((movement_factor(5.0, 10.0).unwrap() - 1.0).abs() < EPS);
    assert!((movement_factor(2.5, 10.0).unwrap() - 0.5).abs() < EPS);
    assert!(movement_factor(10.0, 10.0).unwrap().abs() < EPS);
}

#[test]
fn factor_stays_in_unit_range() {
    for i in 0..=400 {
        let t = i as f32 * 0.137;
        let f = movement_factor(t, 3.0).unwrap();
        assert!((-EPS..=1.0 + EPS).contains(&f), "t={t} f={f}");
    }
}

#[test]
fn zero_or_negative_period_is_inert() {
    assert_eq!(movement_factor(3.0, 0.0), None);
    assert_eq!(movement_factor(3.0, -1.0), None);
}

#[test]
fn oscillate_records_origin_and_offsets_from_it() {
    let mut world = World::new();
    let mut time = Time::<()>::default();
    time.advance_by(Duration::from_secs_f32(2.0));
    world.insert_resource(time);

    let e = world
        .spawn((
            Oscillator::new(4.0, Vec3::new(0.0, 100.0, 0.0)),
            Transform::from_xyz(10.0, 20.0, 0.0),
        ))
        .id();

    run_system_once(&mut world, super::oscillate);

    // Half a period in: full travel.
    let tf = world.get::<Transform>(e).unwrap();
    assert!((tf.translation - Vec3::new(10.0, 120.0, 0.0)).length() < 1e-3);
    assert_eq!(
        world.get::<Oscillator>(e).unwrap().origin(),
        Some(Vec3::new(10.0, 20.0, 0.0))
    );

    // Origin is not re-captured from the moved transform.
    run_system_once(&mut world, super::oscillate);
    let tf = world.get::<Transform>(e).unwrap();
    assert!((tf.translation - Vec3::new(10.0, 120.0, 0.0)).length() < 1e-3);
}

#[test]
fn default_matches_ten_second_drop() {
    let osc = Oscillator::default();
    assert_eq!(osc.period, 10.0);
    assert_eq!(osc.movement, Vec3::new(0.0, -10.0, 0.0));
    assert_eq!(osc.origin(), None);
}
