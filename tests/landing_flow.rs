//! End-to-end flow: contact → terminal state → grace period → scene reload.
//!
//! Contacts are injected as `CollisionStart` messages rather than flown into,
//! which keeps the tests independent of the physics step.

mod common;

use avian2d::prelude::*;
use bevy::prelude::*;
use rocket_boost::plugins::level::LevelProgress;
use rocket_boost::plugins::rocket::lifecycle::FlightState;
use rocket_boost::plugins::rocket::Rocket;

fn touch(app: &mut App, rocket: Entity, other: Entity) {
    app.world_mut().write_message(CollisionStart {
        collider1: rocket,
        collider2: other,
        body1: Some(rocket),
        body2: Some(other),
    });
}

fn state_of(app: &App, rocket: Entity) -> Option<FlightState> {
    app.world().get::<Rocket>(rocket).map(Rocket::state)
}

fn level(app: &App) -> usize {
    app.world().resource::<LevelProgress>().current
}

#[test]
fn finish_pad_advances_to_next_level_after_grace() {
    let mut app = common::app_in_game();
    let rocket = common::rocket(&mut app).unwrap();
    let finish = common::named(&mut app, "FinishPad");

    touch(&mut app, rocket, finish);
    app.update();
    assert_eq!(state_of(&app, rocket), Some(FlightState::Transcending));

    // Still on level 0 well inside the grace period.
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(level(&app), 0);

    let mut frames = 0;
    while level(&app) == 0 && frames < 20 {
        app.update();
        frames += 1;
    }
    assert_eq!(level(&app), 1);

    // Scene reload: the old rocket is gone, a fresh one is flying.
    for _ in 0..3 {
        app.update();
    }
    assert!(app.world().get_entity(rocket).is_err());
    let fresh = common::rocket(&mut app).expect("rocket respawned");
    assert_eq!(state_of(&app, fresh), Some(FlightState::Alive));
}

#[test]
fn crash_restarts_first_level_with_new_rocket() {
    let mut app = common::app_in_game();
    let rocket = common::rocket(&mut app).unwrap();
    let ground = common::named(&mut app, "Ground");

    touch(&mut app, rocket, ground);
    app.update();
    assert_eq!(state_of(&app, rocket), Some(FlightState::Dying));

    let mut frames = 0;
    while app.world().get_entity(rocket).is_ok() && frames < 30 {
        app.update();
        frames += 1;
    }
    for _ in 0..3 {
        app.update();
    }

    assert_eq!(level(&app), 0);
    let fresh = common::rocket(&mut app).expect("rocket respawned");
    assert_ne!(fresh, rocket);
    assert_eq!(state_of(&app, fresh), Some(FlightState::Alive));
}

#[test]
fn friendly_pad_keeps_rocket_alive() {
    let mut app = common::app_in_game();
    let rocket = common::rocket(&mut app).unwrap();
    let pad = common::named(&mut app, "LaunchPad");

    touch(&mut app, rocket, pad);
    for _ in 0..15 {
        app.update();
    }

    assert_eq!(state_of(&app, rocket), Some(FlightState::Alive));
    assert_eq!(level(&app), 0);
}
