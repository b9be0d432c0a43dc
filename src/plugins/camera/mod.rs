//! Camera plugin (render-only): keeps the rocket in view.
//!
//! Rocket and camera both have a `Transform`, so the two `Single`s are made
//! disjoint with `Without<...>` filters (otherwise B0001).

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::rocket::Rocket;

#[derive(Component)]
pub struct MainCamera {
    pub responsiveness: f32,
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(
            PostUpdate,
            follow_rocket
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera { responsiveness: 3.0 },
        FireflyConfig::default(),
        Transform::from_xyz(0.0, 300.0, 999.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn follow_rocket(
    time: Res<Time>,
    rocket: Option<Single<&Transform, (With<Rocket>, Without<MainCamera>)>>,
    cam: Option<Single<(&mut Transform, &MainCamera), Without<Rocket>>>,
) {
    let (Some(rocket), Some(cam)) = (rocket, cam) else {
        return;
    };
    let (mut tf_cam, main_cam) = cam.into_inner();

    let dt = time.delta_secs();
    let alpha = 1.0 - (-main_cam.responsiveness * dt).exp();

    // Horizontal only; the arena fits the view vertically.
    tf_cam.translation.x += (rocket.translation.x - tf_cam.translation.x) * alpha;
}
