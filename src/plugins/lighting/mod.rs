//! Lighting plugin (Firefly) (render-only).
//!
//! Stands in for the particle effects: the rocket's light takes the colour of
//! whichever emitter is running.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::rocket::{Rocket, RocketEmitters};

#[derive(Component)]
pub struct RocketLight;

const IDLE_RANGE: f32 = 220.0;
const BURN_RANGE: f32 = 420.0;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::InGame), setup)
        .add_systems(Update, follow_rocket_light.run_if(in_state(GameState::InGame)));
}

fn setup(mut commands: Commands) {
    commands.spawn((
        Name::new("RocketLight"),
        RocketLight,
        PointLight2d {
            color: Color::srgb(1.0, 0.9, 0.75),
            radius: IDLE_RANGE,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
        DespawnOnExit(GameState::InGame),
    ));
}

/// Colour and range of the light for the current emitter set.
pub fn emitter_glow(emitters: &RocketEmitters) -> (Color, f32) {
    if emitters.death {
        (Color::srgb(1.0, 0.25, 0.15), BURN_RANGE)
    } else if emitters.victory {
        (Color::srgb(0.35, 1.0, 0.45), BURN_RANGE)
    } else if emitters.engine {
        (Color::srgb(1.0, 0.6, 0.2), BURN_RANGE)
    } else {
        (Color::srgb(1.0, 0.9, 0.75), IDLE_RANGE)
    }
}

fn follow_rocket_light(
    q_rocket: Query<(&Transform, &RocketEmitters), (With<Rocket>, Without<RocketLight>)>,
    mut q_light: Query<(&mut Transform, &mut PointLight2d), (With<RocketLight>, Without<Rocket>)>,
) {
    let Ok((tf_rocket, emitters)) = q_rocket.single() else {
        return;
    };
    let Ok((mut tf_light, mut light)) = q_light.single_mut() else {
        return;
    };

    tf_light.translation.x = tf_rocket.translation.x;
    tf_light.translation.y = tf_rocket.translation.y;

    let (color, range) = emitter_glow(emitters);
    light.color = color;
    light.radius = range;
}
