//! World plugin: builds the current level's terrain.
//!
//! Ground and walls carry no tag, so touching them is fatal. Pads are tagged
//! for the contact classifier.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::terrain_layers, state::GameState};
use crate::plugins::level::layouts::{LevelLayout, ObstacleLayout, PAD_SIZE};
use crate::plugins::level::LevelProgress;
use crate::plugins::oscillator::Oscillator;
use crate::plugins::rocket::contacts::{ContactTag, FINISH_TAG, FRIENDLY_TAG};

const HALF_W: f32 = 640.0;
const HEIGHT: f32 = 720.0;
const THICKNESS: f32 = 30.0;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_level);
}

fn spawn_level(mut commands: Commands, progress: Res<LevelProgress>) {
    let layout = progress.layout();
    info!("Building level {} ({})", progress.current, layout.name);

    spawn_bounds(&mut commands);
    spawn_pads(&mut commands, layout);
    layout
        .obstacles
        .iter()
        .enumerate()
        .for_each(|(i, obstacle)| spawn_obstacle(&mut commands, i, obstacle));
}

fn spawn_bounds(commands: &mut Commands) {
    let color = Color::srgb(0.25, 0.27, 0.33);

    let mut spawn_wall = |name: &str, pos: Vec2, size: Vec2| {
        commands.spawn((
            Name::new(name.to_owned()),
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(pos.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            terrain_layers(),
            DespawnOnExit(GameState::InGame),
        ));
    };

    spawn_wall(
        "Ground",
        Vec2::new(0.0, -THICKNESS * 0.5),
        Vec2::new(HALF_W * 2.0 + THICKNESS * 2.0, THICKNESS),
    );
    spawn_wall(
        "WallLeft",
        Vec2::new(-HALF_W - THICKNESS * 0.5, HEIGHT * 0.5),
        Vec2::new(THICKNESS, HEIGHT),
    );
    spawn_wall(
        "WallRight",
        Vec2::new(HALF_W + THICKNESS * 0.5, HEIGHT * 0.5),
        Vec2::new(THICKNESS, HEIGHT),
    );
}

fn spawn_pads(commands: &mut Commands, layout: &LevelLayout) {
    let pads = [
        ("LaunchPad", layout.launch, FRIENDLY_TAG, Color::srgb(0.3, 0.5, 0.9)),
        ("FinishPad", layout.finish, FINISH_TAG, Color::srgb(0.3, 0.85, 0.4)),
    ];

    for (name, top, tag, color) in pads {
        commands.spawn((
            Name::new(name),
            ContactTag::new(tag),
            Sprite {
                color,
                custom_size: Some(PAD_SIZE),
                ..default()
            },
            Transform::from_translation((top - Vec2::Y * PAD_SIZE.y * 0.5).extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(PAD_SIZE.x, PAD_SIZE.y),
            terrain_layers(),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

fn spawn_obstacle(commands: &mut Commands, index: usize, obstacle: &ObstacleLayout) {
    let mut e = commands.spawn((
        Name::new(format!("Obstacle{index}")),
        Sprite {
            color: Color::srgb(0.8, 0.35, 0.25),
            custom_size: Some(obstacle.size),
            ..default()
        },
        Transform::from_translation(obstacle.pos.extend(0.0)),
        Collider::rectangle(obstacle.size.x, obstacle.size.y),
        terrain_layers(),
        DespawnOnExit(GameState::InGame),
    ));

    if obstacle.oscillates() {
        e.insert((
            RigidBody::Kinematic,
            Oscillator::new(obstacle.period, obstacle.swing.extend(0.0)),
        ));
    } else {
        e.insert(RigidBody::Static);
    }
}

#[cfg(test)]
mod tests;
