use avian2d::prelude::*;
use bevy::ecs::error::BevyError;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{error::ConfigError, layers::rocket_layers, state::GameState, tunables::Tunables};
use crate::plugins::level::{LevelProgress, LevelRequest};

use super::body::AvianBody;
use super::components::{RocketAudio, RocketEmitters};
use super::contacts::RocketContact;
use super::controller::Rocket;
use super::feedback::AudioChannel;
use super::flight::ThrustConfig;
use super::intent::ControlIntent;
use super::messages::{RocketFeedback, RocketPhysics};

pub const ROCKET_SIZE: Vec2 = Vec2::new(16.0, 48.0);

pub fn spawn_rocket(mut commands: Commands, tunables: Res<Tunables>, progress: Res<LevelProgress>) {
    let start = progress.layout().rocket_start(ROCKET_SIZE.y);

    commands.spawn((
        Name::new("Rocket"),
        Rocket::new(ThrustConfig::from(&*tunables), tunables.transition_grace_secs),
        RocketAudio::default(),
        RocketEmitters::default(),
        Sprite {
            color: Color::srgb(0.85, 0.85, 0.9),
            custom_size: Some(ROCKET_SIZE),
            ..default()
        },
        Transform::from_translation(start.extend(1.0)),
        RigidBody::Dynamic,
        Collider::rectangle(ROCKET_SIZE.x, ROCKET_SIZE.y),
        Mass(tunables.rocket_mass),
        rocket_layers(),
        CollisionEventsEnabled,
        DespawnOnExit(GameState::InGame),
    ));
}

/// A rocket cannot fly without its body, audio channel and emitters.
pub fn check_rig(
    entity: Entity,
    has_body: bool,
    has_audio: bool,
    has_emitters: bool,
) -> Result<(), ConfigError> {
    let missing = [
        (has_body, "rigid body"),
        (has_audio, "audio channel"),
        (has_emitters, "particle emitters"),
    ]
    .into_iter()
    .find(|(present, _)| !present);

    match missing {
        Some((_, dependency)) => Err(ConfigError::MissingDependency { entity, dependency }),
        None => Ok(()),
    }
}

pub type RigQuery<'w, 's> = Query<
    'w,
    's,
    (Entity, Has<RigidBody>, Has<RocketAudio>, Has<RocketEmitters>),
    With<Rocket>,
>;

/// First broken rig among all rockets, if any.
pub fn check_rigs(q_rockets: &RigQuery) -> Result<(), ConfigError> {
    for (entity, has_body, has_audio, has_emitters) in q_rockets {
        check_rig(entity, has_body, has_audio, has_emitters)?;
    }
    Ok(())
}

pub fn verify_rocket_rig(q_rockets: RigQuery) -> Result<(), BevyError> {
    check_rigs(&q_rockets)?;
    Ok(())
}

pub fn tick_rockets(
    time: Res<Time>,
    intent: Res<ControlIntent>,
    mut contacts: MessageReader<RocketContact>,
    mut q_rockets: Query<(Entity, &mut Rocket, Option<&RocketAudio>)>,
    mut physics: MessageWriter<RocketPhysics>,
    mut feedback: MessageWriter<RocketFeedback>,
    mut levels: MessageWriter<LevelRequest>,
) {
    let dt = time.delta();
    let contacts: Vec<RocketContact> = contacts.read().copied().collect();

    for (entity, mut rocket, audio) in &mut q_rockets {
        let engine_playing = audio.is_some_and(|a| a.is_playing());
        let outcomes = contacts
            .iter()
            .filter(|c| c.rocket == entity)
            .map(|c| c.outcome);

        let out = rocket.tick(dt, &intent, outcomes, engine_playing);

        if !out.physics.is_empty() {
            physics.write(RocketPhysics {
                rocket: entity,
                requests: out.physics,
            });
        }
        if !out.feedback.is_empty() {
            feedback.write(RocketFeedback {
                rocket: entity,
                requests: out.feedback,
            });
        }
        for transition in out.scene {
            levels.write(LevelRequest(transition));
        }
    }
}

pub fn apply_physics_requests(
    mut reader: MessageReader<RocketPhysics>,
    mut q_bodies: Query<
        (
            &mut Transform,
            &mut LinearVelocity,
            &mut AngularVelocity,
            &ComputedMass,
        ),
        With<Rocket>,
    >,
) {
    for msg in reader.read() {
        let Ok((mut tf, mut linear, mut angular, mass)) = q_bodies.get_mut(msg.rocket) else {
            continue;
        };
        let mut body = AvianBody::new(&mut tf, &mut linear, &mut angular, mass.inverse());
        for &request in &msg.requests {
            request.apply(&mut body);
        }
    }
}

pub fn apply_feedback_requests(
    mut reader: MessageReader<RocketFeedback>,
    mut q_feedback: Query<(Option<&mut RocketAudio>, Option<&mut RocketEmitters>), With<Rocket>>,
) {
    for msg in reader.read() {
        let Ok((mut audio, mut emitters)) = q_feedback.get_mut(msg.rocket) else {
            continue;
        };
        for &request in &msg.requests {
            request.apply(audio.as_deref_mut(), emitters.as_deref_mut());
        }
    }
}
