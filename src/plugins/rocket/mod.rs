//! Rocket plugin: input → decision tick → physics / feedback / level requests.
//!
//! # Data flow
//! ```text
//!   Update schedule (variable dt), chained
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) sample_control_intent                                                 │
//!│      - reads: ButtonInput<KeyCode>, Tunables.debug_mode_enabled            │
//!│      - writes: ControlIntent                                               │
//!│                                                                            │
//!│  (B) classify_contacts                                                     │
//!│      - reads: CollisionStart (Avian), ContactTag, ClassificationTable      │
//!│      - writes: RocketContact message                                       │
//!│                                                                            │
//!│  (C) tick_rockets: Rocket::tick (pure)                                     │
//!│      - reads: Time, ControlIntent, RocketContact, RocketAudio              │
//!│      - mutates: Rocket (FlightState + TransitionTimer)                     │
//!│      - writes: RocketPhysics, RocketFeedback, LevelRequest messages        │
//!│                                                                            │
//!│  (D) apply_physics_requests                                                │
//!│      - mutates: Transform, LinearVelocity, AngularVelocity (AvianBody)     │
//!│                                                                            │
//!│  (E) apply_feedback_requests                                               │
//!│      - mutates: RocketAudio, RocketEmitters                                │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   PostUpdate: level plugin consumes LevelRequest
//! ```
//!
//! `Rocket` is the single writer of flight state. Collision outcomes are read
//! in the same tick that reports them, before flight runs, so a crash gates
//! input immediately.

pub mod body;
pub mod components;
pub mod contacts;
pub mod controller;
pub mod feedback;
pub mod flight;
pub mod intent;
pub mod lifecycle;
pub mod messages;
pub mod systems;

use bevy::prelude::*;

use crate::common::state::GameState;

pub use components::{RocketAudio, RocketEmitters};
pub use controller::Rocket;

pub fn plugin(app: &mut App) {
    app.init_resource::<intent::ControlIntent>()
        .init_resource::<contacts::ClassificationTable>()
        .add_message::<contacts::RocketContact>()
        .add_message::<messages::RocketPhysics>()
        .add_message::<messages::RocketFeedback>()
        .add_systems(
            OnEnter(GameState::InGame),
            (systems::spawn_rocket, systems::verify_rocket_rig).chain(),
        )
        .add_systems(
            Update,
            (
                intent::sample_control_intent,
                contacts::classify_contacts,
                systems::tick_rockets,
                systems::apply_physics_requests,
                systems::apply_feedback_requests,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
}
