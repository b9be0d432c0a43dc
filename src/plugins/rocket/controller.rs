//! The rocket's per-tick decision step.
//!
//! [`Rocket::tick`] is a pure function of its inputs and the rocket's own
//! state. It never touches the world: the systems in `systems.rs` feed it and
//! apply what it returns.

use std::time::Duration;

use bevy::prelude::*;

use super::body::PhysicsRequest;
use super::feedback::{self, FeedbackRequest};
use super::flight::{self, ThrustConfig};
use super::intent::ControlIntent;
use super::lifecycle::{CollisionOutcome, FlightState, Lifecycle, SceneTransition};

#[derive(Component, Debug, Clone)]
pub struct Rocket {
    config: ThrustConfig,
    lifecycle: Lifecycle,
}

/// Everything one tick asks the host to do, in application order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutput {
    pub physics: Vec<PhysicsRequest>,
    pub feedback: Vec<FeedbackRequest>,
    pub scene: Vec<SceneTransition>,
}

impl Rocket {
    pub fn new(config: ThrustConfig, grace_secs: f32) -> Self {
        Self {
            config,
            lifecycle: Lifecycle::new(grace_secs),
        }
    }

    #[inline]
    pub fn state(&self) -> FlightState {
        self.lifecycle.state()
    }

    #[inline]
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// Order matters:
    /// 1. the pending transition counts down (one armed this tick waits for the next),
    /// 2. debug keys,
    /// 3. contacts, so a crash this tick already gates flight,
    /// 4. flight and its thrust feedback.
    pub fn tick(
        &mut self,
        dt: Duration,
        intent: &ControlIntent,
        contacts: impl IntoIterator<Item = CollisionOutcome>,
        engine_playing: bool,
    ) -> TickOutput {
        let mut out = TickOutput::default();

        if let Some(transition) = self.lifecycle.advance(dt) {
            info!("Grace period over: {transition:?}");
            out.scene.push(transition);
        }

        if intent.debug_toggle_collisions {
            let disabled = self.lifecycle.toggle_collisions();
            info!("Debug: collisions disabled = {disabled}");
        }
        if intent.debug_advance_level {
            out.scene.push(SceneTransition::AdvanceLevel);
        }

        for outcome in contacts {
            if let Some(event) = self.lifecycle.on_collision(outcome) {
                info!("Rocket {:?} after {outcome:?} contact", self.lifecycle.state());
                feedback::on_lifecycle(event, &mut out.feedback);
            }
        }

        let signal = flight::fly(
            self.lifecycle.state(),
            intent,
            &self.config,
            dt.as_secs_f32(),
            &mut out.physics,
        );
        if let Some(signal) = signal {
            feedback::on_thrust(signal, engine_playing, &mut out.feedback);
        }

        out
    }
}
