//! Tick output, one message per rocket per concern.
//!
//! Each message carries the whole batch for the tick, because request order
//! matters: a torque only steers the transform between its
//! `SuspendRotation` / `ResumeRotation` pair.

use bevy::prelude::*;

use super::body::PhysicsRequest;
use super::feedback::FeedbackRequest;

#[derive(Message, Clone, Debug)]
pub struct RocketPhysics {
    pub rocket: Entity,
    pub requests: Vec<PhysicsRequest>,
}

#[derive(Message, Clone, Debug)]
pub struct RocketFeedback {
    pub rocket: Entity,
    pub requests: Vec<FeedbackRequest>,
}
