//! Physics body seam.
//!
//! The flight controller only speaks in [`PhysicsRequest`]s against a
//! [`PhysicsBody`]. [`AvianBody`] is the production body, borrowing the avian2d
//! components of one rocket for the length of one request batch.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Directives in body-local coordinates, applied in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhysicsRequest {
    Impulse(Vec2),
    /// Degrees about the local forward (z) axis, counter-clockwise positive.
    Torque(f32),
    SuspendRotation,
    ResumeRotation,
}

pub trait PhysicsBody {
    fn apply_local_impulse(&mut self, impulse: Vec2);
    fn apply_local_torque(&mut self, torque: f32);
    /// Toggle the integrator's own rotational response.
    fn set_auto_rotation(&mut self, enabled: bool);
}

impl PhysicsRequest {
    pub fn apply(self, body: &mut impl PhysicsBody) {
        match self {
            Self::Impulse(impulse) => body.apply_local_impulse(impulse),
            Self::Torque(torque) => body.apply_local_torque(torque),
            Self::SuspendRotation => body.set_auto_rotation(false),
            Self::ResumeRotation => body.set_auto_rotation(true),
        }
    }
}

pub struct AvianBody<'a> {
    transform: &'a mut Transform,
    linear: &'a mut LinearVelocity,
    angular: &'a mut AngularVelocity,
    inverse_mass: f32,
    auto_rotation: bool,
}

impl<'a> AvianBody<'a> {
    pub fn new(
        transform: &'a mut Transform,
        linear: &'a mut LinearVelocity,
        angular: &'a mut AngularVelocity,
        inverse_mass: f32,
    ) -> Self {
        Self {
            transform,
            linear,
            angular,
            inverse_mass,
            auto_rotation: true,
        }
    }
}

impl PhysicsBody for AvianBody<'_> {
    fn apply_local_impulse(&mut self, impulse: Vec2) {
        let world = (self.transform.rotation * impulse.extend(0.0)).truncate();
        self.linear.0 += world * self.inverse_mass;
    }

    fn apply_local_torque(&mut self, torque: f32) {
        let radians = torque.to_radians();
        if self.auto_rotation {
            self.angular.0 += radians;
        } else {
            // Manual steering: turn the body itself, nothing for the solver to fight.
            self.transform.rotate_z(radians);
        }
    }

    fn set_auto_rotation(&mut self, enabled: bool) {
        if !enabled {
            self.angular.0 = 0.0;
        }
        self.auto_rotation = enabled;
    }
}
