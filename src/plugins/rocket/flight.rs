//! Flight controller: control intent → physics requests.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::body::PhysicsRequest;
use super::intent::ControlIntent;
use super::lifecycle::FlightState;

/// Owned per rocket. Non-positive magnitudes are valid and just do nothing useful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrustConfig {
    pub main_thrust: f32,
    pub rotation_thrust: f32,
}

impl From<&Tunables> for ThrustConfig {
    fn from(t: &Tunables) -> Self {
        Self {
            main_thrust: t.main_thrust,
            rotation_thrust: t.rotation_thrust,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrustSignal {
    Active,
    Inactive,
}

/// Push this tick's requests into `out`.
///
/// A rocket that is no longer `Alive` emits nothing, not even a thrust signal.
/// Magnitudes are scaled by `dt`, so held input accumulates per second of play.
pub fn fly(
    state: FlightState,
    intent: &ControlIntent,
    config: &ThrustConfig,
    dt: f32,
    out: &mut Vec<PhysicsRequest>,
) -> Option<ThrustSignal> {
    if !state.is_alive() {
        return None;
    }

    let signal = if intent.thrust_held {
        out.push(PhysicsRequest::Impulse(Vec2::Y * config.main_thrust * dt));
        ThrustSignal::Active
    } else {
        ThrustSignal::Inactive
    };

    let direction = match (intent.rotate_left, intent.rotate_right) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => return Some(signal),
    };

    out.extend([
        PhysicsRequest::SuspendRotation,
        PhysicsRequest::Torque(direction * config.rotation_thrust * dt),
        PhysicsRequest::ResumeRotation,
    ]);

    Some(signal)
}
