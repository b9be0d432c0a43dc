//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    /// Downward acceleration in m/s², scaled by `pixels_per_meter` for physics.
    pub gravity: f32,
    pub rocket_mass: f32,
    /// Impulse per second of held thrust, along the rocket's local up.
    pub main_thrust: f32,
    /// Degrees per second of held rotation.
    pub rotation_thrust: f32,
    /// Delay between a landing or crash and the scene change.
    pub transition_grace_secs: f32,
    /// Enables the level-skip and collision-toggle keys. Fixed at startup.
    pub debug_mode_enabled: bool,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            gravity: 9.81,
            rocket_mass: 1.0,
            main_thrust: 600.0,
            rotation_thrust: 180.0,
            transition_grace_secs: 1.0,
            debug_mode_enabled: cfg!(debug_assertions),
        }
    }
}
