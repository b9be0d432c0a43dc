//! Input sampler.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

pub const THRUST_KEY: KeyCode = KeyCode::Space;
pub const ROTATE_LEFT_KEY: KeyCode = KeyCode::KeyA;
pub const ROTATE_RIGHT_KEY: KeyCode = KeyCode::KeyD;
pub const ADVANCE_LEVEL_KEY: KeyCode = KeyCode::KeyL;
pub const TOGGLE_COLLISIONS_KEY: KeyCode = KeyCode::KeyC;

/// One frame of control intent. Rebuilt every frame, never carried over.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlIntent {
    pub thrust_held: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub debug_advance_level: bool,
    pub debug_toggle_collisions: bool,
}

impl ControlIntent {
    /// Held keys steer; debug keys fire on the press edge and only when `debug_keys` is set.
    pub fn sample(keys: &ButtonInput<KeyCode>, debug_keys: bool) -> Self {
        Self {
            thrust_held: keys.pressed(THRUST_KEY),
            rotate_left: keys.pressed(ROTATE_LEFT_KEY),
            rotate_right: keys.pressed(ROTATE_RIGHT_KEY),
            debug_advance_level: debug_keys && keys.just_pressed(ADVANCE_LEVEL_KEY),
            debug_toggle_collisions: debug_keys && keys.just_pressed(TOGGLE_COLLISIONS_KEY),
        }
    }
}

pub fn sample_control_intent(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    tunables: Res<Tunables>,
    mut intent: ResMut<ControlIntent>,
) {
    *intent = match keys {
        Some(keys) => ControlIntent::sample(&keys, tunables.debug_mode_enabled),
        None => ControlIntent::default(),
    };
}
