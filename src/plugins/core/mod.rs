//! Core plugin: shared resources and global settings.

use crate::common::tunables::Tunables;
use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    let tunables = Tunables::default();
    info!(
        "Tunables: thrust {} / rotation {} deg/s, grace {}s, debug keys {}",
        tunables.main_thrust,
        tunables.rotation_thrust,
        tunables.transition_grace_secs,
        tunables.debug_mode_enabled
    );
    app.insert_resource(tunables);
    app.insert_resource(ClearColor(Color::srgb(0.04, 0.04, 0.09)));
}

#[cfg(test)]
mod tests;
