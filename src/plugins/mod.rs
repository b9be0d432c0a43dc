//! Feature plugins.

use bevy::prelude::*;

pub mod core;
pub mod level;
pub mod oscillator;
pub mod physics;
pub mod rocket;
pub mod world;

// Render-only
pub mod camera;
pub mod lighting;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    level::plugin(app);
    world::plugin(app);
    oscillator::plugin(app);
    rocket::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    lighting::plugin(app);
    camera::plugin(app);
}
