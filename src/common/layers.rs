//! Collision layers.

use avian2d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug)]
pub enum Layer {
    #[default]
    Default,
    Terrain,
    Rocket,
}

/// Terrain only needs to report contacts against rockets.
pub fn terrain_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Terrain, [Layer::Rocket])
}

pub fn rocket_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Rocket, [Layer::Terrain, Layer::Rocket])
}
