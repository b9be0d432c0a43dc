//! Startup configuration errors.

use bevy::prelude::Entity;

/// Errors that stop the game from starting.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A rocket was spawned without a collaborator it cannot fly without.
    #[error("rocket {entity} is missing its {dependency}")]
    MissingDependency {
        entity: Entity,
        dependency: &'static str,
    },
}
