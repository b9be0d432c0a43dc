//! Global state machine.
//!
//! `Loading` is a one-frame pass-through: leaving `InGame` despawns every
//! scene-scoped entity, re-entering it rebuilds the current level.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    InGame,
}
