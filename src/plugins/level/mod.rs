//! Level plugin: level index bookkeeping and scene reloads.
//!
//! Loading a level = set the index, then bounce through `GameState::Loading`.
//! Leaving `InGame` despawns everything scoped to it; entering it again
//! rebuilds the layout and a fresh rocket.

pub mod layouts;

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::rocket::lifecycle::SceneTransition;

use layouts::{LevelLayout, LEVELS};

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelRequest(pub SceneTransition);

pub trait LevelLoader {
    fn load_level(&mut self, index: usize);
    fn current_level_index(&self) -> usize;
    fn total_level_count(&self) -> usize;
}

/// Resolve a transition against the loader and load the result. Returns the target index.
pub fn resolve(transition: SceneTransition, loader: &mut impl LevelLoader) -> usize {
    let target =
        transition.target_index(loader.current_level_index(), loader.total_level_count());
    loader.load_level(target);
    target
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub current: usize,
    pub total: usize,
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self {
            current: 0,
            total: LEVELS.len(),
        }
    }
}

impl LevelProgress {
    /// Out-of-range indices fall back to the first level.
    pub fn layout(&self) -> &'static LevelLayout {
        LEVELS.get(self.current).unwrap_or(&LEVELS[0])
    }
}

struct SceneLoader<'a> {
    progress: &'a mut LevelProgress,
    next: &'a mut NextState<GameState>,
}

impl LevelLoader for SceneLoader<'_> {
    fn load_level(&mut self, index: usize) {
        self.progress.current = index;
        self.next.set(GameState::Loading);
        info!("Loading level {index} ({})", self.progress.layout().name);
    }

    fn current_level_index(&self) -> usize {
        self.progress.current
    }

    fn total_level_count(&self) -> usize {
        self.progress.total
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<LevelProgress>()
        .add_message::<LevelRequest>()
        .add_systems(OnEnter(GameState::Loading), finish_loading)
        .add_systems(
            PostUpdate,
            apply_level_requests.run_if(in_state(GameState::InGame)),
        );
}

fn apply_level_requests(
    mut requests: MessageReader<LevelRequest>,
    mut progress: ResMut<LevelProgress>,
    mut next: ResMut<NextState<GameState>>,
) {
    if requests.is_empty() {
        return;
    }

    let mut loader = SceneLoader {
        progress: &mut *progress,
        next: &mut *next,
    };
    for LevelRequest(transition) in requests.read() {
        resolve(*transition, &mut loader);
    }
}

fn finish_loading(mut next: ResMut<NextState<GameState>>) {
    next.set(GameState::InGame);
}

#[cfg(test)]
mod tests;
