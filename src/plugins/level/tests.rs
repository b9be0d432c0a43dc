use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use super::layouts::LEVELS;
use super::{resolve, LevelLoader, LevelProgress, LevelRequest};
use crate::common::state::GameState;
use crate::plugins::rocket::lifecycle::SceneTransition;

#[derive(Default)]
struct FakeLoader {
    current: usize,
    total: usize,
    loaded: Vec<usize>,
}

impl LevelLoader for FakeLoader {
    fn load_level(&mut self, index: usize) {
        self.current = index;
        self.loaded.push(index);
    }

    fn current_level_index(&self) -> usize {
        self.current
    }

    fn total_level_count(&self) -> usize {
        self.total
    }
}

#[test]
fn advance_wraps_past_last_level() {
    let mut loader = FakeLoader {
        current: 1,
        total: 2,
        ..default()
    };
    assert_eq!(resolve(SceneTransition::AdvanceLevel, &mut loader), 0);
    assert_eq!(resolve(SceneTransition::AdvanceLevel, &mut loader), 1);
    assert_eq!(loader.loaded, vec![0, 1]);
}

#[test]
fn restart_returns_to_first_level() {
    let mut loader = FakeLoader {
        current: 2,
        total: 3,
        ..default()
    };
    assert_eq!(resolve(SceneTransition::RestartLevel, &mut loader), 0);
    assert_eq!(loader.loaded, vec![0]);
}

#[test]
fn progress_covers_every_layout() {
    let progress = LevelProgress::default();
    assert_eq!(progress.current, 0);
    assert_eq!(progress.total, LEVELS.len());
    assert_eq!(progress.layout().name, LEVELS[0].name);

    let stale = LevelProgress {
        current: LEVELS.len() + 5,
        total: LEVELS.len(),
    };
    assert_eq!(stale.layout().name, LEVELS[0].name);
}

#[test]
fn layouts_put_finish_away_from_launch() {
    for layout in LEVELS {
        assert_ne!(layout.launch, layout.finish, "{}", layout.name);
    }
}

fn level_app() -> App {
    let mut app = App::new();
    app.add_plugins(StatesPlugin);
    app.init_state::<GameState>();
    super::plugin(&mut app);
    app
}

fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

#[test]
fn loading_passes_straight_through_to_in_game() {
    let mut app = level_app();
    app.update();
    app.update();
    assert_eq!(state(&app), GameState::InGame);
}

#[test]
fn level_request_reloads_scene_at_target_index() {
    let mut app = level_app();
    app.update();
    app.update();
    assert_eq!(state(&app), GameState::InGame);

    app.world_mut()
        .write_message(LevelRequest(SceneTransition::AdvanceLevel));
    app.update();

    assert_eq!(app.world().resource::<LevelProgress>().current, 1);

    // Loading → InGame again within a couple of frames.
    app.update();
    app.update();
    assert_eq!(state(&app), GameState::InGame);
    assert_eq!(app.world().resource::<LevelProgress>().current, 1);
}
