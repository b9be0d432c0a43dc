//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `rocket_boost::game::configure_headless` to install gameplay plugins.
//! - time advances by a fixed step per `app.update()`, so grace periods are
//!   a known number of frames.

#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use rocket_boost::common::state::GameState;
use rocket_boost::plugins::rocket::Rocket;

pub const FRAME: Duration = Duration::from_millis(100);

pub fn app_headless() -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));

    rocket_boost::game::configure_headless(&mut app);

    // `App::run` does this before the first frame; tests drive `update()` directly.
    app.finish();
    app.cleanup();
    app
}

/// Tick until the game is in `InGame` with a rocket spawned.
pub fn app_in_game() -> App {
    let mut app = app_headless();
    for _ in 0..5 {
        app.update();
        if in_game(&app) && rocket(&mut app).is_some() {
            return app;
        }
    }
    panic!("game never reached InGame with a rocket");
}

pub fn in_game(app: &App) -> bool {
    *app.world().resource::<State<GameState>>().get() == GameState::InGame
}

pub fn rocket(app: &mut App) -> Option<Entity> {
    app.world_mut()
        .query_filtered::<Entity, With<Rocket>>()
        .iter(app.world())
        .next()
}

pub fn named(app: &mut App, name: &str) -> Entity {
    app.world_mut()
        .query::<(Entity, &Name)>()
        .iter(app.world())
        .find(|(_, n)| n.as_str() == name)
        .map(|(e, _)| e)
        .unwrap_or_else(|| panic!("no entity named {name}"))
}
