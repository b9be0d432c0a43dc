use bevy::prelude::*;
use crate::plugins::core;
use crate::common::tunables::Tunables;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
}

#[test]
fn default_grace_period_is_one_second() {
    let mut app = App::new();
    core::plugin(&mut app);
    let t = app.world().resource::<Tunables>();
    assert_eq!(t.transition_grace_secs, 1.0);
    assert!(t.main_thrust > 0.0 && t.rotation_thrust > 0.0);
}
