use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::plugins::level::layouts::LEVELS;
use crate::plugins::level::LevelProgress;
use crate::plugins::oscillator::Oscillator;
use crate::plugins::rocket::contacts::ContactTag;

fn build_level(index: usize) -> World {
    let mut world = World::new();
    world.insert_resource(LevelProgress {
        current: index,
        total: LEVELS.len(),
    });
    run_system_once(&mut world, super::spawn_level);
    world
}

#[test]
fn spawns_tagged_pads() {
    let mut world = build_level(0);

    let mut tags: Vec<String> = world
        .query::<&ContactTag>()
        .iter(&world)
        .map(|t| t.0.clone())
        .collect();
    tags.sort();
    assert_eq!(tags, vec!["Finish".to_string(), "Friendly".to_string()]);
}

#[test]
fn bounds_are_untagged_static_bodies() {
    let mut world = build_level(0);

    let bounds = world
        .query_filtered::<(&Name, &RigidBody), Without<ContactTag>>()
        .iter(&world)
        .filter(|(n, rb)| {
            (n.as_str() == "Ground" || n.as_str().starts_with("Wall"))
                && matches!(**rb, RigidBody::Static)
        })
        .count();
    assert_eq!(bounds, 3);
}

#[test]
fn swinging_obstacles_get_an_oscillator() {
    let (swinging_at, layout) = LEVELS
        .iter()
        .enumerate()
        .find(|(_, l)| l.obstacles.iter().any(|o| o.oscillates()))
        .expect("some level has a swinging obstacle");

    let mut world = build_level(swinging_at);

    let expected = layout.obstacles.iter().filter(|o| o.oscillates()).count();
    let kinematic = world
        .query::<(&Oscillator, &RigidBody)>()
        .iter(&world)
        .filter(|(_, rb)| matches!(**rb, RigidBody::Kinematic))
        .count();
    assert_eq!(kinematic, expected);
}
