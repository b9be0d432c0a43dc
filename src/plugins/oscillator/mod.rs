//! Oscillator plugin: periodic back-and-forth motion.
//!
//! The object travels from its origin to `origin + movement` and back once
//! per `period`, easing in and out at both ends. It starts at the origin.

use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::prelude::*;

use crate::common::state::GameState;

#[derive(Component, Debug, Clone)]
pub struct Oscillator {
    pub period: f32,
    pub movement: Vec3,
    origin: Option<Vec3>,
}

impl Default for Oscillator {
    fn default() -> Self {
        Self::new(10.0, Vec3::new(0.0, -10.0, 0.0))
    }
}

impl Oscillator {
    pub fn new(period: f32, movement: Vec3) -> Self {
        Self {
            period,
            movement,
            origin: None,
        }
    }

    #[inline]
    pub fn origin(&self) -> Option<Vec3> {
        self.origin
    }
}

/// Fraction of `movement` covered at `elapsed` seconds, in `[0, 1]`.
///
/// `None` for a non-positive period: the object stays where it is.
pub fn movement_factor(elapsed: f32, period: f32) -> Option<f32> {
    if period <= f32::EPSILON {
        return None;
    }
    let cycles = elapsed / period;
    let raw = (cycles * TAU - FRAC_PI_2).sin();
    Some((1.0 + raw) / 2.0)
}

pub fn plugin(app: &mut App) {
    app.add_systems(Update, oscillate.run_if(in_state(GameState::InGame)));
}

fn oscillate(time: Res<Time>, mut q: Query<(&mut Oscillator, &mut Transform)>) {
    let elapsed = time.elapsed_secs();

    for (mut osc, mut tf) in &mut q {
        let origin = *osc.origin.get_or_insert(tf.translation);
        let Some(factor) = movement_factor(elapsed, osc.period) else {
            continue;
        };
        tf.translation = origin + osc.movement * factor;
    }
}

#[cfg(test)]
mod tests;
