//! Level layouts.
//!
//! Pure data: the world plugin turns the current entry into entities.
//! Coordinates are pixels, origin at the centre of the arena floor.

use bevy::prelude::*;

pub const PAD_SIZE: Vec2 = Vec2::new(120.0, 16.0);

#[derive(Debug, Clone, Copy)]
pub struct ObstacleLayout {
    pub pos: Vec2,
    pub size: Vec2,
    /// Full travel of the swing. Zero means the obstacle is static.
    pub swing: Vec2,
    pub period: f32,
}

impl ObstacleLayout {
    pub const fn fixed(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            swing: Vec2::ZERO,
            period: 0.0,
        }
    }

    pub const fn swinging(pos: Vec2, size: Vec2, swing: Vec2, period: f32) -> Self {
        Self {
            pos,
            size,
            swing,
            period,
        }
    }

    #[inline]
    pub fn oscillates(&self) -> bool {
        self.swing != Vec2::ZERO
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LevelLayout {
    pub name: &'static str,
    /// Centre of the top face of each pad.
    pub launch: Vec2,
    pub finish: Vec2,
    pub obstacles: &'static [ObstacleLayout],
}

impl LevelLayout {
    /// Rocket centre when standing upright on the launch pad.
    pub fn rocket_start(&self, rocket_height: f32) -> Vec2 {
        self.launch + Vec2::Y * (rocket_height * 0.5 + 1.0)
    }
}

pub const LEVELS: &[LevelLayout] = &[
    LevelLayout {
        name: "Hop",
        launch: Vec2::new(-400.0, 40.0),
        finish: Vec2::new(400.0, 40.0),
        obstacles: &[ObstacleLayout::fixed(
            Vec2::new(0.0, 160.0),
            Vec2::new(60.0, 320.0),
        )],
    },
    LevelLayout {
        name: "Gate",
        launch: Vec2::new(-450.0, 40.0),
        finish: Vec2::new(450.0, 240.0),
        obstacles: &[
            ObstacleLayout::fixed(Vec2::new(-150.0, 400.0), Vec2::new(50.0, 400.0)),
            ObstacleLayout::swinging(
                Vec2::new(150.0, 120.0),
                Vec2::new(50.0, 240.0),
                Vec2::new(0.0, 260.0),
                4.0,
            ),
        ],
    },
    LevelLayout {
        name: "Shaft",
        launch: Vec2::new(0.0, 40.0),
        finish: Vec2::new(-420.0, 480.0),
        obstacles: &[
            ObstacleLayout::swinging(
                Vec2::new(-200.0, 260.0),
                Vec2::new(300.0, 30.0),
                Vec2::new(360.0, 0.0),
                6.0,
            ),
            ObstacleLayout::fixed(Vec2::new(-250.0, 400.0), Vec2::new(400.0, 30.0)),
        ],
    },
];

const _: () = assert!(!LEVELS.is_empty(), "at least one level layout is required");
