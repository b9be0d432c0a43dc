//! Flight life-cycle.
//!
//! ```text
//!            Finish contact             grace period
//!   Alive ──────────────────► Transcending ─────────► AdvanceLevel
//!     │
//!     │      Fatal contact              grace period
//!     └─────────────────────► Dying ────────────────► RestartLevel
//! ```
//!
//! Both terminal states are final for this rocket. Only a scene reload, which
//! spawns a fresh rocket, gets back to `Alive`.

use std::time::Duration;

use bevy::prelude::*;

/// Exactly one per rocket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlightState {
    #[default]
    Alive,
    Dying,
    Transcending,
}

impl FlightState {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }
}

/// What touching another object means for the rocket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionOutcome {
    Friendly,
    Finish,
    Fatal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTransition {
    AdvanceLevel,
    RestartLevel,
}

impl SceneTransition {
    /// Level index this transition lands on. An empty catalog resolves to 0.
    pub fn target_index(self, current: usize, total: usize) -> usize {
        match self {
            Self::AdvanceLevel if total > 0 => (current + 1) % total,
            Self::AdvanceLevel | Self::RestartLevel => 0,
        }
    }
}

/// A scene change scheduled in simulation time, polled once per tick.
///
/// There is no cancel: a timer that is never armed never fires.
#[derive(Debug, Clone, Default)]
pub struct TransitionTimer {
    pending: Option<SceneTransition>,
    timer: Timer,
}

impl TransitionTimer {
    pub fn arm(&mut self, action: SceneTransition, delay: Duration) {
        self.pending = Some(action);
        self.timer = Timer::new(delay, TimerMode::Once);
    }

    #[inline]
    pub fn pending(&self) -> Option<SceneTransition> {
        self.pending
    }

    #[inline]
    pub fn remaining_secs(&self) -> f32 {
        if self.pending.is_some() {
            self.timer.remaining_secs()
        } else {
            0.0
        }
    }

    /// Count down by `dt`. Returns the action on the tick it comes due, then disarms.
    pub fn tick(&mut self, dt: Duration) -> Option<SceneTransition> {
        self.pending?;
        if !self.timer.tick(dt).is_finished() {
            return None;
        }
        self.pending.take()
    }
}

/// Raised once, on the terminal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Victory,
    Death,
}

#[derive(Debug, Clone)]
pub struct Lifecycle {
    state: FlightState,
    timer: TransitionTimer,
    grace: Duration,
    collisions_disabled: bool,
}

impl Lifecycle {
    /// A grace period that is negative, NaN or too large for a `Duration` becomes zero.
    pub fn new(grace_secs: f32) -> Self {
        Self {
            state: FlightState::Alive,
            timer: TransitionTimer::default(),
            grace: Duration::try_from_secs_f32(grace_secs).unwrap_or_default(),
            collisions_disabled: false,
        }
    }

    #[inline]
    pub fn state(&self) -> FlightState {
        self.state
    }

    #[inline]
    pub fn timer(&self) -> &TransitionTimer {
        &self.timer
    }

    #[inline]
    pub fn collisions_disabled(&self) -> bool {
        self.collisions_disabled
    }

    /// Debug switch: suppress all collision handling. Returns the new setting.
    pub fn toggle_collisions(&mut self) -> bool {
        self.collisions_disabled = !self.collisions_disabled;
        self.collisions_disabled
    }

    /// Classify a contact-begin. Only an `Alive` rocket with collisions enabled reacts,
    /// so the timer is armed at most once per rocket.
    pub fn on_collision(&mut self, outcome: CollisionOutcome) -> Option<LifecycleEvent> {
        if !self.state.is_alive() || self.collisions_disabled {
            return None;
        }

        let (state, action, event) = match outcome {
            CollisionOutcome::Friendly => return None,
            CollisionOutcome::Finish => (
                FlightState::Transcending,
                SceneTransition::AdvanceLevel,
                LifecycleEvent::Victory,
            ),
            CollisionOutcome::Fatal => (
                FlightState::Dying,
                SceneTransition::RestartLevel,
                LifecycleEvent::Death,
            ),
        };

        self.state = state;
        self.timer.arm(action, self.grace);
        Some(event)
    }

    #[inline]
    pub fn advance(&mut self, dt: Duration) -> Option<SceneTransition> {
        self.timer.tick(dt)
    }
}
