//! Contact classification.
//!
//! Free-text tags never reach the rocket. Avian's `CollisionStart` messages are
//! resolved here, against [`ClassificationTable`], into a closed
//! [`CollisionOutcome`] per rocket.

use avian2d::prelude::*;
use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use super::controller::Rocket;
use super::lifecycle::CollisionOutcome;

pub const FRIENDLY_TAG: &str = "Friendly";
pub const FINISH_TAG: &str = "Finish";

/// Label identifying what kind of object this is.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct ContactTag(pub String);

impl ContactTag {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }
}

#[derive(Resource, Debug, Clone)]
pub struct ClassificationTable {
    outcomes: HashMap<String, CollisionOutcome>,
}

impl Default for ClassificationTable {
    fn default() -> Self {
        Self::empty()
            .with(FRIENDLY_TAG, CollisionOutcome::Friendly)
            .with(FINISH_TAG, CollisionOutcome::Finish)
    }
}

impl ClassificationTable {
    pub fn empty() -> Self {
        Self {
            outcomes: HashMap::default(),
        }
    }

    pub fn with(mut self, label: impl Into<String>, outcome: CollisionOutcome) -> Self {
        self.outcomes.insert(label.into(), outcome);
        self
    }

    /// Untagged and unknown objects are hazards.
    pub fn classify(&self, tag: Option<&ContactTag>) -> CollisionOutcome {
        tag.and_then(|t| self.outcomes.get(t.0.as_str()))
            .copied()
            .unwrap_or(CollisionOutcome::Fatal)
    }
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RocketContact {
    pub rocket: Entity,
    pub outcome: CollisionOutcome,
}

#[derive(Clone, Copy, Debug)]
struct Side {
    collider: Entity,
    body: Option<Entity>,
}

#[inline]
fn sides(ev: &CollisionStart) -> [(Side, Side); 2] {
    let a = Side {
        collider: ev.collider1,
        body: ev.body1,
    };
    let b = Side {
        collider: ev.collider2,
        body: ev.body2,
    };
    [(a, b), (b, a)]
}

pub fn classify_contacts(
    mut started: MessageReader<CollisionStart>,
    q_rocket: Query<(), With<Rocket>>,
    q_tags: Query<&ContactTag>,
    table: Res<ClassificationTable>,
    mut writer: MessageWriter<RocketContact>,
) {
    for ev in started.read() {
        for (this, other) in sides(ev) {
            let rocket = if q_rocket.contains(this.collider) {
                this.collider
            } else if let Some(body) = this.body.filter(|b| q_rocket.contains(*b)) {
                body
            } else {
                continue;
            };

            let tag = q_tags
                .get(other.collider)
                .ok()
                .or_else(|| other.body.and_then(|b| q_tags.get(b).ok()));

            let outcome = table.classify(tag);
            debug!("Rocket {rocket} touched {:?}: {outcome:?}", tag.map(|t| t.0.as_str()));
            writer.write(RocketContact { rocket, outcome });
        }
    }
}
