use bevy::prelude::*;

use super::feedback::{AudioChannel, EmitterKind, ParticleEmitters, SoundCue};

/// The rocket's single audio channel.
///
/// Plays until stopped or interrupted; a clip finishing on its own is the
/// audio backend's business.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct RocketAudio {
    playing: Option<SoundCue>,
}

impl RocketAudio {
    #[inline]
    pub fn playing(&self) -> Option<SoundCue> {
        self.playing
    }
}

impl AudioChannel for RocketAudio {
    fn play(&mut self, cue: SoundCue, interrupting: bool) {
        if interrupting || self.playing.is_none() {
            debug!("Audio: play {cue:?}");
            self.playing = Some(cue);
        }
    }

    fn stop(&mut self) {
        self.playing = None;
    }

    fn is_playing(&self) -> bool {
        self.playing.is_some()
    }
}

/// Engine exhaust, victory burst, death debris.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RocketEmitters {
    pub engine: bool,
    pub victory: bool,
    pub death: bool,
}

impl RocketEmitters {
    #[inline]
    pub fn is_emitting(&self, kind: EmitterKind) -> bool {
        match kind {
            EmitterKind::Engine => self.engine,
            EmitterKind::Victory => self.victory,
            EmitterKind::Death => self.death,
        }
    }

    fn slot(&mut self, kind: EmitterKind) -> &mut bool {
        match kind {
            EmitterKind::Engine => &mut self.engine,
            EmitterKind::Victory => &mut self.victory,
            EmitterKind::Death => &mut self.death,
        }
    }
}

impl ParticleEmitters for RocketEmitters {
    fn start(&mut self, kind: EmitterKind) {
        *self.slot(kind) = true;
    }

    fn stop(&mut self, kind: EmitterKind) {
        *self.slot(kind) = false;
    }
}
