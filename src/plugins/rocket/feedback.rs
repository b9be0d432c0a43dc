//! Feedback coordinator: flight events → audio/particle requests.
//!
//! The mapping is stateless. Whatever has to remember something (is a clip
//! playing? is an emitter on?) lives behind [`AudioChannel`] and
//! [`ParticleEmitters`].

use bevy::prelude::*;

use super::flight::ThrustSignal;
use super::lifecycle::LifecycleEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Engine,
    Victory,
    Death,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmitterKind {
    Engine,
    Victory,
    Death,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackRequest {
    Play { cue: SoundCue, interrupting: bool },
    StopSound,
    StartEmitter(EmitterKind),
    StopEmitter(EmitterKind),
}

/// One audio channel per rocket.
pub trait AudioChannel {
    /// A non-interrupting play is dropped while another clip is playing.
    fn play(&mut self, cue: SoundCue, interrupting: bool);
    fn stop(&mut self);
    fn is_playing(&self) -> bool;
}

pub trait ParticleEmitters {
    fn start(&mut self, kind: EmitterKind);
    fn stop(&mut self, kind: EmitterKind);
}

/// The engine clip is one-shot: it is only requested when the channel is quiet.
pub fn on_thrust(signal: ThrustSignal, engine_playing: bool, out: &mut Vec<FeedbackRequest>) {
    match signal {
        ThrustSignal::Active => {
            if !engine_playing {
                out.push(FeedbackRequest::Play {
                    cue: SoundCue::Engine,
                    interrupting: false,
                });
            }
            out.push(FeedbackRequest::StartEmitter(EmitterKind::Engine));
        }
        ThrustSignal::Inactive => {
            out.push(FeedbackRequest::StopSound);
            out.push(FeedbackRequest::StopEmitter(EmitterKind::Engine));
        }
    }
}

pub fn on_lifecycle(event: LifecycleEvent, out: &mut Vec<FeedbackRequest>) {
    let (cue, emitter) = match event {
        LifecycleEvent::Victory => (SoundCue::Victory, EmitterKind::Victory),
        LifecycleEvent::Death => (SoundCue::Death, EmitterKind::Death),
    };

    out.extend([
        FeedbackRequest::StopSound,
        FeedbackRequest::StopEmitter(EmitterKind::Engine),
        FeedbackRequest::Play {
            cue,
            interrupting: true,
        },
        FeedbackRequest::StartEmitter(emitter),
    ]);
}

impl FeedbackRequest {
    /// Fire-and-forget: a request whose subsystem is missing is dropped.
    pub fn apply<A, P>(self, audio: Option<&mut A>, emitters: Option<&mut P>)
    where
        A: AudioChannel,
        P: ParticleEmitters,
    {
        match self {
            Self::Play { cue, interrupting } => match audio {
                Some(audio) => audio.play(cue, interrupting),
                None => debug!("No audio channel, dropping {cue:?}"),
            },
            Self::StopSound => {
                if let Some(audio) = audio {
                    audio.stop();
                }
            }
            Self::StartEmitter(kind) => match emitters {
                Some(emitters) => emitters.start(kind),
                None => debug!("No particle emitters, dropping start of {kind:?}"),
            },
            Self::StopEmitter(kind) => {
                if let Some(emitters) = emitters {
                    emitters.stop(kind);
                }
            }
        }
    }
}
