// Copyright 2026 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-clip playback state machine.
//!
//! A [`ClipPlayer`] wraps one [`Media`] handle and reacts to changes of its
//! `play_now` flag:
//!
//! ```text
//!            play_now=true            play_now=false
//!   Idle ─────────────────► Playing ─────────────────► Paused
//!                            ▲  │                          │
//!                            │  │ media ended              │ play_now=true
//!                            │  ▼                          │ (restart from 0)
//!                            └─ Ended ◄────────────────────┘
//!              play_now=true
//!           (restart from 0)
//! ```
//!
//! Turning the flag on always restarts the clip from the beginning; it never
//! resumes. Re-sending the current flag value does nothing.

use crate::clip::Clip;
use crate::media::{DrawSurface, Media};

/// Where a [`ClipPlayer`] is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
    /// Never played.
    #[default]
    Idle,
    /// Playing after a restart from the beginning.
    Playing,
    /// Paused with the position retained.
    Paused,
    /// Reached the end of the clip.
    Ended,
}

/// What a player told its media handle to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaCommand {
    /// Rewound to zero and started playback.
    Restart,
    /// Paused in place.
    Pause,
}

/// A state change (or media command) produced by a [`ClipPlayer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// State before the change.
    pub from: PlayerState,
    /// State after the change.
    pub to: PlayerState,
    /// Command sent to the media handle, if any.
    pub command: Option<MediaCommand>,
}

/// Result of one frame-copy attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaintOutcome {
    /// The frame was copied into the surface.
    Painted,
    /// The player is not the active one and the paint policy gates it out.
    Inactive,
    /// No media handle is attached.
    NoMedia,
    /// The surface was not available; nothing was drawn.
    SurfaceUnavailable,
}

/// Plays one clip and copies its frames on request.
#[derive(Debug)]
pub struct ClipPlayer<M> {
    clip: Clip,
    media: Option<M>,
    state: PlayerState,
    /// Last flag received; `None` until the first one arrives.
    play_now: Option<bool>,
}

impl<M: Media> ClipPlayer<M> {
    /// Creates an idle player with no media attached.
    #[must_use]
    pub fn new(clip: Clip) -> Self {
        Self {
            clip,
            media: None,
            state: PlayerState::Idle,
            play_now: None,
        }
    }

    /// The clip this player plays.
    #[must_use]
    pub fn clip(&self) -> &Clip {
        &self.clip
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Whether the last received flag asked this player to play.
    #[must_use]
    pub fn play_now(&self) -> bool {
        self.play_now == Some(true)
    }

    /// The attached media handle, if any.
    #[must_use]
    pub fn media(&self) -> Option<&M> {
        self.media.as_ref()
    }

    /// Mutable access to the attached media handle, if any.
    pub fn media_mut(&mut self) -> Option<&mut M> {
        self.media.as_mut()
    }

    /// Playback position of the attached media, in seconds.
    #[must_use]
    pub fn position(&self) -> Option<f64> {
        self.media.as_ref().map(Media::position)
    }

    /// Attaches a media handle, replacing (and dropping) any previous one.
    ///
    /// If a flag already arrived while no handle was attached, it is applied
    /// now.
    pub fn attach(&mut self, media: M) -> Option<Transition> {
        self.media = Some(media);
        self.apply()
    }

    /// Detaches the media handle and returns the player to [`PlayerState::Idle`].
    ///
    /// The last flag is kept, so re-attaching picks up where the playlist is.
    pub fn detach(&mut self) -> Option<M> {
        self.state = PlayerState::Idle;
        self.media.take()
    }

    /// Delivers a new `play_now` flag.
    ///
    /// Only a change of value has an effect: `true` rewinds and plays,
    /// `false` pauses in place. Returns `None` when the value is unchanged or
    /// no media is attached yet.
    pub fn set_play_now(&mut self, play_now: bool) -> Option<Transition> {
        if self.play_now == Some(play_now) {
            return None;
        }
        self.play_now = Some(play_now);
        self.apply()
    }

    /// Reports that the media reached its end.
    ///
    /// Only a playing clip can end; the signal is ignored in other states.
    pub fn media_ended(&mut self) -> Option<Transition> {
        if self.state != PlayerState::Playing {
            return None;
        }
        self.state = PlayerState::Ended;
        Some(Transition {
            from: PlayerState::Playing,
            to: PlayerState::Ended,
            command: None,
        })
    }

    /// Copies the current frame into `surface`.
    ///
    /// This does not look at the player state: a paused or ended clip still
    /// paints its last frame.
    pub fn sample<S: DrawSurface<M> + ?Sized>(&self, surface: &mut S) -> PaintOutcome {
        let Some(media) = self.media.as_ref() else {
            return PaintOutcome::NoMedia;
        };
        if surface.paint_frame(media) {
            PaintOutcome::Painted
        } else {
            PaintOutcome::SurfaceUnavailable
        }
    }

    fn apply(&mut self) -> Option<Transition> {
        let play_now = self.play_now?;
        let media = self.media.as_mut()?;
        let from = self.state;
        let (command, to) = if play_now {
            media.rewind();
            media.play();
            (MediaCommand::Restart, PlayerState::Playing)
        } else {
            media.pause();
            let to = match from {
                PlayerState::Playing => PlayerState::Paused,
                other => other,
            };
            (MediaCommand::Pause, to)
        };
        self.state = to;
        Some(Transition {
            from,
            to,
            command: Some(command),
        })
    }
}
