// Copyright 2026 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the widget.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! application calls after each playlist operation and frame tick. All method
//! bodies default to no-ops, so implementing only the events you care about is
//! fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! Events are built from the values the controller returns (an
//! [`Update`], an [`EndOutcome`], a [`PaintOutcome`]) plus the host time at
//! which the application observed them.

use crate::frame_loop::Tick;
use crate::player::{MediaCommand, PaintOutcome, PlayerState};
use crate::playlist::{EndOutcome, PlayerTransition, Update};
use crate::time::HostTime;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a clip is selected from the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClipSelectedEvent {
    /// When the selection was handled.
    pub at: HostTime,
    /// Active index before the selection.
    pub previous: usize,
    /// Active index after the selection.
    pub active: usize,
}

impl ClipSelectedEvent {
    /// Creates the event from a selection [`Update`].
    #[must_use]
    pub fn new(update: &Update, at: HostTime) -> Self {
        Self {
            at,
            previous: update.previous,
            active: update.active,
        }
    }
}

/// Emitted when a selection names an index outside the playlist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRejectedEvent {
    /// When the selection was handled.
    pub at: HostTime,
    /// The requested index.
    pub requested: usize,
    /// Number of clips in the playlist.
    pub clip_count: usize,
}

/// Emitted when a player's media reports the end of its clip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClipEndedEvent {
    /// When the end was reported.
    pub at: HostTime,
    /// Index of the clip that ended.
    pub index: usize,
}

/// Emitted when playback moves on to the next clip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceEvent {
    /// When the advance happened.
    pub at: HostTime,
    /// Clip that finished.
    pub from: usize,
    /// Clip that starts.
    pub to: usize,
}

/// Emitted when the last clip ends and the playlist stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaylistFinishedEvent {
    /// When the playlist stopped.
    pub at: HostTime,
    /// The final (and still active) index.
    pub index: usize,
}

/// Emitted for every player that reacted to a playlist update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerTransitionEvent {
    /// When the update happened.
    pub at: HostTime,
    /// Index of the player.
    pub index: usize,
    /// State before.
    pub from: PlayerState,
    /// State after.
    pub to: PlayerState,
    /// Command sent to the media handle, if any.
    pub command: Option<MediaCommand>,
}

impl PlayerTransitionEvent {
    /// Creates the event from a [`PlayerTransition`].
    #[must_use]
    pub fn new(t: &PlayerTransition, at: HostTime) -> Self {
        Self {
            at,
            index: t.index,
            from: t.transition.from,
            to: t.transition.to,
            command: t.transition.command,
        }
    }
}

/// Emitted for every frame-copy attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaintEvent {
    /// Host time of the tick.
    pub at: HostTime,
    /// Frame counter of the loop that ticked.
    pub frame_index: u64,
    /// Index of the player whose loop ticked.
    pub index: usize,
    /// What happened.
    pub outcome: PaintOutcome,
}

impl PaintEvent {
    /// Creates the event for `index` from a loop [`Tick`].
    #[must_use]
    pub fn new(tick: &Tick, index: usize, outcome: PaintOutcome) -> Self {
        Self {
            at: tick.now,
            frame_index: tick.frame_index,
            index,
            outcome,
        }
    }
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the widget.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after a clip was selected.
    fn on_clip_selected(&mut self, e: &ClipSelectedEvent) {
        _ = e;
    }

    /// Called when a selection was out of range.
    fn on_selection_rejected(&mut self, e: &SelectionRejectedEvent) {
        _ = e;
    }

    /// Called when a clip reached its end.
    fn on_clip_ended(&mut self, e: &ClipEndedEvent) {
        _ = e;
    }

    /// Called when playback advanced to the next clip.
    fn on_advance(&mut self, e: &AdvanceEvent) {
        _ = e;
    }

    /// Called when the last clip ended.
    fn on_playlist_finished(&mut self, e: &PlaylistFinishedEvent) {
        _ = e;
    }

    /// Called for each player that reacted to an update.
    fn on_player_transition(&mut self, e: &PlayerTransitionEvent) {
        _ = e;
    }

    /// Called when a frame was copied into the surface.
    fn on_frame_painted(&mut self, e: &PaintEvent) {
        _ = e;
    }

    /// Called when a tick did not copy a frame.
    fn on_paint_skipped(&mut self, e: &PaintEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`ClipSelectedEvent`] followed by the update's player
    /// transitions.
    #[inline]
    pub fn selection(&mut self, update: &Update, at: HostTime) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_clip_selected(&ClipSelectedEvent::new(update, at));
            for t in &update.transitions {
                s.on_player_transition(&PlayerTransitionEvent::new(t, at));
            }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = (update, at);
        }
    }

    /// Emits a [`SelectionRejectedEvent`].
    #[inline]
    pub fn selection_rejected(&mut self, e: &SelectionRejectedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_selection_rejected(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ClipEndedEvent`], the player's own transition, and then
    /// either an [`AdvanceEvent`] (with the resulting transitions) or a
    /// [`PlaylistFinishedEvent`].
    #[inline]
    pub fn clip_ended(&mut self, ended: &PlayerTransition, outcome: &EndOutcome, at: HostTime) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_clip_ended(&ClipEndedEvent {
                at,
                index: ended.index,
            });
            s.on_player_transition(&PlayerTransitionEvent::new(ended, at));
            match outcome {
                EndOutcome::Advanced(update) => {
                    s.on_advance(&AdvanceEvent {
                        at,
                        from: update.previous,
                        to: update.active,
                    });
                    for t in &update.transitions {
                        s.on_player_transition(&PlayerTransitionEvent::new(t, at));
                    }
                }
                EndOutcome::Finished { index } => {
                    s.on_playlist_finished(&PlaylistFinishedEvent { at, index: *index });
                }
            }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = (ended, outcome, at);
        }
    }

    /// Emits a [`PlayerTransitionEvent`] for each transition.
    #[inline]
    pub fn transitions(&mut self, transitions: &[PlayerTransition], at: HostTime) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            for t in transitions {
                s.on_player_transition(&PlayerTransitionEvent::new(t, at));
            }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = (transitions, at);
        }
    }

    /// Emits a [`PaintEvent`] to `on_frame_painted` or `on_paint_skipped`
    /// depending on its outcome.
    #[inline]
    pub fn paint(&mut self, e: &PaintEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            if e.outcome == PaintOutcome::Painted {
                s.on_frame_painted(e);
            } else {
                s.on_paint_skipped(e);
            }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
