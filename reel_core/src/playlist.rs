// Copyright 2026 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Playlist sequencing.
//!
//! [`PlaylistController`] owns the clips, the active index, and one
//! [`ClipPlayer`] per clip. Every change of the active index is pushed to the
//! players as `play_now = (index == active)`, so exactly one player is ever
//! asked to play.
//!
//! The active index changes in two ways only:
//!
//! - [`select_clip`](PlaylistController::select_clip) jumps to any clip.
//! - [`on_clip_ended`](PlaylistController::on_clip_ended) moves one step
//!   forward, and does nothing on the last clip (no wraparound).

use alloc::vec::Vec;

use crate::clip::Clip;
use crate::error::PlaylistError;
use crate::media::{DrawSurface, Media};
use crate::player::{ClipPlayer, PaintOutcome, Transition};

/// Which players may copy frames into the shared surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PaintPolicy {
    /// Only the active player paints. Inactive ticks are gated on the active
    /// index read at call time.
    #[default]
    ActiveOnly,
    /// Every player with media paints on every tick, paused or not. The last
    /// writer of a display frame wins the visible pixels.
    EveryPlayer,
}

/// A player whose state or media changed because of a playlist update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayerTransition {
    /// Index of the player.
    pub index: usize,
    /// What happened to it.
    pub transition: Transition,
}

/// Result of a change of the active index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Update {
    /// Active index before the change.
    pub previous: usize,
    /// Active index after the change.
    pub active: usize,
    /// Players that reacted to the new flags, in index order.
    pub transitions: Vec<PlayerTransition>,
}

/// Result of [`PlaylistController::on_clip_ended`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EndOutcome {
    /// Playback moved on to the next clip.
    Advanced(Update),
    /// The last clip ended; the playlist stops on it.
    Finished {
        /// The (unchanged) active index.
        index: usize,
    },
}

/// Owns the clip list, the active index, and the per-clip players.
#[derive(Debug)]
pub struct PlaylistController<M> {
    players: Vec<ClipPlayer<M>>,
    active: usize,
    paint_policy: PaintPolicy,
}

impl<M: Media> PlaylistController<M> {
    /// Creates a controller with the first clip active.
    ///
    /// Players start without media; attach handles with
    /// [`attach`](Self::attach) and then call
    /// [`sync_players`](Self::sync_players) to deliver the initial flags.
    pub fn new(clips: Vec<Clip>, paint_policy: PaintPolicy) -> Result<Self, PlaylistError> {
        if clips.is_empty() {
            return Err(PlaylistError::Empty);
        }
        Ok(Self {
            players: clips.into_iter().map(ClipPlayer::new).collect(),
            active: 0,
            paint_policy,
        })
    }

    /// Number of clips.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always `false`; a controller cannot be built without clips.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Index of the active clip.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Whether the active clip is the last one.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.active + 1 == self.players.len()
    }

    /// The paint policy in effect.
    #[must_use]
    pub fn paint_policy(&self) -> PaintPolicy {
        self.paint_policy
    }

    /// Changes the paint policy.
    pub fn set_paint_policy(&mut self, policy: PaintPolicy) {
        self.paint_policy = policy;
    }

    /// Iterates over the clips in playlist order.
    pub fn clips(&self) -> impl Iterator<Item = &Clip> + '_ {
        self.players.iter().map(ClipPlayer::clip)
    }

    /// The player at `index`.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&ClipPlayer<M>> {
        self.players.get(index)
    }

    /// The player at `index`, mutably.
    pub fn player_mut(&mut self, index: usize) -> Option<&mut ClipPlayer<M>> {
        self.players.get_mut(index)
    }

    /// The `play_now` flag each player should have, in index order.
    pub fn play_flags(&self) -> impl Iterator<Item = bool> + '_ {
        let active = self.active;
        (0..self.players.len()).map(move |i| i == active)
    }

    /// Attaches a media handle to the player at `index`.
    ///
    /// Returns `None` for an out-of-range index or when the player had no
    /// pending flag to apply.
    pub fn attach(&mut self, index: usize, media: M) -> Option<PlayerTransition> {
        let transition = self.players.get_mut(index)?.attach(media)?;
        Some(PlayerTransition { index, transition })
    }

    /// Detaches the media handle of the player at `index`.
    pub fn detach(&mut self, index: usize) -> Option<M> {
        self.players.get_mut(index)?.detach()
    }

    /// Pushes the current flags to every player.
    ///
    /// Players whose flag did not change are left alone.
    pub fn sync_players(&mut self) -> Vec<PlayerTransition> {
        let active = self.active;
        self.players
            .iter_mut()
            .enumerate()
            .filter_map(|(index, player)| {
                player
                    .set_play_now(index == active)
                    .map(|transition| PlayerTransition { index, transition })
            })
            .collect()
    }

    /// Makes the clip at `index` active, whatever the current playback state.
    ///
    /// Returns `None` (and changes nothing) if `index` is out of range.
    /// Selecting the already active clip is accepted and leaves every player
    /// untouched.
    pub fn select_clip(&mut self, index: usize) -> Option<Update> {
        if index >= self.players.len() {
            return None;
        }
        Some(self.set_active(index))
    }

    /// Reacts to the end of the active clip.
    ///
    /// Advances by one unless the active clip is the last.
    pub fn on_clip_ended(&mut self) -> EndOutcome {
        if self.is_last() {
            return EndOutcome::Finished { index: self.active };
        }
        EndOutcome::Advanced(self.set_active(self.active + 1))
    }

    /// Routes a media "ended" signal from the player at `index`.
    ///
    /// The player moves to its ended state and the playlist reacts as in
    /// [`on_clip_ended`](Self::on_clip_ended). Signals from players that are
    /// not playing are ignored and return `None`.
    pub fn media_ended(&mut self, index: usize) -> Option<(PlayerTransition, EndOutcome)> {
        let transition = self.players.get_mut(index)?.media_ended()?;
        Some((
            PlayerTransition { index, transition },
            self.on_clip_ended(),
        ))
    }

    /// One frame-loop tick of the player at `index`.
    ///
    /// The active flag is read now, not when the loop was installed.
    pub fn paint<S: DrawSurface<M> + ?Sized>(&self, index: usize, surface: &mut S) -> PaintOutcome {
        let Some(player) = self.players.get(index) else {
            return PaintOutcome::NoMedia;
        };
        if self.paint_policy == PaintPolicy::ActiveOnly && index != self.active {
            return PaintOutcome::Inactive;
        }
        player.sample(surface)
    }

    /// Runs [`paint`](Self::paint) for every player in index order, as a
    /// single owner of the surface would in one display frame.
    pub fn paint_all<S: DrawSurface<M> + ?Sized>(&self, surface: &mut S) -> Vec<PaintOutcome> {
        (0..self.players.len())
            .map(|index| self.paint(index, surface))
            .collect()
    }

    fn set_active(&mut self, index: usize) -> Update {
        let previous = self.active;
        self.active = index;
        Update {
            previous,
            active: index,
            transitions: self.sync_players(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{MediaCommand, PlayerState};
    use crate::test_util::{FakeMedia, RecordingSurface};

    fn mounted(policy: PaintPolicy) -> PlaylistController<FakeMedia> {
        let clips = Clip::from_static_list(&["part1.mp4", "part2.mp4", "part3.mp4"]);
        let mut playlist = PlaylistController::new(clips, policy).expect("non-empty");
        for i in 0..playlist.len() {
            playlist.attach(i, FakeMedia::new(i));
        }
        playlist.sync_players();
        playlist
    }

    fn states(playlist: &PlaylistController<FakeMedia>) -> Vec<PlayerState> {
        (0..playlist.len())
            .map(|i| playlist.player(i).unwrap().state())
            .collect()
    }

    fn playing_count(playlist: &PlaylistController<FakeMedia>) -> usize {
        (0..playlist.len())
            .filter(|&i| playlist.player(i).unwrap().play_now())
            .count()
    }

    #[test]
    fn empty_playlist_is_rejected() {
        let result = PlaylistController::<FakeMedia>::new(Vec::new(), PaintPolicy::default());
        assert_eq!(result.err(), Some(PlaylistError::Empty));
    }

    #[test]
    fn starts_on_first_clip() {
        let playlist = mounted(PaintPolicy::ActiveOnly);
        assert_eq!(playlist.active_index(), 0);
        assert_eq!(
            playlist.play_flags().collect::<Vec<_>>(),
            [true, false, false],
            "only the first clip plays"
        );
        assert_eq!(
            states(&playlist),
            [PlayerState::Playing, PlayerState::Idle, PlayerState::Idle]
        );
    }

    #[test]
    fn select_sets_exactly_one_flag() {
        let mut playlist = mounted(PaintPolicy::ActiveOnly);
        for i in [2, 0, 1, 1, 2] {
            let update = playlist.select_clip(i).expect("valid index");
            assert_eq!(update.active, i);
            assert_eq!(playlist.active_index(), i);
            let flags: Vec<bool> = playlist.play_flags().collect();
            for (j, flag) in flags.iter().enumerate() {
                assert_eq!(*flag, j == i, "flag {j} after selecting {i}");
            }
            assert_eq!(playing_count(&playlist), 1, "mutual exclusivity");
        }
    }

    #[test]
    fn out_of_range_selection_changes_nothing() {
        let mut playlist = mounted(PaintPolicy::ActiveOnly);
        assert_eq!(playlist.select_clip(3), None);
        assert_eq!(playlist.active_index(), 0);
    }

    #[test]
    fn first_clip_ending_advances_and_restarts_next() {
        let mut playlist = mounted(PaintPolicy::ActiveOnly);
        let (ended, outcome) = playlist.media_ended(0).expect("clip 0 is playing");
        assert_eq!(ended.transition.to, PlayerState::Ended);

        let EndOutcome::Advanced(update) = outcome else {
            panic!("expected an advance, got {outcome:?}");
        };
        assert_eq!((update.previous, update.active), (0, 1));
        assert_eq!(playlist.player(1).unwrap().state(), PlayerState::Playing);
        assert_eq!(playlist.player(1).unwrap().position(), Some(0.0));
        let restarted = update
            .transitions
            .iter()
            .find(|t| t.index == 1)
            .expect("clip 1 reacted");
        assert_eq!(restarted.transition.command, Some(MediaCommand::Restart));
    }

    #[test]
    fn last_clip_ending_stops_without_wraparound() {
        let mut playlist = mounted(PaintPolicy::ActiveOnly);
        playlist.select_clip(2);
        let (_, outcome) = playlist.media_ended(2).expect("clip 2 is playing");
        assert_eq!(outcome, EndOutcome::Finished { index: 2 });
        assert_eq!(playlist.active_index(), 2, "no advance past the end");
        assert_eq!(playlist.player(0).unwrap().state(), PlayerState::Paused);
        assert_eq!(playlist.player(2).unwrap().state(), PlayerState::Ended);
    }

    #[test]
    fn on_clip_ended_walks_to_the_end() {
        let mut playlist = mounted(PaintPolicy::ActiveOnly);
        assert!(matches!(playlist.on_clip_ended(), EndOutcome::Advanced(_)));
        assert!(matches!(playlist.on_clip_ended(), EndOutcome::Advanced(_)));
        assert_eq!(playlist.on_clip_ended(), EndOutcome::Finished { index: 2 });
        assert_eq!(playlist.on_clip_ended(), EndOutcome::Finished { index: 2 });
    }

    #[test]
    fn click_during_playback_pauses_old_and_restarts_new() {
        let mut playlist = mounted(PaintPolicy::ActiveOnly);
        playlist.player_mut(0).unwrap().media_mut().unwrap().advance(2.25);

        let update = playlist.select_clip(2).unwrap();
        assert_eq!(update.active, 2);
        assert_eq!(playlist.player(0).unwrap().state(), PlayerState::Paused);
        assert_eq!(
            playlist.player(0).unwrap().position(),
            Some(2.25),
            "paused clip keeps its position"
        );
        assert_eq!(playlist.player(2).unwrap().state(), PlayerState::Playing);
        assert_eq!(playlist.player(2).unwrap().position(), Some(0.0));

        let touched: Vec<usize> = update.transitions.iter().map(|t| t.index).collect();
        assert_eq!(touched, [0, 2], "clip 1 keeps its false flag");
    }

    #[test]
    fn reselecting_active_clip_does_not_restart_it() {
        let mut playlist = mounted(PaintPolicy::ActiveOnly);
        playlist.player_mut(0).unwrap().media_mut().unwrap().advance(1.0);
        let update = playlist.select_clip(0).unwrap();
        assert!(update.transitions.is_empty(), "unchanged flags");
        assert_eq!(playlist.player(0).unwrap().position(), Some(1.0));
    }

    #[test]
    fn end_signal_from_paused_clip_is_ignored() {
        let mut playlist = mounted(PaintPolicy::ActiveOnly);
        playlist.select_clip(1);
        assert_eq!(playlist.media_ended(0), None);
        assert_eq!(playlist.active_index(), 1);
    }

    #[test]
    fn active_only_paints_the_active_clip() {
        let mut playlist = mounted(PaintPolicy::ActiveOnly);
        playlist.select_clip(1);
        let mut surface = RecordingSurface::new();
        let outcomes = playlist.paint_all(&mut surface);
        assert_eq!(
            outcomes,
            [
                PaintOutcome::Inactive,
                PaintOutcome::Painted,
                PaintOutcome::Inactive
            ]
        );
        assert_eq!(surface.visible(), Some(1));
    }

    #[test]
    fn every_player_policy_lets_the_last_writer_win() {
        let mut playlist = mounted(PaintPolicy::EveryPlayer);
        playlist.select_clip(0);
        let mut surface = RecordingSurface::new();
        playlist.paint_all(&mut surface);
        assert_eq!(surface.writes, [0, 1, 2], "all players tick");
        assert_eq!(surface.visible(), Some(2), "last writer wins, not the active clip");
    }

    #[test]
    fn policy_is_read_at_tick_time() {
        let mut playlist = mounted(PaintPolicy::ActiveOnly);
        let mut surface = RecordingSurface::new();
        assert_eq!(playlist.paint(1, &mut surface), PaintOutcome::Inactive);
        playlist.select_clip(1);
        assert_eq!(playlist.paint(1, &mut surface), PaintOutcome::Painted);
        playlist.set_paint_policy(PaintPolicy::EveryPlayer);
        assert_eq!(playlist.paint(0, &mut surface), PaintOutcome::Painted);
    }

    #[test]
    fn missing_surface_skips_the_tick() {
        let playlist = mounted(PaintPolicy::ActiveOnly);
        let mut surface = RecordingSurface::new();
        surface.available = false;
        assert_eq!(playlist.paint(0, &mut surface), PaintOutcome::SurfaceUnavailable);
        surface.available = true;
        assert_eq!(playlist.paint(0, &mut surface), PaintOutcome::Painted, "next tick draws");
    }

    #[test]
    fn detached_player_has_nothing_to_paint() {
        let mut playlist = mounted(PaintPolicy::ActiveOnly);
        let media = playlist.detach(0).expect("attached");
        assert_eq!(media.id, 0);
        let mut surface = RecordingSurface::new();
        assert_eq!(playlist.paint(0, &mut surface), PaintOutcome::NoMedia);
    }
}
