// Copyright 2026 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test doubles shared by the unit tests.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::media::{DrawSurface, Media};

/// Media call recorded by [`FakeMedia`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Rewind,
    Play,
    Pause,
}

/// A media handle with a manually advanced playhead.
#[derive(Debug)]
pub(crate) struct FakeMedia {
    pub(crate) id: usize,
    pub(crate) position: f64,
    pub(crate) playing: bool,
    pub(crate) calls: Vec<Call>,
}

impl FakeMedia {
    pub(crate) fn new(id: usize) -> Self {
        Self {
            id,
            position: 0.0,
            playing: false,
            calls: Vec::new(),
        }
    }

    /// Moves the playhead forward if playing.
    pub(crate) fn advance(&mut self, seconds: f64) {
        if self.playing {
            self.position += seconds;
        }
    }
}

impl Media for FakeMedia {
    fn rewind(&mut self) {
        self.position = 0.0;
        self.calls.push(Call::Rewind);
    }

    fn play(&mut self) {
        self.playing = true;
        self.calls.push(Call::Play);
    }

    fn pause(&mut self) {
        self.playing = false;
        self.calls.push(Call::Pause);
    }

    fn position(&self) -> f64 {
        self.position
    }
}

/// A surface that records which media ids painted into it, in order.
#[derive(Debug)]
pub(crate) struct RecordingSurface {
    pub(crate) available: bool,
    pub(crate) writes: Vec<usize>,
}

impl RecordingSurface {
    pub(crate) fn new() -> Self {
        Self {
            available: true,
            writes: Vec::new(),
        }
    }

    /// Id of the media whose frame is currently visible.
    pub(crate) fn visible(&self) -> Option<usize> {
        self.writes.last().copied()
    }
}

impl DrawSurface<FakeMedia> for RecordingSurface {
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 400.0, 400.0)
    }

    fn paint_frame(&mut self, media: &FakeMedia) -> bool {
        if !self.available {
            return false;
        }
        self.writes.push(media.id);
        true
    }
}
