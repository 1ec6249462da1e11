// Copyright 2026 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format export.
//!
//! [`ChromeTraceSink`] collects events as they arrive and
//! [`export`](ChromeTraceSink::export) writes them as
//! [Chrome Trace Event Format][format] JSON.
//!
//! Each clip gets its own track (`tid` = clip index); playlist-level events
//! (selection, advance, finish) live on track `-1`.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use reel_core::time::HostTime;
use reel_core::trace::{
    AdvanceEvent, ClipEndedEvent, ClipSelectedEvent, PaintEvent, PlayerTransitionEvent,
    PlaylistFinishedEvent, SelectionRejectedEvent, TraceSink,
};

const PLAYLIST_TRACK: i64 = -1;

/// Collects trace events for later export as Chrome Trace Event JSON.
#[derive(Debug)]
pub struct ChromeTraceSink {
    events: Vec<Value>,
    ticks_per_us: f64,
    paints: bool,
}

impl ChromeTraceSink {
    /// Creates an empty sink. `ticks_per_us` converts [`HostTime`] ticks to
    /// trace microseconds (1.0 for the web backend).
    #[must_use]
    pub fn new(ticks_per_us: f64) -> Self {
        Self {
            events: Vec::new(),
            ticks_per_us,
            paints: true,
        }
    }

    /// Drops paint events instead of recording them.
    #[must_use]
    pub fn without_paints(mut self) -> Self {
        self.paints = false;
        self
    }

    /// Recorded events, in arrival order.
    #[must_use]
    pub fn events(&self) -> &[Value] {
        &self.events
    }

    /// Writes the recorded events as a JSON array.
    ///
    /// The output is suitable for loading into `chrome://tracing` or
    /// [Perfetto](https://ui.perfetto.dev/).
    pub fn export(&self, writer: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, &self.events)?;
        writer.flush()
    }

    fn ts(&self, t: HostTime) -> f64 {
        t.ticks() as f64 / self.ticks_per_us
    }

    fn instant(&mut self, name: &str, cat: &str, at: HostTime, tid: i64, args: Value) {
        let ts = self.ts(at);
        self.events.push(json!({
            "ph": "i",
            "name": name,
            "cat": cat,
            "ts": ts,
            "pid": 0,
            "tid": tid,
            "s": "t",
            "args": args,
        }));
    }
}

/// Converts a clip index into a track id.
fn track(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

impl TraceSink for ChromeTraceSink {
    fn on_clip_selected(&mut self, e: &ClipSelectedEvent) {
        self.instant(
            "ClipSelected",
            "Playlist",
            e.at,
            PLAYLIST_TRACK,
            json!({ "previous": e.previous, "active": e.active }),
        );
    }

    fn on_selection_rejected(&mut self, e: &SelectionRejectedEvent) {
        self.instant(
            "SelectionRejected",
            "Playlist",
            e.at,
            PLAYLIST_TRACK,
            json!({ "requested": e.requested, "clip_count": e.clip_count }),
        );
    }

    fn on_clip_ended(&mut self, e: &ClipEndedEvent) {
        self.instant(
            "ClipEnded",
            "Player",
            e.at,
            track(e.index),
            json!({ "index": e.index }),
        );
    }

    fn on_advance(&mut self, e: &AdvanceEvent) {
        self.instant(
            "Advance",
            "Playlist",
            e.at,
            PLAYLIST_TRACK,
            json!({ "from": e.from, "to": e.to }),
        );
    }

    fn on_playlist_finished(&mut self, e: &PlaylistFinishedEvent) {
        self.instant(
            "PlaylistFinished",
            "Playlist",
            e.at,
            PLAYLIST_TRACK,
            json!({ "index": e.index }),
        );
    }

    fn on_player_transition(&mut self, e: &PlayerTransitionEvent) {
        self.instant(
            "PlayerTransition",
            "Player",
            e.at,
            track(e.index),
            json!({
                "from": format!("{:?}", e.from),
                "to": format!("{:?}", e.to),
                "command": e.command.map(|c| format!("{c:?}")),
            }),
        );
    }

    fn on_frame_painted(&mut self, e: &PaintEvent) {
        if self.paints {
            self.instant(
                "FramePainted",
                "Paint",
                e.at,
                track(e.index),
                json!({ "frame_index": e.frame_index }),
            );
        }
    }

    fn on_paint_skipped(&mut self, e: &PaintEvent) {
        if self.paints {
            self.instant(
                "PaintSkipped",
                "Paint",
                e.at,
                track(e.index),
                json!({
                    "frame_index": e.frame_index,
                    "outcome": format!("{:?}", e.outcome),
                }),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_core::player::{MediaCommand, PaintOutcome, PlayerState};

    #[test]
    fn export_writes_a_json_array() {
        let mut sink = ChromeTraceSink::new(1.0);
        sink.on_clip_selected(&ClipSelectedEvent {
            at: HostTime(100),
            previous: 0,
            active: 1,
        });
        sink.on_player_transition(&PlayerTransitionEvent {
            at: HostTime(100),
            index: 1,
            from: PlayerState::Idle,
            to: PlayerState::Playing,
            command: Some(MediaCommand::Restart),
        });

        let mut out = Vec::new();
        sink.export(&mut out).expect("write to Vec");
        let parsed: Value = serde_json::from_slice(&out).expect("valid JSON");
        let events = parsed.as_array().expect("top-level array");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["name"], "ClipSelected");
        assert_eq!(events[0]["tid"], PLAYLIST_TRACK);
        assert_eq!(events[0]["args"]["active"], 1);
        assert_eq!(events[1]["tid"], 1, "player events on the clip's track");
        assert_eq!(events[1]["args"]["command"], "Restart");
    }

    #[test]
    fn timestamps_use_the_tick_scale() {
        let mut sink = ChromeTraceSink::new(1_000.0);
        sink.on_advance(&AdvanceEvent {
            at: HostTime(5_000_000),
            from: 0,
            to: 1,
        });
        assert_eq!(sink.events()[0]["ts"], 5_000.0);
    }

    #[test]
    fn paints_can_be_dropped() {
        let paint = PaintEvent {
            at: HostTime(0),
            frame_index: 3,
            index: 2,
            outcome: PaintOutcome::Painted,
        };
        let mut all = ChromeTraceSink::new(1.0);
        all.on_frame_painted(&paint);
        assert_eq!(all.events().len(), 1);

        let mut quiet = ChromeTraceSink::new(1.0).without_paints();
        quiet.on_frame_painted(&paint);
        quiet.on_paint_skipped(&paint);
        assert!(quiet.events().is_empty(), "paint events dropped");
    }
}
