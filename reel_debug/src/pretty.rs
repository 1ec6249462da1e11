// Copyright 2026 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Host times
//! are printed in microseconds using a ticks-per-microsecond factor.

use std::io::Write;

use reel_core::player::PaintOutcome;
use reel_core::time::HostTime;
use reel_core::trace::{
    AdvanceEvent, ClipEndedEvent, ClipSelectedEvent, PaintEvent, PlayerTransitionEvent,
    PlaylistFinishedEvent, SelectionRejectedEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    ticks_per_us: f64,
    paints: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("ticks_per_us", &self.ticks_per_us)
            .field("paints", &self.paints)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr(ticks_per_us: f64) -> Self {
        Self::with_writer(Box::new(std::io::stderr()), ticks_per_us)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    ///
    /// Paint events are skipped until [`with_paints`](Self::with_paints).
    #[must_use]
    pub fn with_writer(writer: W, ticks_per_us: f64) -> Self {
        Self {
            writer,
            ticks_per_us,
            paints: false,
        }
    }

    /// Also print per-tick paint events.
    #[must_use]
    pub fn with_paints(mut self) -> Self {
        self.paints = true;
        self
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn us(&self, t: HostTime) -> f64 {
        t.ticks() as f64 / self.ticks_per_us
    }
}

fn outcome_name(outcome: PaintOutcome) -> &'static str {
    match outcome {
        PaintOutcome::Painted => "painted",
        PaintOutcome::Inactive => "inactive",
        PaintOutcome::NoMedia => "no-media",
        PaintOutcome::SurfaceUnavailable => "no-surface",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_clip_selected(&mut self, e: &ClipSelectedEvent) {
        let _ = writeln!(
            self.writer,
            "[select] {} -> {} at {:.1}µs",
            e.previous,
            e.active,
            self.us(e.at),
        );
    }

    fn on_selection_rejected(&mut self, e: &SelectionRejectedEvent) {
        let _ = writeln!(
            self.writer,
            "[select:rejected] index={} clips={} at {:.1}µs",
            e.requested,
            e.clip_count,
            self.us(e.at),
        );
    }

    fn on_clip_ended(&mut self, e: &ClipEndedEvent) {
        let _ = writeln!(
            self.writer,
            "[ended] clip={} at {:.1}µs",
            e.index,
            self.us(e.at)
        );
    }

    fn on_advance(&mut self, e: &AdvanceEvent) {
        let _ = writeln!(
            self.writer,
            "[advance] {} -> {} at {:.1}µs",
            e.from,
            e.to,
            self.us(e.at),
        );
    }

    fn on_playlist_finished(&mut self, e: &PlaylistFinishedEvent) {
        let _ = writeln!(
            self.writer,
            "[finished] stopped on clip={} at {:.1}µs",
            e.index,
            self.us(e.at),
        );
    }

    fn on_player_transition(&mut self, e: &PlayerTransitionEvent) {
        let command = match e.command {
            Some(c) => format!("{c:?}"),
            None => "-".to_string(),
        };
        let _ = writeln!(
            self.writer,
            "[player] clip={} {:?} -> {:?} cmd={} at {:.1}µs",
            e.index,
            e.from,
            e.to,
            command,
            self.us(e.at),
        );
    }

    fn on_frame_painted(&mut self, e: &PaintEvent) {
        if self.paints {
            let _ = writeln!(
                self.writer,
                "[paint] frame={} clip={} at {:.1}µs",
                e.frame_index,
                e.index,
                self.us(e.at),
            );
        }
    }

    fn on_paint_skipped(&mut self, e: &PaintEvent) {
        if self.paints {
            let _ = writeln!(
                self.writer,
                "[paint:skip] frame={} clip={} {} at {:.1}µs",
                e.frame_index,
                e.index,
                outcome_name(e.outcome),
                self.us(e.at),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_core::player::{MediaCommand, PlayerState};

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).expect("utf-8 output")
    }

    #[test]
    fn selection_and_transition_lines() {
        let mut sink = PrettyPrintSink::with_writer(Vec::new(), 1.0);
        sink.on_clip_selected(&ClipSelectedEvent {
            at: HostTime(1_500),
            previous: 0,
            active: 2,
        });
        sink.on_player_transition(&PlayerTransitionEvent {
            at: HostTime(1_500),
            index: 2,
            from: PlayerState::Idle,
            to: PlayerState::Playing,
            command: Some(MediaCommand::Restart),
        });
        let text = output(sink);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[select] 0 -> 2 at 1500.0µs");
        assert_eq!(
            lines[1],
            "[player] clip=2 Idle -> Playing cmd=Restart at 1500.0µs"
        );
    }

    #[test]
    fn paints_are_opt_in() {
        let paint = PaintEvent {
            at: HostTime(16),
            frame_index: 1,
            index: 0,
            outcome: PaintOutcome::SurfaceUnavailable,
        };

        let mut quiet = PrettyPrintSink::with_writer(Vec::new(), 1.0);
        quiet.on_paint_skipped(&paint);
        assert!(output(quiet).is_empty(), "paints skipped by default");

        let mut loud = PrettyPrintSink::with_writer(Vec::new(), 1.0).with_paints();
        loud.on_paint_skipped(&paint);
        assert_eq!(
            output(loud),
            "[paint:skip] frame=1 clip=0 no-surface at 16.0µs\n"
        );
    }

    #[test]
    fn ticks_are_scaled_to_microseconds() {
        let mut sink = PrettyPrintSink::with_writer(Vec::new(), 1_000.0);
        sink.on_playlist_finished(&PlaylistFinishedEvent {
            at: HostTime(2_000_000),
            index: 2,
        });
        assert_eq!(output(sink), "[finished] stopped on clip=2 at 2000.0µs\n");
    }
}
