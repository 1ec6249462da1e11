// Copyright 2026 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated playlist run that exercises the tracing and diagnostics pipeline.
//!
//! Plays the three built-in clips with fake media at 60 Hz, clicks the last
//! clip partway through the second one, and lets the last clip run out.
//! Events go to a [`PrettyPrintSink`](reel_debug::pretty::PrettyPrintSink) on
//! stdout and to a [`ChromeTraceSink`](reel_debug::chrome::ChromeTraceSink),
//! which is exported to `trace.json`.
//!
//! Pass `--every-player` to let paused players paint too and watch the last
//! writer win the surface.

use std::fs::File;
use std::io::BufWriter;

use kurbo::Rect;
use reel_core::config::WidgetConfig;
use reel_core::frame_loop::Tick;
use reel_core::media::{DrawSurface, Media};
use reel_core::playlist::{PaintPolicy, PlaylistController};
use reel_core::time::HostTime;
use reel_core::trace::{
    AdvanceEvent, ClipEndedEvent, ClipSelectedEvent, PaintEvent, PlayerTransitionEvent,
    PlaylistFinishedEvent, SelectionRejectedEvent, TraceSink, Tracer,
};
use reel_debug::chrome::ChromeTraceSink;
use reel_debug::pretty::PrettyPrintSink;

const FRAME_COUNT: u64 = 200;
/// One 60 Hz refresh in microsecond ticks.
const REFRESH_US: u64 = 16_667;
const CLIP_SECONDS: [f64; 3] = [1.0, 1.5, 0.75];
/// Frame at which the user clicks the last clip.
const CLICK_FRAME: u64 = 100;

/// Media with a fixed duration and a manually advanced playhead.
#[derive(Debug)]
struct SimMedia {
    index: usize,
    duration: f64,
    position: f64,
    playing: bool,
}

impl SimMedia {
    /// Advances the playhead; returns `true` when it reaches the end.
    fn advance(&mut self, seconds: f64) -> bool {
        if !self.playing {
            return false;
        }
        self.position = (self.position + seconds).min(self.duration);
        if self.position >= self.duration {
            self.playing = false;
            return true;
        }
        false
    }
}

impl Media for SimMedia {
    fn rewind(&mut self) {
        self.position = 0.0;
    }

    fn play(&mut self) {
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn position(&self) -> f64 {
        self.position
    }
}

/// Remembers which clip drew last.
#[derive(Debug, Default)]
struct SimSurface {
    visible: Option<usize>,
    writes: u64,
}

impl DrawSurface<SimMedia> for SimSurface {
    fn bounds(&self) -> Rect {
        WidgetConfig::web().surface_bounds()
    }

    fn paint_frame(&mut self, media: &SimMedia) -> bool {
        self.visible = Some(media.index);
        self.writes += 1;
        true
    }
}

/// Forwards every event to both sinks.
struct Tee<'a> {
    pretty: &'a mut PrettyPrintSink,
    chrome: &'a mut ChromeTraceSink,
}

impl TraceSink for Tee<'_> {
    fn on_clip_selected(&mut self, e: &ClipSelectedEvent) {
        self.pretty.on_clip_selected(e);
        self.chrome.on_clip_selected(e);
    }

    fn on_selection_rejected(&mut self, e: &SelectionRejectedEvent) {
        self.pretty.on_selection_rejected(e);
        self.chrome.on_selection_rejected(e);
    }

    fn on_clip_ended(&mut self, e: &ClipEndedEvent) {
        self.pretty.on_clip_ended(e);
        self.chrome.on_clip_ended(e);
    }

    fn on_advance(&mut self, e: &AdvanceEvent) {
        self.pretty.on_advance(e);
        self.chrome.on_advance(e);
    }

    fn on_playlist_finished(&mut self, e: &PlaylistFinishedEvent) {
        self.pretty.on_playlist_finished(e);
        self.chrome.on_playlist_finished(e);
    }

    fn on_player_transition(&mut self, e: &PlayerTransitionEvent) {
        self.pretty.on_player_transition(e);
        self.chrome.on_player_transition(e);
    }

    fn on_frame_painted(&mut self, e: &PaintEvent) {
        self.pretty.on_frame_painted(e);
        self.chrome.on_frame_painted(e);
    }

    fn on_paint_skipped(&mut self, e: &PaintEvent) {
        self.pretty.on_paint_skipped(e);
        self.chrome.on_paint_skipped(e);
    }
}

fn main() {
    let mut config = WidgetConfig::web();
    if std::env::args().any(|a| a == "--every-player") {
        config.paint_policy = PaintPolicy::EveryPlayer;
    }

    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::with_writer(
        Box::new(std::io::stdout()) as Box<dyn std::io::Write>,
        1.0,
    );
    let mut chrome = ChromeTraceSink::new(1.0);
    let mut tee = Tee {
        pretty: &mut pretty,
        chrome: &mut chrome,
    };
    let mut tracer = Tracer::new(&mut tee);

    // -- playlist ----------------------------------------------------------
    let mut playlist: PlaylistController<SimMedia> =
        config.build_playlist().expect("built-in clip list is not empty");
    for (index, duration) in CLIP_SECONDS.into_iter().enumerate() {
        playlist.attach(
            index,
            SimMedia {
                index,
                duration,
                position: 0.0,
                playing: false,
            },
        );
    }
    let start = HostTime(1_000_000);
    let initial = playlist.sync_players();
    tracer.transitions(&initial, start);

    let mut surface = SimSurface::default();
    let frame_seconds = REFRESH_US as f64 / 1e6;

    // -- simulated display refreshes ---------------------------------------
    for frame_index in 0..FRAME_COUNT {
        let tick = Tick {
            now: HostTime(start.ticks() + frame_index * REFRESH_US),
            frame_index,
        };

        if frame_index == CLICK_FRAME {
            let last = playlist.len() - 1;
            if let Some(update) = playlist.select_clip(last) {
                tracer.selection(&update, tick.now);
            }
        }

        // Media time moves on; a clip that runs out reports its end.
        let mut ended = Vec::new();
        for index in 0..playlist.len() {
            let finished = playlist
                .player_mut(index)
                .and_then(|p| p.media_mut())
                .is_some_and(|m| m.advance(frame_seconds));
            if finished {
                ended.push(index);
            }
        }
        for index in ended {
            if let Some((transition, outcome)) = playlist.media_ended(index) {
                tracer.clip_ended(&transition, &outcome, tick.now);
            }
        }

        // Every player's loop ticks once per refresh.
        for index in 0..playlist.len() {
            let outcome = playlist.paint(index, &mut surface);
            tracer.paint(&PaintEvent::new(&tick, index, outcome));
        }
    }

    println!(
        "active clip {} | visible clip {:?} | {} frame copies",
        playlist.active_index(),
        surface.visible,
        surface.writes
    );

    // -- export Chrome trace -----------------------------------------------
    let path = "trace.json";
    let file = File::create(path).expect("failed to create trace.json");
    let mut writer = BufWriter::new(file);
    chrome
        .export(&mut writer)
        .expect("failed to write Chrome trace");

    println!("Wrote {path} ({FRAME_COUNT} frames)");
}
