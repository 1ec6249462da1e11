// Copyright 2026 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace events to the browser console.

use alloc::format;

use reel_core::trace::{
    AdvanceEvent, ClipEndedEvent, ClipSelectedEvent, PaintEvent, PlayerTransitionEvent,
    PlaylistFinishedEvent, SelectionRejectedEvent, TraceSink,
};
use wasm_bindgen::JsValue;
use web_sys::console;

/// A [`TraceSink`] that logs one line per event with `console.log`.
///
/// Paint events fire for every player on every display refresh, so they are
/// only logged when `log_paints` is set.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    /// Also log per-tick paint events.
    pub log_paints: bool,
}

impl ConsoleSink {
    /// Creates a sink that skips paint events.
    #[must_use]
    pub const fn new() -> Self {
        Self { log_paints: false }
    }
}

fn log(line: &str) {
    console::log_1(&JsValue::from_str(line));
}

impl TraceSink for ConsoleSink {
    fn on_clip_selected(&mut self, e: &ClipSelectedEvent) {
        log(&format!("[select] {} -> {}", e.previous, e.active));
    }

    fn on_selection_rejected(&mut self, e: &SelectionRejectedEvent) {
        log(&format!(
            "[select:rejected] index={} clips={}",
            e.requested, e.clip_count
        ));
    }

    fn on_clip_ended(&mut self, e: &ClipEndedEvent) {
        log(&format!("[ended] clip={}", e.index));
    }

    fn on_advance(&mut self, e: &AdvanceEvent) {
        log(&format!("[advance] {} -> {}", e.from, e.to));
    }

    fn on_playlist_finished(&mut self, e: &PlaylistFinishedEvent) {
        log(&format!("[finished] stopped on clip={}", e.index));
    }

    fn on_player_transition(&mut self, e: &PlayerTransitionEvent) {
        log(&format!(
            "[player] clip={} {:?} -> {:?} ({:?})",
            e.index, e.from, e.to, e.command
        ));
    }

    fn on_frame_painted(&mut self, e: &PaintEvent) {
        if self.log_paints {
            log(&format!("[paint] frame={} clip={}", e.frame_index, e.index));
        }
    }

    fn on_paint_skipped(&mut self, e: &PaintEvent) {
        if self.log_paints {
            log(&format!(
                "[paint:skip] frame={} clip={} {:?}",
                e.frame_index, e.index, e.outcome
            ));
        }
    }
}
