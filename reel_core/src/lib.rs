// Copyright 2026 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Playlist sequencing and frame painting for a canvas-mirrored clip player.
//!
//! `reel_core` models a small widget: an ordered list of video clips played
//! one after another, where the visible output is a single drawing surface
//! that receives a copy of the current video frame on every display refresh.
//! It is `no_std` compatible (with `alloc`) and knows nothing about the
//! browser; backends supply media and surfaces through two traits.
//!
//! # Architecture
//!
//! ```text
//!   click ──► PlaylistController::select_clip() ─┐
//!                                                 ├─► sync players ──► Media::rewind/play/pause
//!   media ended ──► media_ended() ──► advance ───┘
//!
//!   FrameLoop tick ──► PlaylistController::paint(index) ──► DrawSurface::paint_frame()
//! ```
//!
//! **[`playlist`]** — [`PlaylistController`](playlist::PlaylistController)
//! owns the clips, the active index, and one
//! [`ClipPlayer`](player::ClipPlayer) per clip.
//!
//! **[`player`]** — The per-clip state machine (Idle, Playing, Paused,
//! Ended) driven by the `play_now` flag.
//!
//! **[`media`]** — The [`Media`](media::Media) and
//! [`DrawSurface`](media::DrawSurface) seams that backends implement.
//!
//! **[`frame_loop`]** — [`Tick`](frame_loop::Tick), the cancellable
//! [`FrameLoop`](frame_loop::FrameLoop) contract, and the owning
//! [`LoopSlot`](frame_loop::LoopSlot).
//!
//! **[`config`]** — [`WidgetConfig`](config::WidgetConfig) presets.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types,
//! with a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod clip;
pub mod config;
pub mod error;
pub mod frame_loop;
pub mod media;
pub mod player;
pub mod playlist;
pub mod time;
pub mod trace;

#[cfg(test)]
mod test_util;
