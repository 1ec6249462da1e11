// Copyright 2026 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for media playback and frame painting.
//!
//! Backends provide two pieces:
//!
//! - **Media** — A playback handle for one clip (e.g. an `HtmlVideoElement`).
//!   Implements [`Media`]. The handle does its own decoding and timing; core
//!   only tells it to rewind, play, or pause.
//!
//! - **Surface** — The single shared output that frames are copied into
//!   (e.g. a 2-D canvas context). Implements [`DrawSurface`].
//!
//! Neither trait reports failures. A clip that never loads simply never ends,
//! and a surface that is not available yet skips the copy for that tick.

use kurbo::Rect;

/// A playback handle for one clip.
pub trait Media {
    /// Moves the playback position back to the start of the clip.
    fn rewind(&mut self);

    /// Starts or resumes playback from the current position.
    ///
    /// Whether playback actually begins is up to the host; a resource that
    /// fails to load stays silent.
    fn play(&mut self);

    /// Pauses playback, keeping the current position.
    fn pause(&mut self);

    /// Current playback position in seconds.
    fn position(&self) -> f64;
}

/// The shared 2-D output that receives copied frames.
///
/// Every caller writes into the same pixels; the last write of a display
/// frame is what the user sees.
pub trait DrawSurface<M: ?Sized> {
    /// Logical bounds of the surface. Frames are scaled to fill them.
    fn bounds(&self) -> Rect;

    /// Copies the current visual frame of `media` into [`bounds`](Self::bounds).
    ///
    /// Returns `false` if the surface is not available and nothing was drawn.
    fn paint_frame(&mut self, media: &M) -> bool;
}
