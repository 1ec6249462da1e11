// Copyright 2026 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget configuration presets.
//!
//! The widget has no runtime configuration: the clip list, the surface size,
//! and the element attributes are fixed when the page starts.
//! [`WidgetConfig::web`] is the preset the browser demo uses.

use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::clip::Clip;
use crate::error::PlaylistError;
use crate::media::Media;
use crate::playlist::{PaintPolicy, PlaylistController};

/// The built-in clip list, played in this order.
pub const DEFAULT_CLIPS: &[&str] = &[
    "part1(split-video.com).mp4",
    "part2(split-video.com).mp4",
    "part3(split-video.com).mp4",
];

/// Logical size of the drawing surface, in CSS pixels.
pub const DEFAULT_SURFACE: Size = Size::new(400.0, 400.0);

/// Everything needed to build the widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidgetConfig {
    /// Clip locators in playback order.
    pub clips: &'static [&'static str],
    /// Logical size of the shared drawing surface.
    pub surface: Size,
    /// Which players may paint into the surface.
    pub paint_policy: PaintPolicy,
    /// Whether the media elements are muted.
    pub muted: bool,
    /// Whether the (hidden) media elements carry native controls.
    pub controls: bool,
}

impl WidgetConfig {
    /// Default configuration for the browser widget.
    #[must_use]
    pub const fn web() -> Self {
        Self {
            clips: DEFAULT_CLIPS,
            surface: DEFAULT_SURFACE,
            paint_policy: PaintPolicy::ActiveOnly,
            muted: true,
            controls: true,
        }
    }

    /// Surface bounds anchored at the origin.
    #[must_use]
    pub fn surface_bounds(&self) -> Rect {
        self.surface.to_rect()
    }

    /// Builds the clip list.
    #[must_use]
    pub fn build_clips(&self) -> Vec<Clip> {
        Clip::from_static_list(self.clips)
    }

    /// Builds a controller for this configuration.
    pub fn build_playlist<M: Media>(&self) -> Result<PlaylistController<M>, PlaylistError> {
        PlaylistController::new(self.build_clips(), self.paint_policy)
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::web()
    }
}
