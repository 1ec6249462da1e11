// Copyright 2026 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `<video>` element playback handles.

use reel_core::clip::Clip;
use reel_core::config::WidgetConfig;
use reel_core::media::Media;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlVideoElement};

/// A hidden `<video>` element playing one clip.
///
/// The element is kept out of layout (`display: none`); its frames reach the
/// user only through a [`CanvasSurface`](crate::CanvasSurface).
pub struct VideoMedia {
    element: HtmlVideoElement,
}

impl core::fmt::Debug for VideoMedia {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VideoMedia")
            .field("src", &self.element.src())
            .field("current_time", &self.element.current_time())
            .finish()
    }
}

impl VideoMedia {
    /// Wraps an existing element.
    #[must_use]
    pub fn new(element: HtmlVideoElement) -> Self {
        Self { element }
    }

    /// Creates a hidden element for `clip` using the attributes in `config`.
    ///
    /// The element is not inserted into the document.
    pub fn create(doc: &Document, clip: &Clip, config: &WidgetConfig) -> Result<Self, JsValue> {
        let element: HtmlVideoElement = doc.create_element("video")?.unchecked_into();
        element.set_src(clip.locator());
        element.set_controls(config.controls);
        element.set_muted(config.muted);
        element.set_attribute(
            "style",
            "width: 100%; max-height: calc(100vh - 200px); display: none;",
        )?;
        Ok(Self { element })
    }

    /// The underlying element.
    #[must_use]
    pub fn element(&self) -> &HtmlVideoElement {
        &self.element
    }
}

impl Media for VideoMedia {
    fn rewind(&mut self) {
        self.element.set_current_time(0.0);
    }

    fn play(&mut self) {
        // A rejected play() promise (missing resource, autoplay policy) is a
        // silent stall.
        let _ = self.element.play();
    }

    fn pause(&mut self) {
        let _ = self.element.pause();
    }

    fn position(&self) -> f64 {
        self.element.current_time()
    }
}
