// Copyright 2026 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2-D canvas drawing surface.

use kurbo::{Rect, Size};
use reel_core::media::DrawSurface;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::video::VideoMedia;

/// The shared `<canvas>` that video frames are copied into.
///
/// If no 2-D context could be obtained, every paint is skipped.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: Option<CanvasRenderingContext2d>,
    bounds: Rect,
}

impl core::fmt::Debug for CanvasSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CanvasSurface")
            .field("canvas", &"HtmlCanvasElement")
            .field("has_context", &self.context.is_some())
            .field("bounds", &self.bounds)
            .finish()
    }
}

impl CanvasSurface {
    /// Sizes `canvas` to `size` and acquires its 2-D context.
    pub fn new(canvas: HtmlCanvasElement, size: Size) -> Result<Self, JsValue> {
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "surface sizes are small positive CSS pixel counts"
        )]
        let (width, height) = (size.width as u32, size.height as u32);
        canvas.set_width(width);
        canvas.set_height(height);
        let context = canvas
            .get_context("2d")?
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
        Ok(Self {
            canvas,
            context,
            bounds: size.to_rect(),
        })
    }

    /// The canvas element.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl DrawSurface<VideoMedia> for CanvasSurface {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn paint_frame(&mut self, media: &VideoMedia) -> bool {
        let Some(ctx) = self.context.as_ref() else {
            return false;
        };
        let b = self.bounds;
        ctx.draw_image_with_html_video_element_and_dw_and_dh(
            media.element(),
            b.x0,
            b.y0,
            b.width(),
            b.height(),
        )
        .is_ok()
    }
}
