// Copyright 2026 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clip list DOM management.
//!
//! Renders one `<li>` per clip inside a `<ul>` and keeps the underline on the
//! active entry in sync with the playlist.

use alloc::vec::Vec;

use reel_core::clip::Clip;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

/// Maps the playlist's clips to clickable list items.
pub struct ListPresenter {
    container: HtmlElement,
    items: Vec<HtmlElement>,
    active: Option<usize>,
}

impl core::fmt::Debug for ListPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListPresenter")
            .field("container", &"HtmlElement")
            .field("items_len", &self.items.len())
            .field("active", &self.active)
            .finish()
    }
}

impl ListPresenter {
    /// Creates a `<ul>` with one `<li>` per clip, labelled by its locator.
    ///
    /// No entry is underlined until the first [`apply`](Self::apply).
    pub fn new<'a>(
        doc: &Document,
        clips: impl IntoIterator<Item = &'a Clip>,
    ) -> Result<Self, JsValue> {
        let container: HtmlElement = doc.create_element("ul")?.unchecked_into();
        let mut items = Vec::new();
        for clip in clips {
            let li: HtmlElement = doc.create_element("li")?.unchecked_into();
            li.set_text_content(Some(clip.locator()));
            li.style().set_property("cursor", "pointer")?;
            container.append_child(&li)?;
            items.push(li);
        }
        Ok(Self {
            container,
            items,
            active: None,
        })
    }

    /// Returns the `<ul>` element.
    #[must_use]
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    /// Returns the list item for the clip at `index`.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&HtmlElement> {
        self.items.get(index)
    }

    /// Number of list items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Underlines the entry at `active` and clears the previous one.
    pub fn apply(&mut self, active: usize) {
        if self.active == Some(active) {
            return;
        }
        if let Some(prev) = self.active.and_then(|i| self.items.get(i)) {
            let _ = prev.style().remove_property("text-decoration");
        }
        if let Some(el) = self.items.get(active) {
            let _ = el.style().set_property("text-decoration", "underline");
        }
        self.active = Some(active);
    }
}
