// Copyright 2026 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clip identifiers.
//!
//! A [`Clip`] is nothing more than the locator of a video resource. Clips are
//! created once when the playlist is built and never change afterwards.

use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;

/// One video resource, identified by its locator (a relative path or URL).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Clip {
    locator: Cow<'static, str>,
}

impl Clip {
    /// Creates a clip from a locator string.
    #[must_use]
    pub fn new(locator: impl Into<Cow<'static, str>>) -> Self {
        Self {
            locator: locator.into(),
        }
    }

    /// Returns the locator handed to the media element.
    #[must_use]
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// Builds clips from a static list without copying the strings.
    #[must_use]
    pub fn from_static_list(locators: &[&'static str]) -> Vec<Self> {
        locators.iter().map(|&l| Self::new(l)).collect()
    }
}

impl fmt::Debug for Clip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Clip({:?})", self.locator)
    }
}

impl fmt::Display for Clip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.locator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;

    #[test]
    fn static_list_keeps_order() {
        let clips = Clip::from_static_list(&["a.mp4", "b.mp4", "c.mp4"]);
        let locators: Vec<&str> = clips.iter().map(Clip::locator).collect();
        assert_eq!(locators, ["a.mp4", "b.mp4", "c.mp4"], "order preserved");
    }

    #[test]
    fn display_is_the_locator() {
        let clip = Clip::new(alloc::string::String::from("part1.mp4"));
        assert_eq!(clip.to_string(), "part1.mp4", "owned locators display as-is");
    }
}
