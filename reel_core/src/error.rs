// Copyright 2026 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

use core::fmt;

/// Errors from building a [`PlaylistController`](crate::playlist::PlaylistController).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaylistError {
    /// The clip list was empty, so no clip can be active.
    Empty,
}

impl fmt::Display for PlaylistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "playlist needs at least one clip"),
        }
    }
}

impl core::error::Error for PlaylistError {}
