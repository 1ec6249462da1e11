// Copyright 2026 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for reel.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`RafLoop`]: `requestAnimationFrame` tick source, one per clip player
//! - [`VideoMedia`]: a hidden `<video>` element as the playback handle
//! - [`CanvasSurface`]: the shared 2-D canvas frames are copied into
//! - [`ListPresenter`]: the clickable clip list
//! - [`ConsoleSink`]: trace events to the browser console

#![no_std]

extern crate alloc;

mod canvas;
mod console;
mod presenter;
mod raf;
mod video;

pub use canvas::CanvasSurface;
pub use console::ConsoleSink;
pub use presenter::ListPresenter;
pub use raf::RafLoop;
pub use reel_core::frame_loop::FrameLoop;
pub use video::VideoMedia;

use reel_core::time::HostTime;

/// Returns the current host time from `performance.now()`.
///
/// The returned [`HostTime`] is in microsecond ticks.
#[must_use]
pub fn now() -> HostTime {
    host_time_from_millis(raf::performance_now())
}

/// Converts a `DOMHighResTimeStamp` (milliseconds) to microsecond ticks.
///
/// Negative and non-finite inputs map to zero.
#[must_use]
pub fn host_time_from_millis(ms: f64) -> HostTime {
    if !ms.is_finite() || ms <= 0.0 {
        return HostTime(0);
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "timestamp is a small positive f64; µs fits in u64"
    )]
    let us = (ms * 1000.0) as u64;
    HostTime(us)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_convert_to_microsecond_ticks() {
        assert_eq!(host_time_from_millis(16.5), HostTime(16_500));
        assert_eq!(host_time_from_millis(1_000.0), HostTime(1_000_000));
    }

    #[test]
    fn bad_timestamps_clamp_to_zero() {
        assert_eq!(host_time_from_millis(-3.0), HostTime(0));
        assert_eq!(host_time_from_millis(f64::NAN), HostTime(0));
        assert_eq!(host_time_from_millis(f64::INFINITY), HostTime(0));
    }
}
