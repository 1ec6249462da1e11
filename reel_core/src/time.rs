// Copyright 2026 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic host time.
//!
//! [`HostTime`] is a point in time expressed as backend-native monotonic
//! ticks. The web backend uses microseconds derived from `performance.now()`;
//! core code only compares and subtracts them.

use core::fmt;

/// A point in time expressed as backend-native monotonic ticks.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostTime(pub u64);

impl HostTime {
    /// Returns the raw tick value.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> u64 {
        self.0
    }

    /// Returns the number of ticks elapsed since `earlier`, or zero if
    /// `earlier` is after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_ticks_since(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Debug for HostTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostTime({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_since_saturates() {
        assert_eq!(
            HostTime(1_500).saturating_ticks_since(HostTime(1_000)),
            500,
            "forward difference"
        );
        assert_eq!(
            HostTime(1_000).saturating_ticks_since(HostTime(1_500)),
            0,
            "earlier in the future clamps to zero"
        );
    }

    #[test]
    fn debug_shows_ticks() {
        assert_eq!(alloc::format!("{:?}", HostTime(42)), "HostTime(42)");
    }
}
