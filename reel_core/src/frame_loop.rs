// Copyright 2026 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display-refresh ticks and their cancellable loops.
//!
//! Each clip player samples frames from a loop that fires once per display
//! refresh. Backends implement [`FrameLoop`] for their tick source (e.g.
//! `requestAnimationFrame`); the loop keeps re-registering itself until it is
//! stopped, and a stopped loop must not invoke its callback again, even if a
//! registration was already in flight.
//!
//! A [`LoopSlot`] owns the loop of one player. Installing a new loop stops the
//! old one first, and dropping the slot stops whatever is installed, so a
//! torn-down player never touches a released media handle.

use crate::time::HostTime;

/// One display-refresh opportunity delivered by a [`FrameLoop`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tick {
    /// Host time when the tick fired.
    pub now: HostTime,
    /// Monotonically increasing counter, per loop.
    pub frame_index: u64,
}

/// A repeating per-refresh task that can be stopped.
pub trait FrameLoop {
    /// Starts delivering ticks. No-op if already running.
    fn start(&self);

    /// Stops delivering ticks. Any pending callback becomes a no-op.
    fn stop(&self);

    /// Whether the loop is currently delivering ticks.
    fn is_running(&self) -> bool;
}

/// Owns at most one [`FrameLoop`] on behalf of a player.
#[derive(Debug)]
pub struct LoopSlot<L: FrameLoop> {
    current: Option<L>,
    generation: u64,
}

impl<L: FrameLoop> Default for LoopSlot<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: FrameLoop> LoopSlot<L> {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }

    /// Stops the installed loop (if any), then starts and keeps `frame_loop`.
    ///
    /// Returns the new generation number; it increases by one per install.
    pub fn install(&mut self, frame_loop: L) -> u64 {
        self.release();
        frame_loop.start();
        self.current = Some(frame_loop);
        self.generation += 1;
        self.generation
    }

    /// Stops and drops the installed loop.
    pub fn release(&mut self) {
        if let Some(old) = self.current.take() {
            old.stop();
        }
    }

    /// Whether a running loop is installed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.as_ref().is_some_and(L::is_running)
    }

    /// Number of loops installed so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The installed loop, if any.
    #[must_use]
    pub fn current(&self) -> Option<&L> {
        self.current.as_ref()
    }
}

impl<L: FrameLoop> Drop for LoopSlot<L> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    /// A loop that only records whether it is running.
    #[derive(Debug, Default)]
    struct FakeLoop {
        running: Rc<Cell<bool>>,
    }

    impl FrameLoop for FakeLoop {
        fn start(&self) {
            self.running.set(true);
        }

        fn stop(&self) {
            self.running.set(false);
        }

        fn is_running(&self) -> bool {
            self.running.get()
        }
    }

    fn fake() -> (FakeLoop, Rc<Cell<bool>>) {
        let running = Rc::new(Cell::new(false));
        (
            FakeLoop {
                running: Rc::clone(&running),
            },
            running,
        )
    }

    #[test]
    fn install_starts_the_loop() {
        let mut slot = LoopSlot::new();
        let (l, running) = fake();
        assert_eq!(slot.install(l), 1);
        assert!(running.get(), "installed loop runs");
        assert!(slot.is_active());
    }

    #[test]
    fn reinstall_stops_the_previous_loop() {
        let mut slot = LoopSlot::new();
        let (first, first_running) = fake();
        let (second, second_running) = fake();
        slot.install(first);
        assert_eq!(slot.install(second), 2);
        assert!(!first_running.get(), "old loop cancelled");
        assert!(second_running.get(), "new loop runs");
    }

    #[test]
    fn release_and_drop_stop_the_loop() {
        let (l, running) = fake();
        let mut slot = LoopSlot::new();
        slot.install(l);
        slot.release();
        assert!(!running.get(), "release stops");
        assert!(!slot.is_active());

        let (l, running) = fake();
        {
            let mut scoped = LoopSlot::new();
            scoped.install(l);
            assert!(running.get());
        }
        assert!(!running.get(), "drop stops");
    }

    #[test]
    fn empty_slot_is_inactive() {
        let slot: LoopSlot<FakeLoop> = LoopSlot::default();
        assert!(!slot.is_active());
        assert_eq!(slot.generation(), 0);
        assert!(slot.current().is_none());
    }
}
