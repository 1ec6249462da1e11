// Copyright 2026 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` tick source.
//!
//! [`RafLoop`] drives a per-player sampling loop using the browser's
//! `requestAnimationFrame` API. Each callback receives a
//! [`DOMHighResTimeStamp`][mdn] (milliseconds from `performance.now()`),
//! which is converted to microsecond [`HostTime`] ticks.
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/API/DOMHighResTimeStamp
//! [`HostTime`]: reel_core::time::HostTime

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use reel_core::frame_loop::{FrameLoop, Tick};

// Direct global bindings instead of `web_sys::Window` methods; avoids
// fetching (and unwrapping) the Window/Performance objects on every frame.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

/// A `requestAnimationFrame` loop that emits [`Tick`] events.
///
/// Create with [`RafLoop::new`], then call [`start`](FrameLoop::start) (or
/// hand it to a [`LoopSlot`](reel_core::frame_loop::LoopSlot)). The loop
/// re-registers itself each frame until [`stop`](FrameLoop::stop) is called
/// or the `RafLoop` is dropped. A callback that was already queued when the
/// loop stopped returns without calling the user callback.
pub struct RafLoop {
    inner: Rc<RafInner>,
}

type RafClosure = Closure<dyn FnMut(f64)>;

struct RafInner {
    /// The JS closure registered with `requestAnimationFrame`.
    ///
    /// Stored in its own `RefCell` so we can set it once in `start()` and
    /// reference it from inside itself without conflicting with `callback`.
    closure: RefCell<Option<RafClosure>>,

    /// The user-supplied callback that receives [`Tick`] events.
    callback: RefCell<Box<dyn FnMut(Tick)>>,

    /// Monotonically increasing frame counter (becomes `Tick::frame_index`).
    frame_counter: Cell<u64>,

    /// Cancellation flag checked before every callback and re-registration.
    running: Cell<bool>,

    /// The ID returned by the most recent `requestAnimationFrame` call.
    raf_id: Cell<i32>,
}

impl RafLoop {
    /// Creates a new `RafLoop` that is **not yet running**.
    pub fn new(callback: impl FnMut(Tick) + 'static) -> Self {
        Self {
            inner: Rc::new(RafInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                frame_counter: Cell::new(0),
                running: Cell::new(false),
                raf_id: Cell::new(0),
            }),
        }
    }

    /// Number of ticks delivered so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.inner.frame_counter.get()
    }
}

impl FrameLoop for RafLoop {
    fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);

        // The closure is created once and reused across stop/start cycles.
        if self.inner.closure.borrow().is_none() {
            let inner = Rc::downgrade(&self.inner);
            let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
                let Some(inner) = inner.upgrade() else {
                    return;
                };
                if !inner.running.get() {
                    return;
                }

                let frame_index = inner.frame_counter.get();
                inner.frame_counter.set(frame_index + 1);

                let tick = Tick {
                    now: crate::host_time_from_millis(timestamp_ms),
                    frame_index,
                };

                // The borrow is scoped so it doesn't overlap with the
                // `closure` RefCell.
                inner.callback.borrow_mut()(tick);

                if inner.running.get()
                    && let Some(ref closure) = *inner.closure.borrow()
                {
                    let id = request_animation_frame(closure.as_ref().unchecked_ref());
                    inner.raf_id.set(id);
                }
            }) as Box<dyn FnMut(f64)>);
            *self.inner.closure.borrow_mut() = Some(closure);
        }

        if let Some(ref closure) = *self.inner.closure.borrow() {
            let id = request_animation_frame(closure.as_ref().unchecked_ref());
            self.inner.raf_id.set(id);
        }
    }

    fn stop(&self) {
        if !self.inner.running.get() {
            return;
        }
        self.inner.running.set(false);
        cancel_animation_frame(self.inner.raf_id.get());
    }

    fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
        // Drop the JS closure so it doesn't leak.
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for RafLoop {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RafLoop")
            .field("running", &self.inner.running.get())
            .field("frame_counter", &self.inner.frame_counter.get())
            .finish_non_exhaustive()
    }
}
