// Copyright 2026 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sequential clip playlist mirrored onto a canvas.
//!
//! Three hidden `<video>` elements play one after another. Each one has its
//! own `requestAnimationFrame` loop that copies its current frame into a
//! shared 400×400 `<canvas>`; the list above it selects a clip and underlines
//! the active one.
//!
//! Build with: `wasm-pack build --target web demos/web_playlist`
//! Then put the clips next to `index.html`, serve `demos/web_playlist/`, and
//! open `index.html`.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::string::ToString as _;
use alloc::vec::Vec;
use core::cell::RefCell;

use reel_backend_web::{CanvasSurface, ConsoleSink, ListPresenter, RafLoop, VideoMedia};
use reel_core::clip::Clip;
use reel_core::config::WidgetConfig;
use reel_core::frame_loop::{LoopSlot, Tick};
use reel_core::playlist::{EndOutcome, PlaylistController};
use reel_core::trace::{PaintEvent, SelectionRejectedEvent, Tracer};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlCanvasElement, HtmlElement, HtmlVideoElement};

struct PlaylistApp {
    controller: PlaylistController<VideoMedia>,
    surface: CanvasSurface,
    list: ListPresenter,
    loops: Vec<LoopSlot<RafLoop>>,
    sink: ConsoleSink,
}

/// Entry point for the playlist demo.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let document = web_sys::window()
        .expect("window")
        .document()
        .expect("document");

    let config = WidgetConfig::web();
    let mut controller: PlaylistController<VideoMedia> = config
        .build_playlist()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let clips: Vec<Clip> = controller.clips().cloned().collect();

    let root = element(&document, "div")?;

    let mut list = ListPresenter::new(&document, &clips)?;
    root.append_child(list.container())?;

    let mut videos = Vec::with_capacity(clips.len());
    for (index, clip) in clips.iter().enumerate() {
        let media = VideoMedia::create(&document, clip, &config)?;
        root.append_child(media.element())?;
        videos.push(media.element().clone());
        controller.attach(index, media);
    }

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.unchecked_into();
    let surface = CanvasSurface::new(canvas, config.surface)?;
    root.append_child(surface.canvas())?;

    document.body().expect("body").append_child(&root)?;

    let mut sink = ConsoleSink::new();
    let initial = controller.sync_players();
    list.apply(controller.active_index());
    Tracer::new(&mut sink).transitions(&initial, reel_backend_web::now());

    let state = Rc::new(RefCell::new(PlaylistApp {
        loops: (0..clips.len()).map(|_| LoopSlot::new()).collect(),
        controller,
        surface,
        list,
        sink,
    }));

    bind_controls(&state, &videos)?;

    for index in 0..clips.len() {
        install_loop(&state, index);
    }

    // The page owns the widget for its whole lifetime.
    core::mem::forget(state);

    Ok(())
}

fn bind_controls(
    state: &Rc<RefCell<PlaylistApp>>,
    videos: &[HtmlVideoElement],
) -> Result<(), JsValue> {
    let len = state.borrow().list.len();
    for index in 0..len {
        let click_state = Rc::clone(state);
        let click_cb = Closure::wrap(Box::new(move |_event: Event| {
            on_select(&click_state, index);
        }) as Box<dyn FnMut(_)>);
        if let Some(item) = state.borrow().list.item(index) {
            item.add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())?;
        }
        click_cb.forget();
    }

    for (index, video) in videos.iter().enumerate() {
        let ended_state = Rc::clone(state);
        let ended_cb = Closure::wrap(Box::new(move |_event: Event| {
            on_ended(&ended_state, index);
        }) as Box<dyn FnMut(_)>);
        video.add_event_listener_with_callback("ended", ended_cb.as_ref().unchecked_ref())?;
        ended_cb.forget();
    }

    Ok(())
}

/// Replaces the frame loop of the player at `index`.
fn install_loop(state: &Rc<RefCell<PlaylistApp>>, index: usize) {
    let weak: Weak<RefCell<PlaylistApp>> = Rc::downgrade(state);
    let raf = RafLoop::new(move |tick| {
        if let Some(state) = weak.upgrade() {
            on_tick(&state, index, tick);
        }
    });
    if let Some(slot) = state.borrow_mut().loops.get_mut(index) {
        slot.install(raf);
    }
}

fn on_tick(state: &Rc<RefCell<PlaylistApp>>, index: usize, tick: Tick) {
    let mut guard = state.borrow_mut();
    let app = &mut *guard;
    let outcome = app.controller.paint(index, &mut app.surface);
    Tracer::new(&mut app.sink).paint(&PaintEvent::new(&tick, index, outcome));
}

fn on_select(state: &Rc<RefCell<PlaylistApp>>, index: usize) {
    let restarted: Vec<usize> = {
        let mut guard = state.borrow_mut();
        let app = &mut *guard;
        let now = reel_backend_web::now();
        match app.controller.select_clip(index) {
            Some(update) => {
                app.list.apply(update.active);
                Tracer::new(&mut app.sink).selection(&update, now);
                update.transitions.iter().map(|t| t.index).collect()
            }
            None => {
                Tracer::new(&mut app.sink).selection_rejected(&SelectionRejectedEvent {
                    at: now,
                    requested: index,
                    clip_count: app.controller.len(),
                });
                Vec::new()
            }
        }
    };
    for i in restarted {
        install_loop(state, i);
    }
}

fn on_ended(state: &Rc<RefCell<PlaylistApp>>, index: usize) {
    let restarted: Vec<usize> = {
        let mut guard = state.borrow_mut();
        let app = &mut *guard;
        let now = reel_backend_web::now();
        let Some((ended, outcome)) = app.controller.media_ended(index) else {
            return;
        };
        app.list.apply(app.controller.active_index());
        Tracer::new(&mut app.sink).clip_ended(&ended, &outcome, now);
        match outcome {
            EndOutcome::Advanced(update) => update.transitions.iter().map(|t| t.index).collect(),
            EndOutcome::Finished { .. } => Vec::new(),
        }
    };
    for i in restarted {
        install_loop(state, i);
    }
}

fn element(doc: &Document, tag: &str) -> Result<HtmlElement, JsValue> {
    Ok(doc.create_element(tag)?.unchecked_into())
}
