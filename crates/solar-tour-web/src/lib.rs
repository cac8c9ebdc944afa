//! wasm-bindgen exports for the solar tour.
//!
//! The page calls `tour_init` once with its canvas and draw callback, then
//! `tour_navigate` on every route change. Animation frames, resize and
//! visibility events and asset loads are wired up on the Rust side.

pub mod assets;
pub mod host;
pub mod renderer;
pub mod runner;

use std::cell::RefCell;

use js_sys::Function;
use solar_tour::bodies::{catalog, facts_for};
use solar_tour::{AssetTicket, InputEvent, Route, TourConfig};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

pub use runner::TourRunner;

use crate::assets::Loaded;
use crate::host::WebHost;

thread_local! {
    static RUNNER: RefCell<Option<TourRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the value in `slot`.
///
/// `None` if the slot is empty or already borrowed. The second case is a
/// JS callback re-entering an export while Rust is still on the stack; it is
/// logged and dropped rather than panicking the instance.
fn with_slot<T, R>(slot: &RefCell<Option<T>>, f: impl FnOnce(&mut T) -> R) -> Option<R> {
    let Ok(mut borrow) = slot.try_borrow_mut() else {
        log::error!("re-entrant tour call ignored; the draw callback must not call tour_* exports");
        return None;
    };
    borrow.as_mut().map(f)
}

/// Run `f` against the runner. Does nothing (and logs) before `tour_init`.
fn with_runner<R>(f: impl FnOnce(&mut TourRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let initialized = cell.try_borrow().map_or(true, |runner| runner.is_some());
        if !initialized {
            log::warn!("tour not initialized; call tour_init() first");
            return None;
        }
        with_slot(cell, f)
    })
}

/// Entry point for asset completion callbacks.
pub(crate) fn deliver(ticket: AssetTicket, loaded: Loaded) {
    with_runner(|r| r.deliver(ticket, loaded));
}

/// Set up logging, the host callbacks and the runner.
/// `config_json` overrides any subset of the tour settings.
#[wasm_bindgen]
pub fn tour_init(
    canvas: HtmlCanvasElement,
    draw: Function,
    config_json: Option<String>,
) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let tour = match config_json {
        Some(json) => TourConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => TourConfig::default(),
    };

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let on_frame = Closure::<dyn FnMut(f64)>::new(|now_ms: f64| {
        with_runner(|r| r.on_frame(now_ms));
    });
    let on_resize = Closure::<dyn FnMut()>::new(|| {
        with_runner(|r| r.on_resize());
    });
    let on_visibility = Closure::<dyn FnMut()>::new(|| {
        with_runner(|r| r.on_visibility());
    });
    let host = WebHost::new(window, on_frame, on_resize, on_visibility)?;

    // a second init replaces the runner; tear the old scene down first
    tour_unmount();
    let runner = TourRunner::new(tour, host, canvas, draw);
    RUNNER.with(|cell| {
        let mut slot = cell
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("tour_init called from inside the draw callback"))?;
        *slot = Some(runner);
        Ok::<(), JsValue>(())
    })?;

    log::info!("solar-tour: initialized ({} bodies)", catalog().len());
    Ok(())
}

/// Mount the scene for `path`, unmounting the current one. Returns `false`
/// when the path names no scene (the page shows its not-found view).
#[wasm_bindgen]
pub fn tour_navigate(path: &str) -> bool {
    with_runner(|r| r.navigate(path)).unwrap_or(false)
}

/// Unmount the current scene, if any.
#[wasm_bindgen]
pub fn tour_unmount() -> bool {
    RUNNER.with(|cell| with_slot(cell, |r| r.unmount())).unwrap_or(false)
}

#[wasm_bindgen]
pub fn tour_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn tour_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn tour_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn tour_wheel(delta_y: f32) {
    with_runner(|r| r.push_input(InputEvent::Wheel { delta_y }));
}

// ---- Data accessors ----

/// Every body's scene description, as JSON.
#[wasm_bindgen]
pub fn tour_catalog_json() -> Result<String, JsValue> {
    serde_json::to_string(catalog()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Info-panel content for the body at `path`, as JSON. `None` for the
/// intro scene and unknown paths.
#[wasm_bindgen]
pub fn tour_facts_json(path: &str) -> Option<String> {
    let facts = Route::parse(path).body().and_then(facts_for)?;
    match serde_json::to_string(&facts) {
        Ok(json) => Some(json),
        Err(err) => {
            log::error!("facts for {path}: {err}");
            None
        }
    }
}

/// Ticks run by the current scene (0 when nothing is mounted).
#[wasm_bindgen]
pub fn tour_ticks() -> u64 {
    with_runner(|r| r.ticks()).flatten().unwrap_or(0)
}
