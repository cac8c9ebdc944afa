//! Browser side of `Host`: animation frames, window/document listeners and
//! the page clock.
//!
//! The three JS callbacks are created once and reused for every mount.
//! They call back into the runner through the exported `thread_local`, so
//! they must only ever fire from the browser event loop, never while the
//! runner is borrowed.

use std::collections::{BTreeMap, VecDeque};

use solar_tour::{FrameRequestId, Host, ListenerId, ListenerKind, Visibility, WindowSize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use js_sys::Function;
use web_sys::{Document, EventTarget, VisibilityState, Window};

pub struct WebHost {
    window: Window,
    document: Document,
    on_frame: Closure<dyn FnMut(f64)>,
    on_resize: Closure<dyn FnMut()>,
    on_visibility: Closure<dyn FnMut()>,
    /// Outstanding requests in the order the browser will fire them:
    /// our id and the browser's handle.
    frames: VecDeque<(FrameRequestId, i32)>,
    listeners: BTreeMap<u32, ListenerKind>,
    next_frame: u32,
    next_listener: u32,
}

impl WebHost {
    pub fn new(
        window: Window,
        on_frame: Closure<dyn FnMut(f64)>,
        on_resize: Closure<dyn FnMut()>,
        on_visibility: Closure<dyn FnMut()>,
    ) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        Ok(Self {
            window,
            document,
            on_frame,
            on_resize,
            on_visibility,
            frames: VecDeque::new(),
            listeners: BTreeMap::new(),
            next_frame: 0,
            next_listener: 0,
        })
    }

    /// The browser fired the oldest outstanding request.
    pub fn frame_fired(&mut self) -> Option<FrameRequestId> {
        self.frames.pop_front().map(|(id, _)| id)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn listener_target(&self, kind: ListenerKind) -> (&EventTarget, &'static str, &Function) {
        match kind {
            ListenerKind::Resize => (
                self.window.unchecked_ref::<EventTarget>(),
                "resize",
                self.on_resize.as_ref().unchecked_ref::<Function>(),
            ),
            ListenerKind::Visibility => (
                self.document.unchecked_ref::<EventTarget>(),
                "visibilitychange",
                self.on_visibility.as_ref().unchecked_ref::<Function>(),
            ),
        }
    }
}

impl Host for WebHost {
    fn window_size(&self) -> WindowSize {
        let dimension = |v: Result<JsValue, JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
        };
        WindowSize::new(
            dimension(self.window.inner_width()),
            dimension(self.window.inner_height()),
        )
    }

    fn visibility(&self) -> Visibility {
        match self.document.visibility_state() {
            VisibilityState::Hidden => Visibility::Hidden,
            _ => Visibility::Visible,
        }
    }

    fn now_ms(&self) -> f64 {
        self.window
            .performance()
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    fn request_frame(&mut self) -> Option<FrameRequestId> {
        let handle = self
            .window
            .request_animation_frame(self.on_frame.as_ref().unchecked_ref())
            .map_err(|err| log::error!("requestAnimationFrame failed: {err:?}"))
            .ok()?;
        self.next_frame += 1;
        let id = FrameRequestId(self.next_frame);
        self.frames.push_back((id, handle));
        Some(id)
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        let Some(index) = self.frames.iter().position(|(f, _)| *f == id) else {
            return;
        };
        if let Some((_, handle)) = self.frames.remove(index) {
            if let Err(err) = self.window.cancel_animation_frame(handle) {
                log::warn!("cancelAnimationFrame({handle}) failed: {err:?}");
            }
        }
    }

    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        let (target, event, callback) = self.listener_target(kind);
        if let Err(err) = target.add_event_listener_with_callback(event, callback) {
            log::error!("addEventListener({event}) failed: {err:?}");
        }
        self.listeners.insert(id.0, kind);
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        let Some(kind) = self.listeners.remove(&id.0) else {
            return;
        };
        let (target, event, callback) = self.listener_target(kind);
        if let Err(err) = target.remove_event_listener_with_callback(event, callback) {
            log::warn!("removeEventListener({event}) failed: {err:?}");
        }
    }
}
