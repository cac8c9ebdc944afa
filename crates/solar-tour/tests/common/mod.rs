//! Common test doubles for integration tests: a recording host, an asset
//! source that holds requests until the test resolves them, and a renderer
//! that counts what it was asked to do.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use solar_tour::{
    AssetOutcome, AssetPayload, AssetRequest, AssetSource, AssetTicket, DrawTiming, FrameData,
    FrameRequestId, Host, ListenerId, ListenerKind, MountId, Renderer, Stage, Texture,
    TextureHandle, TourConfig, Typeface, Visibility, WindowSize,
};

/// Milliseconds between simulated frames.
pub const FRAME_MS: f64 = 16.0;

/// Draw time every recorded frame reports.
pub const DRAW_US: u32 = 250;

#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    AddListener(ListenerKind, ListenerId),
    RemoveListener(ListenerId),
    RequestFrame(FrameRequestId),
    CancelFrame(FrameRequestId),
}

/// Host that records every registration and lets the test fire frames.
pub struct FakeHost {
    pub window: WindowSize,
    pub visibility: Visibility,
    pub now: f64,
    pub calls: Vec<HostCall>,
    pub frames: VecDeque<FrameRequestId>,
    pub listeners: BTreeMap<u32, ListenerKind>,
    /// Simulates a browser that fails to schedule animation frames.
    pub refuse_frames: bool,
    next_frame: u32,
    next_listener: u32,
}

impl FakeHost {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            window: WindowSize::new(width, height),
            visibility: Visibility::Visible,
            now: 0.0,
            calls: Vec::new(),
            frames: VecDeque::new(),
            listeners: BTreeMap::new(),
            refuse_frames: false,
            next_frame: 0,
            next_listener: 0,
        }
    }

    pub fn desktop() -> Self {
        Self::new(1280.0, 800.0)
    }

    /// Take the oldest outstanding frame request, as the browser would fire it.
    pub fn take_frame(&mut self) -> Option<FrameRequestId> {
        self.frames.pop_front()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn requested_frames(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::RequestFrame(_)))
            .count()
    }
}

impl Host for FakeHost {
    fn window_size(&self) -> WindowSize {
        self.window
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn now_ms(&self) -> f64 {
        self.now
    }

    fn request_frame(&mut self) -> Option<FrameRequestId> {
        if self.refuse_frames {
            return None;
        }
        self.next_frame += 1;
        let id = FrameRequestId(self.next_frame);
        self.frames.push_back(id);
        self.calls.push(HostCall::RequestFrame(id));
        Some(id)
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        self.frames.retain(|f| *f != id);
        self.calls.push(HostCall::CancelFrame(id));
    }

    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.insert(id.0, kind);
        self.calls.push(HostCall::AddListener(kind, id));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id.0);
        self.calls.push(HostCall::RemoveListener(id));
    }
}

/// Asset source that parks requests until the test resolves them.
#[derive(Default)]
pub struct FakeAssets {
    pub requests: Vec<(AssetTicket, AssetRequest)>,
    pub released: Vec<MountId>,
}

impl FakeAssets {
    pub fn in_flight(&self, mount: MountId) -> usize {
        self.requests.iter().filter(|(t, _)| t.mount == mount).count()
    }

    pub fn take(&mut self) -> Vec<(AssetTicket, AssetRequest)> {
        std::mem::take(&mut self.requests)
    }
}

impl AssetSource for FakeAssets {
    fn fetch(&mut self, ticket: AssetTicket, request: AssetRequest) {
        self.requests.push((ticket, request));
    }

    fn release(&mut self, mount: MountId) {
        self.requests.retain(|(t, _)| t.mount != mount);
        self.released.push(mount);
    }
}

#[derive(Debug, Default)]
pub struct RenderLog {
    pub draws: u32,
    pub resizes: Vec<(u32, u32)>,
    pub disposed: bool,
    pub last_instances: usize,
    pub last_labels: usize,
    pub last_textured: usize,
    /// Camera eye of the last frame, w = 1.
    pub last_eye: [f32; 4],
    /// Draw calls received after `dispose`.
    pub draws_after_dispose: u32,
}

/// Renderer that records into a shared log the test keeps a handle to.
pub struct RecordingRenderer {
    pub log: Rc<RefCell<RenderLog>>,
}

impl RecordingRenderer {
    pub fn new() -> (Self, Rc<RefCell<RenderLog>>) {
        let log = Rc::new(RefCell::new(RenderLog::default()));
        (Self { log: Rc::clone(&log) }, log)
    }
}

impl Renderer for RecordingRenderer {
    fn backend(&self) -> &'static str {
        "recording"
    }

    fn draw(&mut self, frame: &FrameData) -> DrawTiming {
        let mut log = self.log.borrow_mut();
        if log.disposed {
            log.draws_after_dispose += 1;
        }
        log.draws += 1;
        log.last_instances = frame.instances.len();
        log.last_labels = frame.labels.len();
        log.last_textured = frame.instances.iter().filter(|i| i.texture >= 0.0).count();
        log.last_eye = frame.camera.eye;
        DrawTiming {
            draw_us: DRAW_US,
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.log.borrow_mut().resizes.push((width, height));
    }

    fn dispose(&mut self) {
        self.log.borrow_mut().disposed = true;
    }
}

pub fn stage() -> Stage<RecordingRenderer> {
    Stage::new(TourConfig::default())
}

/// Fire `n` frames in order, advancing the clock between them.
/// Returns how many frames were actually available to fire.
pub fn run_frames(stage: &mut Stage<RecordingRenderer>, host: &mut FakeHost, n: usize) -> usize {
    let mut fired = 0;
    for _ in 0..n {
        let Some(id) = host.take_frame() else {
            break;
        };
        host.now += FRAME_MS;
        let now = host.now;
        stage.on_frame(id, now, host);
        fired += 1;
    }
    fired
}

pub fn texture(handle: u32) -> AssetOutcome {
    Ok(AssetPayload::Texture(Texture {
        handle: TextureHandle(handle),
        width: 1024,
        height: 512,
    }))
}

/// A typeface with a single square glyph for every letter of the tour's labels.
pub fn typeface() -> Typeface {
    let square = r#"{ "ha": 700, "o": "m 0 0 l 600 0 l 600 700 l 0 700 z" }"#;
    let letters = "SunMercuryVenusEarthMoonMarsPhobosDeimosJupiterSaturnUranusNeptunePluto";
    let mut glyphs: Vec<String> = Vec::new();
    let mut seen = std::collections::BTreeSet::new();
    for ch in letters.chars() {
        if seen.insert(ch) {
            glyphs.push(format!("\"{ch}\": {square}"));
        }
    }
    let json = format!(
        r#"{{ "glyphs": {{ {} }}, "familyName": "Square", "boundingBox": {{ "yMin": -200, "yMax": 800 }}, "resolution": 1000 }}"#,
        glyphs.join(", ")
    );
    Typeface::from_json(&json).unwrap()
}
