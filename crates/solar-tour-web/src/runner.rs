use js_sys::Function;
use solar_tour::{AssetTicket, InputEvent, Route, Stage, TourConfig};
use web_sys::HtmlCanvasElement;

use crate::assets::{Loaded, WebAssets};
use crate::host::WebHost;
use crate::renderer::CanvasRenderer;

/// Owns the stage and the browser services it talks to.
///
/// wasm-bindgen cannot export generic structs, so `lib.rs` keeps one runner
/// in a `thread_local!` and exports free functions that forward here.
pub struct TourRunner {
    stage: Stage<CanvasRenderer>,
    host: WebHost,
    assets: WebAssets,
    canvas: HtmlCanvasElement,
    draw: Function,
}

impl TourRunner {
    pub fn new(tour: TourConfig, host: WebHost, canvas: HtmlCanvasElement, draw: Function) -> Self {
        let assets = WebAssets::new(&tour);
        Self {
            stage: Stage::new(tour),
            host,
            assets,
            canvas,
            draw,
        }
    }

    /// Show the scene for `path`. Returns `false` for unknown routes.
    pub fn navigate(&mut self, path: &str) -> bool {
        let canvas = self.canvas.clone();
        let draw = self.draw.clone();
        let store = self.assets.store();
        let pixel_ratio = self.stage.tour().pixel_ratio;
        let route = self.stage.navigate(path, &mut self.host, &mut self.assets, move || {
            CanvasRenderer::new(canvas, draw, store, pixel_ratio)
        });
        matches!(route, Route::Body(_))
    }

    pub fn unmount(&mut self) -> bool {
        self.stage.unmount(&mut self.host, &mut self.assets)
    }

    pub fn on_frame(&mut self, now_ms: f64) {
        // rAF callbacks fire in request order
        if let Some(id) = self.host.frame_fired() {
            self.stage.on_frame(id, now_ms, &mut self.host);
        }
    }

    pub fn on_resize(&mut self) {
        self.stage.on_resize(&mut self.host);
    }

    pub fn on_visibility(&mut self) {
        self.stage.on_visibility(&mut self.host);
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.stage.push_input(event);
    }

    /// A browser fetch finished.
    pub fn deliver(&mut self, ticket: AssetTicket, loaded: Loaded) {
        let outcome = self.assets.complete(ticket, loaded);
        self.stage.resolve(ticket, outcome);
    }

    /// Ticks run by the current scene, if any.
    pub fn ticks(&self) -> Option<u64> {
        self.stage.current().map(|m| m.ticks())
    }
}
