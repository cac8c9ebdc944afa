//! The mount point the page shell drives.
//!
//! The stage holds at most one mounted scene. Navigating unmounts the
//! current scene before mounting the next, and every mount gets a fresh
//! `MountId`, so late asset results and frame callbacks addressed to an
//! older mount find nothing to act on.

use crate::api::host::Host;
use crate::api::types::{FrameRequestId, MountId};
use crate::assets::loader::{AssetOutcome, AssetSource, AssetTicket};
use crate::bodies::BodyConfig;
use crate::config::TourConfig;
use crate::input::InputEvent;
use crate::lifecycle::mount::MountedScene;
use crate::renderer::traits::Renderer;
use crate::route::Route;

pub struct Stage<R: Renderer> {
    tour: TourConfig,
    next_id: u32,
    current: Option<MountedScene<R>>,
    /// Asset results dropped because their mount was gone.
    stale_results: u32,
}

impl<R: Renderer> Stage<R> {
    pub fn new(tour: TourConfig) -> Self {
        Self {
            tour,
            next_id: 0,
            current: None,
            stale_results: 0,
        }
    }

    pub fn tour(&self) -> &TourConfig {
        &self.tour
    }

    pub fn current(&self) -> Option<&MountedScene<R>> {
        self.current.as_ref()
    }

    pub fn current_id(&self) -> Option<MountId> {
        self.current.as_ref().map(MountedScene::id)
    }

    pub fn stale_results(&self) -> u32 {
        self.stale_results
    }

    /// Show the scene for `path`. Unmounts whatever is showing first; an
    /// unknown path leaves the stage empty. `make_renderer` is only called
    /// when a scene is mounted.
    pub fn navigate(
        &mut self,
        path: &str,
        host: &mut dyn Host,
        assets: &mut dyn AssetSource,
        make_renderer: impl FnOnce() -> R,
    ) -> Route {
        let route = Route::parse(path);
        self.unmount(host, assets);
        match route {
            Route::Body(id) => {
                self.mount(BodyConfig::for_body(id), host, assets, make_renderer());
            }
            Route::NotFound => log::info!("no scene for {path:?}"),
        }
        route
    }

    /// Mount `body`, replacing the current scene.
    pub fn mount(
        &mut self,
        body: &BodyConfig,
        host: &mut dyn Host,
        assets: &mut dyn AssetSource,
        renderer: R,
    ) -> MountId {
        self.unmount(host, assets);
        self.next_id += 1;
        let id = MountId(self.next_id);
        self.current = Some(MountedScene::mount(id, body, &self.tour, host, assets, renderer));
        id
    }

    /// Tear down the current scene. Returns `false` if nothing was mounted.
    pub fn unmount(&mut self, host: &mut dyn Host, assets: &mut dyn AssetSource) -> bool {
        match self.current.take() {
            Some(mounted) => {
                mounted.unmount(host, assets);
                true
            }
            None => false,
        }
    }

    /// Deliver an asset result. Results for any mount but the current one
    /// are dropped. Returns `true` if the scene changed.
    pub fn resolve(&mut self, ticket: AssetTicket, outcome: AssetOutcome) -> bool {
        match &mut self.current {
            Some(mounted) if mounted.id() == ticket.mount => mounted.on_asset(ticket.key, outcome),
            _ => {
                self.stale_results += 1;
                log::debug!("dropping {:?} for stale {:?}", ticket.key, ticket.mount);
                false
            }
        }
    }

    pub fn on_frame(&mut self, id: FrameRequestId, now_ms: f64, host: &mut dyn Host) {
        if let Some(mounted) = &mut self.current {
            mounted.on_frame(id, now_ms, host);
        }
    }

    pub fn on_resize(&mut self, host: &mut dyn Host) {
        if let Some(mounted) = &mut self.current {
            mounted.on_resize(host);
        }
    }

    pub fn on_visibility(&mut self, host: &mut dyn Host) {
        if let Some(mounted) = &mut self.current {
            mounted.on_visibility(host);
        }
    }

    pub fn push_input(&mut self, event: InputEvent) {
        if let Some(mounted) = &mut self.current {
            mounted.push_input(event);
        }
    }
}
