//! One mounted scene: the graph plus everything it registered with the host.

use std::collections::HashSet;

use crate::api::host::{Host, ListenerKind, Visibility};
use crate::api::types::{FrameRequestId, ListenerId, MountId};
use crate::assets::loader::{requests_for, AssetKey, AssetOutcome, AssetPayload, AssetSource, AssetTicket};
use crate::bodies::BodyConfig;
use crate::config::TourConfig;
use crate::core::scene::SceneHandle;
use crate::error::AssetError;
use crate::extensions::tween::TweenState;
use crate::input::{InputEvent, InputQueue, OrbitControls};
use crate::lifecycle::render_loop::{FrameAction, RenderLoop, RenderLoopState};
use crate::lifecycle::viewport::{ViewportBinder, ViewportState};
use crate::renderer::instance::RenderBuffer;
use crate::renderer::traits::{DrawTiming, Renderer};
use crate::systems::{builder, motion, render};

/// Host registrations owned by a mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listeners {
    pub resize: ListenerId,
    pub visibility: ListenerId,
}

/// Per-mount state: the scene graph and all state the tick and the
/// resize/visibility handlers touch, passed to them explicitly.
///
/// There is no way to drop registrations except `unmount`, which takes the
/// scene by value; once it returns nothing of the mount is left to call.
pub struct MountedScene<R: Renderer> {
    id: MountId,
    scene: SceneHandle,
    tweens: TweenState,
    controls: OrbitControls,
    input: InputQueue,
    viewport: ViewportBinder,
    render_loop: RenderLoop,
    buffer: RenderBuffer,
    renderer: R,
    last_draw: DrawTiming,
    listeners: Listeners,
    outstanding: HashSet<AssetKey>,
}

impl<R: Renderer> MountedScene<R> {
    /// Request assets, build the graph, bind the viewport, register the
    /// resize and visibility listeners and start the render loop.
    pub fn mount(
        id: MountId,
        body: &BodyConfig,
        tour: &TourConfig,
        host: &mut dyn Host,
        assets: &mut dyn AssetSource,
        renderer: R,
    ) -> Self {
        let mut outstanding = HashSet::new();
        for (key, request) in requests_for(body, tour) {
            log::debug!("{}: requesting {:?} from {}", body.name, key, request.path());
            outstanding.insert(key);
            assets.fetch(AssetTicket { mount: id, key }, request);
        }

        let window = host.window_size();
        let mut scene = builder::build(body, tour, window.width);
        let tweens = builder::entrance(&scene, tour);

        let mut renderer = renderer;
        let mut viewport = ViewportBinder::new(tour, body.camera);
        viewport.on_resize(window, &mut scene.camera, &mut renderer);

        let listeners = Listeners {
            resize: host.add_listener(ListenerKind::Resize),
            visibility: host.add_listener(ListenerKind::Visibility),
        };

        let mut mounted = Self {
            id,
            scene,
            tweens,
            controls: OrbitControls::new(&body.controls),
            input: InputQueue::new(),
            viewport,
            render_loop: RenderLoop::new(tour.max_frame_dt),
            buffer: RenderBuffer::new(),
            renderer,
            last_draw: DrawTiming::default(),
            listeners,
            outstanding,
        };

        log::info!(
            "{}: mounted as {:?} ({} meshes, {} assets pending, renderer {})",
            body.name,
            id,
            mounted.scene.mesh_count(),
            mounted.outstanding.len(),
            mounted.renderer.backend()
        );

        let visible = host.visibility() == Visibility::Visible;
        if mounted.render_loop.start(visible) {
            let now = host.now_ms();
            mounted.tick(now, host);
        }
        mounted
    }

    pub fn id(&self) -> MountId {
        self.id
    }

    pub fn scene(&self) -> &SceneHandle {
        &self.scene
    }

    pub fn state(&self) -> RenderLoopState {
        self.render_loop.state()
    }

    pub fn ticks(&self) -> u64 {
        self.render_loop.ticks()
    }

    pub fn suspensions(&self) -> u32 {
        self.render_loop.suspensions()
    }

    pub fn pending_frame(&self) -> Option<FrameRequestId> {
        self.render_loop.pending()
    }

    pub fn listeners(&self) -> Listeners {
        self.listeners
    }

    pub fn viewport(&self) -> Option<&ViewportState> {
        self.viewport.state()
    }

    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Timing the renderer reported for the most recent frame.
    pub fn last_draw(&self) -> DrawTiming {
        self.last_draw
    }

    /// Asset slots still waiting for a result.
    pub fn outstanding_assets(&self) -> usize {
        self.outstanding.len()
    }

    /// Whether the entrance animation is still playing.
    pub fn entering(&self) -> bool {
        !self.tweens.is_empty()
    }

    /// One tick. The entrance tween advances first, then:
    /// (a) spin the primary, (b) advance moons and their labels,
    /// (c) move the body label, (d) drain input and update the orbit
    /// controls, (e) draw, (f) request the next frame.
    fn tick(&mut self, now_ms: f64, host: &mut dyn Host) {
        let dt = self.render_loop.begin_tick(now_ms);
        if !self.tweens.is_empty() {
            self.tweens.tick(dt, &mut self.scene);
        }

        motion::step(&mut self.scene);

        let height = self.viewport.state().map_or(1.0, |s| s.window.height);
        for event in self.input.drain() {
            self.controls.handle(event, height);
        }
        self.controls.update(&mut self.scene.camera);

        self.last_draw = render::draw_scene(&self.scene, &mut self.buffer, &mut self.renderer);
        log::trace!(
            "{}: tick {} drawn in {}us",
            self.scene.primary.tag,
            self.render_loop.ticks(),
            self.last_draw.draw_us
        );

        self.render_loop.finish_tick(host);
    }

    /// A frame request fired.
    pub fn on_frame(&mut self, id: FrameRequestId, now_ms: f64, host: &mut dyn Host) {
        if self.render_loop.on_frame(id) == FrameAction::Tick {
            self.tick(now_ms, host);
        }
    }

    /// The window was resized.
    pub fn on_resize(&mut self, host: &mut dyn Host) {
        let window = host.window_size();
        self.viewport
            .on_resize(window, &mut self.scene.camera, &mut self.renderer);
    }

    /// Page visibility changed.
    pub fn on_visibility(&mut self, host: &mut dyn Host) {
        match host.visibility() {
            Visibility::Hidden => self.render_loop.on_hidden(),
            Visibility::Visible => {
                if self.render_loop.on_visible() {
                    let now = host.now_ms();
                    self.tick(now, host);
                }
            }
        }
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Apply an asset result. Failures are logged and leave the fallback
    /// in place. Returns `true` if the scene changed.
    pub fn on_asset(&mut self, key: AssetKey, outcome: AssetOutcome) -> bool {
        self.outstanding.remove(&key);
        let name = self.scene.primary.tag.clone();

        let result = outcome.and_then(|payload| match (key, payload) {
            (AssetKey::Surface | AssetKey::Ring | AssetKey::MoonSurface(_), AssetPayload::Texture(texture)) => {
                if self.scene.apply_texture(key, &texture) {
                    log::debug!("{name}: {key:?} textured ({}x{})", texture.width, texture.height);
                    Ok(true)
                } else {
                    Err(AssetError::Mismatch(format!("{key:?} has no mesh")))
                }
            }
            (AssetKey::Font, AssetPayload::Font(typeface)) => {
                let attached = self.scene.attach_labels(&typeface);
                log::debug!("{name}: {attached} label(s) attached");
                Ok(attached > 0)
            }
            (AssetKey::Model, AssetPayload::Model(model)) => {
                if self.scene.apply_model(model.handle) {
                    log::debug!("{name}: model loaded ({} meshes)", model.info.mesh_count());
                    Ok(true)
                } else {
                    Err(AssetError::Mismatch(format!("{key:?} on a sphere scene")))
                }
            }
            (key, _) => Err(AssetError::Mismatch(format!("{key:?}"))),
        });

        match result {
            Ok(changed) => changed,
            Err(err) => {
                let fallback = match key {
                    AssetKey::Font => "labels omitted",
                    AssetKey::Model => "model omitted",
                    _ => "surface left untextured",
                };
                log::warn!("{name}: {err}; {fallback}");
                false
            }
        }
    }

    /// Tear down in order: resize listener, visibility listener, pending
    /// frame, in-flight assets, renderer. Consumes the mount.
    pub fn unmount(mut self, host: &mut dyn Host, assets: &mut dyn AssetSource) {
        host.remove_listener(self.listeners.resize);
        host.remove_listener(self.listeners.visibility);
        self.render_loop.stop(host);
        assets.release(self.id);
        self.renderer.dispose();
        log::info!(
            "{}: unmounted {:?} after {} ticks",
            self.scene.primary.tag,
            self.id,
            self.render_loop.ticks()
        );
    }
}
