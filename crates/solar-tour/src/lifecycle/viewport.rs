//! Maps the window onto the drawing surface and the camera.

use crate::api::host::WindowSize;
use crate::bodies::CameraConfig;
use crate::config::TourConfig;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::traits::Renderer;

/// Surface and projection state derived from the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub window: WindowSize,
    /// Drawing-surface size in device pixels.
    pub surface_width: u32,
    pub surface_height: u32,
    pub aspect: f32,
    /// Whether the window is below the mobile breakpoint.
    pub mobile: bool,
}

/// What a resize actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResizeOutcome {
    pub surface: bool,
    pub aspect: bool,
    pub distance: bool,
}

impl ResizeOutcome {
    pub fn any(&self) -> bool {
        self.surface || self.aspect || self.distance
    }
}

/// Keeps the surface at window size × pixel ratio and the camera's aspect
/// and distance in step with the window.
///
/// The camera distance is only reapplied when the viewport crosses the
/// mobile breakpoint (or on the first bind), so a resize that stays on the
/// same side keeps the user's zoom.
#[derive(Debug, Clone)]
pub struct ViewportBinder {
    pixel_ratio: f32,
    breakpoint: f32,
    camera: CameraConfig,
    state: Option<ViewportState>,
}

impl ViewportBinder {
    pub fn new(tour: &TourConfig, camera: CameraConfig) -> Self {
        Self {
            pixel_ratio: tour.pixel_ratio,
            breakpoint: tour.mobile_breakpoint,
            camera,
            state: None,
        }
    }

    pub fn state(&self) -> Option<&ViewportState> {
        self.state.as_ref()
    }

    fn surface_size(&self, window: WindowSize) -> (u32, u32) {
        let scale = |v: f32| (v.max(0.0) * self.pixel_ratio).round() as u32;
        (scale(window.width), scale(window.height))
    }

    /// Apply `window` to the surface and camera. Calling it again with the
    /// same size changes nothing.
    pub fn on_resize<R: Renderer + ?Sized>(
        &mut self,
        window: WindowSize,
        camera: &mut PerspectiveCamera,
        renderer: &mut R,
    ) -> ResizeOutcome {
        let (surface_width, surface_height) = self.surface_size(window);
        let mobile = window.width < self.breakpoint;
        let previous = self.state;

        let mut outcome = ResizeOutcome::default();

        let surface_changed = previous
            .map_or(true, |s| s.surface_width != surface_width || s.surface_height != surface_height);
        if surface_changed {
            renderer.resize(surface_width, surface_height);
            outcome.surface = true;
        }

        outcome.aspect = camera.set_aspect(window.aspect());

        let crossed = previous.map_or(true, |s| s.mobile != mobile);
        if crossed && self.camera.mobile_distance.is_some() {
            camera.set_distance(self.camera.distance_for(window.width, self.breakpoint));
            outcome.distance = true;
        }

        self.state = Some(ViewportState {
            window,
            surface_width,
            surface_height,
            aspect: camera.aspect(),
            mobile,
        });

        if outcome.any() {
            log::debug!(
                "viewport {}x{} -> surface {}x{} (mobile: {})",
                window.width,
                window.height,
                surface_width,
                surface_height,
                mobile
            );
        }
        outcome
    }
}
