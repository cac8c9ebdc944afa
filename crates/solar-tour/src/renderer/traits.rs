//! Renderer contract.
//!
//! The core never draws. Each tick it assembles a `FrameData` and hands it
//! to a `Renderer`; in the browser that is the canvas bridge in
//! `solar-tour-web`, in tests a recorder.

use glam::Mat4;

use super::camera::CameraUniform;
use super::instance::MeshInstance;
use crate::assets::typeface::TextGeometry;
use crate::components::light::Light;
use crate::components::mesh::Color;

/// Timing information from a draw call.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawTiming {
    /// Time spent submitting draw calls (microseconds)
    pub draw_us: u32,
}

/// One label to draw: flattened glyph contours placed by `model`.
#[derive(Debug, Clone, Copy)]
pub struct LabelDraw<'a> {
    pub model: Mat4,
    pub geometry: &'a TextGeometry,
    pub color: Color,
}

/// Complete frame data for rendering.
pub struct FrameData<'a> {
    /// View, projection and eye, packed the way the host uploads them.
    pub camera: CameraUniform,
    pub light: &'a Light,
    /// Primary, ring and moons, in that order. Meshes still waiting for
    /// their asset are left out.
    pub instances: &'a [MeshInstance],
    pub labels: &'a [LabelDraw<'a>],
}

/// Drawing surface of one mounted scene.
///
/// A renderer is created per mount and disposed on unmount; after
/// `dispose` it is dropped and never called again.
pub trait Renderer {
    /// Backend identifier (e.g. "canvas", "recording").
    fn backend(&self) -> &'static str;

    /// Draw a complete frame.
    fn draw(&mut self, frame: &FrameData) -> DrawTiming;

    /// Resize the drawing surface, in device pixels.
    fn resize(&mut self, width: u32, height: u32);

    /// Release GPU-side objects held for this scene.
    fn dispose(&mut self) {}
}
