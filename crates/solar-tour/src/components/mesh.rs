use serde::{Deserialize, Serialize};

use super::transform::Transform;
use crate::api::types::{ModelHandle, TextureHandle};

/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a 0xRRGGBB literal.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Unlit surface description. Until a texture arrives the mesh draws in
/// `color`; a failed texture load leaves it that way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub texture: Option<TextureHandle>,
    /// Render both faces (rings are seen from above and below).
    pub double_sided: bool,
}

impl Material {
    pub fn untextured(color: Color) -> Self {
        Self {
            color,
            texture: None,
            double_sided: false,
        }
    }

    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    pub fn is_textured(&self) -> bool {
        self.texture.is_some()
    }
}

/// Geometry primitive of a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshShape {
    /// UV sphere centered at the local origin.
    Sphere { radius: f32, segments: u32 },
    /// Flat annulus in the local XY plane.
    Ring { inner: f32, outer: f32, segments: u32 },
    /// External glTF scene; `None` until the model finishes loading.
    Model { handle: Option<ModelHandle> },
}

impl MeshShape {
    /// Small integer tag used by the frame protocol.
    pub fn kind_id(&self) -> u32 {
        match self {
            MeshShape::Sphere { .. } => 0,
            MeshShape::Ring { .. } => 1,
            MeshShape::Model { .. } => 2,
        }
    }
}

/// A drawable node: shape, surface, and placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Name for logs and lookups ("earth", "moon-0", "ring").
    pub tag: String,
    pub shape: MeshShape,
    pub material: Material,
    pub transform: Transform,
}

impl Mesh {
    pub fn sphere(radius: f32, segments: u32, material: Material) -> Self {
        Self {
            tag: String::new(),
            shape: MeshShape::Sphere { radius, segments },
            material,
            transform: Transform::default(),
        }
    }

    pub fn ring(inner: f32, outer: f32, segments: u32, material: Material) -> Self {
        Self {
            tag: String::new(),
            shape: MeshShape::Ring { inner, outer, segments },
            material: material.double_sided(),
            transform: Transform::default(),
        }
    }

    pub fn model(material: Material) -> Self {
        Self {
            tag: String::new(),
            shape: MeshShape::Model { handle: None },
            material,
            transform: Transform::default(),
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Whether the mesh has something to show yet (models wait for their asset).
    pub fn is_ready(&self) -> bool {
        !matches!(self.shape, MeshShape::Model { handle: None })
    }
}
