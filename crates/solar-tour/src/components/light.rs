use glam::Vec3;

use super::mesh::Color;

/// Light falloff model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Omnidirectional light with range `distance` and exponent `decay`.
    Point { distance: f32, decay: f32 },
    /// Parallel light shining from `position` toward the origin.
    Directional,
}

/// The single light of a scene, plus a flat ambient term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
    /// Ambient intensity added to every surface (0.0 = none).
    pub ambient: f32,
}

impl Light {
    pub fn point(color: Color, intensity: f32, distance: f32, decay: f32, position: Vec3) -> Self {
        Self {
            kind: LightKind::Point { distance, decay },
            color,
            intensity,
            position,
            ambient: 0.0,
        }
    }

    pub fn directional(color: Color, intensity: f32, position: Vec3, ambient: f32) -> Self {
        Self {
            kind: LightKind::Directional,
            color,
            intensity,
            position,
            ambient,
        }
    }

    /// Packed form for the frame protocol:
    /// `[kind, x, y, z, r, g, b, intensity, distance, decay, ambient, 0]`.
    pub fn to_floats(&self) -> [f32; 12] {
        let (kind, distance, decay) = match self.kind {
            LightKind::Point { distance, decay } => (0.0, distance, decay),
            LightKind::Directional => (1.0, 0.0, 0.0),
        };
        [
            kind,
            self.position.x,
            self.position.y,
            self.position.z,
            self.color.r,
            self.color.g,
            self.color.b,
            self.intensity,
            distance,
            decay,
            self.ambient,
            0.0,
        ]
    }
}
