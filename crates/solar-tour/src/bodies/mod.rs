//! Per-body scene descriptions.
//!
//! Every scene of the tour is the same controller driven by a different
//! `BodyConfig`. Bodies differ only in data: whether there is a ring,
//! how many moons, which label, which camera distance.

pub mod catalog;
pub mod facts;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::mesh::Color;

pub use catalog::catalog;
pub use facts::{facts_for, BodyFacts};

/// Every scene the tour can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyId {
    /// The landing page with the solar-system model.
    Intro,
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl BodyId {
    pub const ALL: [BodyId; 11] = [
        BodyId::Intro,
        BodyId::Sun,
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
        BodyId::Pluto,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BodyId::Intro => "Intro",
            BodyId::Sun => "Sun",
            BodyId::Mercury => "Mercury",
            BodyId::Venus => "Venus",
            BodyId::Earth => "Earth",
            BodyId::Mars => "Mars",
            BodyId::Jupiter => "Jupiter",
            BodyId::Saturn => "Saturn",
            BodyId::Uranus => "Uranus",
            BodyId::Neptune => "Neptune",
            BodyId::Pluto => "Pluto",
        }
    }

    /// Path the page shell mounts this body under.
    pub fn route(self) -> &'static str {
        match self {
            BodyId::Intro => "/",
            BodyId::Sun => "/sun",
            BodyId::Mercury => "/mercury",
            BodyId::Venus => "/venus",
            BodyId::Earth => "/earth",
            BodyId::Mars => "/mars",
            BodyId::Jupiter => "/jupiter",
            BodyId::Saturn => "/saturn",
            BodyId::Uranus => "/uranus",
            BodyId::Neptune => "/neptune",
            BodyId::Pluto => "/pluto",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// What sits at the origin of a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrimaryShape {
    Sphere { radius: f32, segments: u32 },
    /// A glTF scene placed at `position`, turned `yaw` radians about Y.
    Model { path: String, position: Vec3, yaw: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingConfig {
    pub inner: f32,
    pub outer: f32,
    pub segments: u32,
    pub texture: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelConfig {
    pub text: String,
    /// Glyph height in world units.
    pub size: f32,
    /// Extrusion depth in world units.
    pub depth: f32,
    /// Position relative to the labelled body, kept constant every tick.
    pub offset: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonConfig {
    pub name: String,
    pub radius: f32,
    pub texture: String,
    pub fallback_color: Color,
    /// Distance from the primary at angle zero (on +X).
    pub orbit_radius: f32,
    /// Orbital angle advance per tick, radians.
    pub orbit_speed: f32,
    /// Self-rotation per tick, radians.
    pub spin: f32,
    pub label: Option<LabelConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LightConfig {
    Point {
        color: Color,
        intensity: f32,
        distance: f32,
        decay: f32,
        position: Vec3,
    },
    Directional {
        color: Color,
        intensity: f32,
        position: Vec3,
        ambient: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Distance along +Z on wide viewports.
    pub distance: f32,
    /// Distance along +Z below the mobile breakpoint; `None` keeps `distance`.
    pub mobile_distance: Option<f32>,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraConfig {
    /// Camera distance for a viewport `width` logical pixels wide.
    /// Mobile iff `width < breakpoint`.
    pub fn distance_for(&self, width: f32, breakpoint: f32) -> f32 {
        match self.mobile_distance {
            Some(mobile) if width < breakpoint => mobile,
            _ => self.distance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlsConfig {
    pub enable_zoom: bool,
    pub auto_rotate: bool,
}

/// Immutable description of one scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub id: BodyId,
    pub name: String,
    pub shape: PrimaryShape,
    /// Surface texture of a sphere primary.
    pub surface: Option<String>,
    /// Surface colour until (or instead of) the texture.
    pub fallback_color: Color,
    /// Self-rotation of the primary per tick, radians about Y.
    pub spin: f32,
    pub ring: Option<RingConfig>,
    pub moons: Vec<MoonConfig>,
    pub label: Option<LabelConfig>,
    pub light: LightConfig,
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
}

impl BodyConfig {
    /// The catalog entry for `id`.
    pub fn for_body(id: BodyId) -> &'static BodyConfig {
        &catalog()[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_ids_are_in_index_order() {
        for (i, id) in BodyId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn routes_are_lowercase_names() {
        for id in BodyId::ALL.iter().skip(1) {
            assert_eq!(id.route(), format!("/{}", id.name().to_lowercase()));
        }
        assert_eq!(BodyId::Intro.route(), "/");
    }

    #[test]
    fn mobile_distance_applies_strictly_below_breakpoint() {
        let camera = CameraConfig {
            distance: 20.0,
            mobile_distance: Some(40.0),
            fov_degrees: 45.0,
            near: 0.01,
            far: 100.0,
        };
        assert_eq!(camera.distance_for(767.0, 768.0), 40.0);
        assert_eq!(camera.distance_for(768.0, 768.0), 20.0);
    }

    #[test]
    fn missing_mobile_distance_keeps_desktop() {
        let camera = CameraConfig {
            distance: 10.0,
            mobile_distance: None,
            fov_degrees: 45.0,
            near: 0.01,
            far: 100.0,
        };
        assert_eq!(camera.distance_for(320.0, 768.0), 10.0);
    }

    #[test]
    fn body_id_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&BodyId::Neptune).unwrap(), "\"neptune\"");
    }
}
