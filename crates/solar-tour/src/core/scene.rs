use glam::Vec3;

use crate::api::types::ModelHandle;
use crate::assets::loader::{AssetKey, Texture};
use crate::assets::typeface::{TextGeometry, Typeface};
use crate::bodies::{BodyId, LabelConfig};
use crate::components::label::LabelMesh;
use crate::components::light::Light;
use crate::components::mesh::{Mesh, MeshShape};
use crate::components::transform::Transform;
use crate::renderer::camera::PerspectiveCamera;

/// Addressable nodes of a scene, for tweens and asset slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneNode {
    Primary,
    Ring,
    Moon(usize),
}

/// A moon and its orbit state.
#[derive(Debug, Clone, PartialEq)]
pub struct MoonNode {
    pub mesh: Mesh,
    pub orbit_radius: f32,
    /// Radians per tick.
    pub orbit_speed: f32,
    /// Self-rotation, radians per tick.
    pub spin: f32,
    /// Current orbital angle in [0, 2π), measured from +X about +Y.
    pub angle: f32,
    pub label_config: Option<LabelConfig>,
    pub label: Option<LabelMesh>,
}

/// The renderable graph of one mounted body.
///
/// Owned by exactly one mount and dropped with it. Labels start out absent
/// and appear once the typeface arrives; textures likewise fill in later.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneHandle {
    pub body: BodyId,
    pub primary: Mesh,
    /// Self-rotation of the primary, radians per tick about Y.
    pub spin: f32,
    pub ring: Option<Mesh>,
    pub moons: Vec<MoonNode>,
    pub light: Light,
    pub camera: PerspectiveCamera,
    pub label_config: Option<LabelConfig>,
    pub label: Option<LabelMesh>,
}

impl SceneHandle {
    pub fn node_transform_mut(&mut self, node: SceneNode) -> Option<&mut Transform> {
        match node {
            SceneNode::Primary => Some(&mut self.primary.transform),
            SceneNode::Ring => self.ring.as_mut().map(|r| &mut r.transform),
            SceneNode::Moon(i) => self.moons.get_mut(i).map(|m| &mut m.mesh.transform),
        }
    }

    /// Primary, ring and moons, in draw order.
    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        std::iter::once(&self.primary)
            .chain(self.ring.iter())
            .chain(self.moons.iter().map(|m| &m.mesh))
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes().count()
    }

    /// Labels currently present.
    pub fn labels(&self) -> impl Iterator<Item = &LabelMesh> {
        self.label
            .iter()
            .chain(self.moons.iter().filter_map(|m| m.label.as_ref()))
    }

    pub fn label_count(&self) -> usize {
        self.labels().count()
    }

    /// Put a loaded texture on the mesh `key` names.
    /// Returns `false` if the scene has no such mesh.
    pub fn apply_texture(&mut self, key: AssetKey, texture: &Texture) -> bool {
        let mesh = match key {
            AssetKey::Surface => Some(&mut self.primary),
            AssetKey::Ring => self.ring.as_mut(),
            AssetKey::MoonSurface(i) => self.moons.get_mut(i).map(|m| &mut m.mesh),
            AssetKey::Font | AssetKey::Model => None,
        };
        match mesh {
            Some(mesh) => {
                mesh.material.texture = Some(texture.handle);
                true
            }
            None => false,
        }
    }

    /// Fill in the primary model. Returns `false` for sphere scenes.
    pub fn apply_model(&mut self, handle: ModelHandle) -> bool {
        match &mut self.primary.shape {
            MeshShape::Model { handle: slot } => {
                *slot = Some(handle);
                true
            }
            _ => false,
        }
    }

    /// Build every configured label from `typeface` and place it next to
    /// its body. Returns how many labels were attached.
    pub fn attach_labels(&mut self, typeface: &Typeface) -> usize {
        let mut attached = 0;

        if let Some(config) = &self.label_config {
            let mut label = build_label(typeface, config);
            label.track(self.primary.transform.translation);
            self.label = Some(label);
            attached += 1;
        }

        for moon in &mut self.moons {
            if let Some(config) = &moon.label_config {
                let mut label = build_label(typeface, config);
                label.track(moon.mesh.transform.translation);
                moon.label = Some(label);
                attached += 1;
            }
        }

        attached
    }
}

fn build_label(typeface: &Typeface, config: &LabelConfig) -> LabelMesh {
    let geometry = TextGeometry::build(typeface, &config.text, config.size, config.depth);
    LabelMesh::new(config.text.clone(), geometry, config.offset)
}

/// Position on a circular orbit of `radius` in the XZ plane.
pub fn orbit_position(radius: f32, angle: f32) -> Vec3 {
    glam::Quat::from_rotation_y(angle) * Vec3::new(radius, 0.0, 0.0)
}
