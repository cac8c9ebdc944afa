use bytemuck::{Pod, Zeroable};

use crate::api::types::{ModelHandle, TextureHandle};
use crate::components::mesh::{Mesh, MeshShape};

/// Per-mesh render data handed to the host renderer.
/// 24 floats = 96 bytes stride; the JS side reads it as a `Float32Array`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct MeshInstance {
    /// Column-major model matrix.
    pub model: [f32; 16],
    pub color: [f32; 3],
    /// Texture handle, or -1.0 for untextured.
    pub texture: f32,
    /// `MeshShape::kind_id`.
    pub kind: f32,
    /// Sphere: radius, segments. Ring: inner, outer. Model: handle, 0.
    pub params: [f32; 2],
    /// 1.0 when both faces are drawn.
    pub double_sided: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 24;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    /// Flatten a mesh. Returns `None` for a model that has not loaded yet.
    pub fn from_mesh(mesh: &Mesh) -> Option<Self> {
        let params = match mesh.shape {
            MeshShape::Sphere { radius, segments } => [radius, segments as f32],
            MeshShape::Ring { inner, outer, .. } => [inner, outer],
            MeshShape::Model { handle: Some(handle) } => [handle.0 as f32, 0.0],
            MeshShape::Model { handle: None } => return None,
        };
        Some(Self {
            model: mesh.transform.matrix().to_cols_array(),
            color: mesh.material.color.to_array(),
            texture: mesh.material.texture.map_or(-1.0, |t| t.0 as f32),
            kind: mesh.shape.kind_id() as f32,
            params,
            double_sided: if mesh.material.double_sided { 1.0 } else { 0.0 },
        })
    }

    /// Texture this instance samples, if any.
    pub fn texture_handle(&self) -> Option<TextureHandle> {
        (self.texture >= 0.0).then(|| TextureHandle(self.texture as u32))
    }

    /// Model this instance draws, if it is a model instance.
    pub fn model_handle(&self) -> Option<ModelHandle> {
        let model_kind = MeshShape::Model { handle: None }.kind_id() as f32;
        (self.kind == model_kind).then(|| ModelHandle(self.params[0] as u32))
    }
}

/// Mesh instances of one frame.
pub struct RenderBuffer {
    pub instances: Vec<MeshInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(8),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Append a mesh if it is ready to draw.
    pub fn push_mesh(&mut self, mesh: &Mesh) {
        if let Some(instance) = MeshInstance::from_mesh(mesh) {
            self.instances.push(instance);
        }
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instance data as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mesh::{Color, Material};

    #[test]
    fn mesh_instance_is_24_floats() {
        assert_eq!(std::mem::size_of::<MeshInstance>(), 96);
        assert_eq!(MeshInstance::FLOATS, 24);
    }

    #[test]
    fn untextured_sphere_flattens() {
        let mesh = Mesh::sphere(3.5, 64, Material::untextured(Color::WHITE));
        let inst = MeshInstance::from_mesh(&mesh).unwrap();
        assert_eq!(inst.texture, -1.0);
        assert_eq!(inst.kind, 0.0);
        assert_eq!(inst.params, [3.5, 64.0]);
        assert_eq!(inst.model[0], 1.0);
        assert_eq!(inst.texture_handle(), None);
        assert_eq!(inst.model_handle(), None);
    }

    #[test]
    fn textured_ring_is_double_sided() {
        let mut mesh = Mesh::ring(5.0, 6.0, 64, Material::untextured(Color::WHITE));
        mesh.material.texture = Some(TextureHandle(7));
        let inst = MeshInstance::from_mesh(&mesh).unwrap();
        assert_eq!(inst.texture, 7.0);
        assert_eq!(inst.texture_handle(), Some(TextureHandle(7)));
        assert_eq!(inst.double_sided, 1.0);
        assert_eq!(inst.params, [5.0, 6.0]);
    }

    #[test]
    fn pending_model_is_skipped() {
        let mut buf = RenderBuffer::new();
        let mut mesh = Mesh::model(Material::untextured(Color::WHITE));
        buf.push_mesh(&mesh);
        assert_eq!(buf.instance_count(), 0);

        mesh.shape = MeshShape::Model { handle: Some(ModelHandle(2)) };
        buf.push_mesh(&mesh);
        assert_eq!(buf.instance_count(), 1);
        assert_eq!(buf.as_floats().len(), MeshInstance::FLOATS);
        assert_eq!(buf.instances[0].model_handle(), Some(ModelHandle(2)));
    }
}
