use glam::Vec3;

use super::transform::Transform;
use crate::assets::typeface::TextGeometry;

/// Text mesh floating next to a body.
///
/// Labels are not parented to the meshes they describe: every tick the
/// render loop moves them to `anchor + offset`, where the anchor is the
/// body's current position. Orientation and scale never change.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMesh {
    pub text: String,
    pub geometry: TextGeometry,
    pub offset: Vec3,
    pub transform: Transform,
}

impl LabelMesh {
    pub fn new(text: impl Into<String>, geometry: TextGeometry, offset: Vec3) -> Self {
        Self {
            text: text.into(),
            geometry,
            offset,
            transform: Transform::new().with_translation(offset),
        }
    }

    /// Place the label at its offset from `anchor`.
    pub fn track(&mut self, anchor: Vec3) {
        self.transform.translation = anchor + self.offset;
    }
}
