pub mod label;
pub mod light;
pub mod mesh;
pub mod transform;
