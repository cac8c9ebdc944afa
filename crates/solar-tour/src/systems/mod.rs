pub mod builder;
pub mod motion;
pub mod render;
