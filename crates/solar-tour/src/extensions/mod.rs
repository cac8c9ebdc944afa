// extensions/mod.rs
//
// Animation helpers layered on top of the scene graph.
// The graph itself knows nothing about tweens; the render loop drives them.

pub mod easing;
pub mod tween;

pub use easing::{ease, lerp, Easing};
pub use tween::{Tween, TweenState};
