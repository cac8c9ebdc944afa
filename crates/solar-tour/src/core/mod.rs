pub mod scene;
pub mod time;

pub use scene::{MoonNode, SceneHandle, SceneNode};
pub use time::FrameClock;
