pub mod orbit_controls;
pub mod queue;

pub use orbit_controls::OrbitControls;
pub use queue::{InputEvent, InputQueue};
