pub mod mount;
pub mod render_loop;
pub mod stage;
pub mod viewport;

pub use mount::{Listeners, MountedScene};
pub use render_loop::{FrameAction, RenderLoop, RenderLoopState};
pub use stage::Stage;
pub use viewport::{ResizeOutcome, ViewportBinder, ViewportState};
