pub mod glb;
pub mod loader;
pub mod typeface;
