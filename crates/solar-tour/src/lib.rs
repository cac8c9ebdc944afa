pub mod api;
pub mod assets;
pub mod bodies;
pub mod components;
pub mod config;
pub mod core;
pub mod error;
pub mod extensions;
pub mod input;
pub mod lifecycle;
pub mod renderer;
pub mod route;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::host::{Host, ListenerKind, Visibility, WindowSize};
pub use api::types::{FrameRequestId, ListenerId, ModelHandle, MountId, TextureHandle};
pub use assets::glb::GlbInfo;
pub use assets::loader::{
    AssetKey, AssetOutcome, AssetPayload, AssetRequest, AssetSource, AssetTicket, Model, Texture,
};
pub use assets::typeface::{TextGeometry, Typeface};
pub use bodies::{BodyConfig, BodyFacts, BodyId};
pub use components::label::LabelMesh;
pub use components::light::Light;
pub use components::mesh::{Color, Material, Mesh, MeshShape};
pub use components::transform::Transform;
pub use config::TourConfig;
pub use core::scene::{SceneHandle, SceneNode};
pub use error::{AssetError, ConfigError, GlbError, TypefaceError};
pub use input::{InputEvent, InputQueue, OrbitControls};
pub use lifecycle::{MountedScene, RenderLoopState, Stage, ViewportState};
pub use renderer::{
    CameraUniform, DrawTiming, FrameData, LabelDraw, MeshInstance, PerspectiveCamera, Renderer,
};
pub use route::Route;

// Entrance animation
pub use extensions::{ease, lerp, Easing, Tween, TweenState};
