//! The host environment a mounted scene runs inside.
//!
//! In the browser this is the window/document pair (see `solar-tour-web`);
//! in tests it is a recording fake. The core never calls the host from
//! anywhere except the lifecycle and render-loop modules.

use super::types::{FrameRequestId, ListenerId};

/// Page visibility as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Host signals a mounted scene subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Window resize.
    Resize,
    /// Page visibility change.
    Visibility,
}

/// Window dimensions in logical (CSS) pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

impl WindowSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height, guarded against a zero-height window.
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Scheduling and event-registration services of the host.
///
/// Frame requests are one-shot: after the host fires a frame it forgets the
/// id. Cancelling an id that already fired or was never issued is a no-op.
pub trait Host {
    /// Current window size.
    fn window_size(&self) -> WindowSize;

    /// Current page visibility.
    fn visibility(&self) -> Visibility;

    /// Monotonic clock in milliseconds, same timebase as frame timestamps.
    fn now_ms(&self) -> f64;

    /// Ask for one frame callback. The host later calls
    /// `Stage::on_frame(id, timestamp_ms, ..)`. `None` means the host could
    /// not schedule one and will never fire it.
    fn request_frame(&mut self) -> Option<FrameRequestId>;

    /// Cancel a frame request that has not fired yet.
    fn cancel_frame(&mut self, id: FrameRequestId);

    /// Subscribe to a host signal.
    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId;

    /// Unsubscribe a previously added listener.
    fn remove_listener(&mut self, id: ListenerId);
}
