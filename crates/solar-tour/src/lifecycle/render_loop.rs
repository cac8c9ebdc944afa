//! Visibility-gated frame scheduling.
//!
//! ```text
//!   Idle ──start(visible)──▶ Running ◀──visible──┐
//!    │                         │                 │
//!    └──start(hidden)──▶ Suspended ◀──hidden─────┘
//!   Running/Suspended ──stop──▶ Idle (terminal)
//! ```
//!
//! At most one frame request is outstanding. Going hidden does not cancel
//! it; when it fires the loop is Suspended, so it draws nothing and
//! requests nothing. Going visible again ticks immediately unless that
//! request is still outstanding, in which case it drives the next tick.

use crate::api::host::Host;
use crate::api::types::FrameRequestId;
use crate::core::time::FrameClock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderLoopState {
    Idle,
    Running,
    Suspended,
}

/// What the caller should do with a fired frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameAction {
    /// Run one tick.
    Tick,
    /// Our request, but the loop is suspended: do nothing.
    Drain,
    /// Not our outstanding request (stale or after stop).
    Ignore,
}

#[derive(Debug, Clone)]
pub struct RenderLoop {
    state: RenderLoopState,
    pending: Option<FrameRequestId>,
    clock: FrameClock,
    stopped: bool,
    ticks: u64,
    suspensions: u32,
}

impl RenderLoop {
    pub fn new(max_frame_dt: f32) -> Self {
        Self {
            state: RenderLoopState::Idle,
            pending: None,
            clock: FrameClock::new(max_frame_dt),
            stopped: false,
            ticks: 0,
            suspensions: 0,
        }
    }

    pub fn state(&self) -> RenderLoopState {
        self.state
    }

    pub fn pending(&self) -> Option<FrameRequestId> {
        self.pending
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// How many times the loop has entered Suspended.
    pub fn suspensions(&self) -> u32 {
        self.suspensions
    }

    /// Leave Idle. Returns `true` if the caller should tick right away.
    pub fn start(&mut self, visible: bool) -> bool {
        if self.stopped || self.state != RenderLoopState::Idle {
            return false;
        }
        if visible {
            self.state = RenderLoopState::Running;
            log::info!("render loop: idle -> running");
            true
        } else {
            self.state = RenderLoopState::Suspended;
            self.suspensions += 1;
            log::info!("render loop: idle -> suspended (page hidden)");
            false
        }
    }

    /// Classify a fired frame request.
    pub fn on_frame(&mut self, id: FrameRequestId) -> FrameAction {
        if self.pending != Some(id) {
            return FrameAction::Ignore;
        }
        self.pending = None;
        match self.state {
            RenderLoopState::Running => FrameAction::Tick,
            RenderLoopState::Suspended => {
                log::debug!("render loop: in-flight frame drained while suspended");
                FrameAction::Drain
            }
            RenderLoopState::Idle => FrameAction::Ignore,
        }
    }

    /// Start a tick. Returns the clamped frame delta in seconds.
    pub fn begin_tick(&mut self, now_ms: f64) -> f32 {
        self.ticks += 1;
        self.clock.advance(now_ms)
    }

    /// Schedule the next tick if still running (tick step f).
    ///
    /// If the host refuses, nothing is pending and the loop stalls until the
    /// next hidden/visible cycle ticks it again.
    pub fn finish_tick(&mut self, host: &mut dyn Host) {
        if self.state == RenderLoopState::Running && self.pending.is_none() {
            self.pending = host.request_frame();
            if self.pending.is_none() {
                log::warn!("render loop: host refused a frame request");
            }
        }
    }

    /// Page went hidden.
    pub fn on_hidden(&mut self) {
        if self.state == RenderLoopState::Running {
            self.state = RenderLoopState::Suspended;
            self.suspensions += 1;
            log::info!("render loop: running -> suspended");
        }
    }

    /// Page became visible. Returns `true` if the caller should tick now.
    pub fn on_visible(&mut self) -> bool {
        if self.state != RenderLoopState::Suspended {
            return false;
        }
        self.state = RenderLoopState::Running;
        // no catch-up for the time spent hidden
        self.clock.reset();
        log::info!("render loop: suspended -> running");
        self.pending.is_none()
    }

    /// Terminal stop: cancel the outstanding request, if any.
    pub fn stop(&mut self, host: &mut dyn Host) {
        if let Some(id) = self.pending.take() {
            host.cancel_frame(id);
        }
        if self.state != RenderLoopState::Idle {
            log::info!("render loop: {:?} -> idle", self.state);
        }
        self.state = RenderLoopState::Idle;
        self.stopped = true;
    }
}
