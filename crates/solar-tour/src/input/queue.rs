/// Pointer input the orbit camera understands.
/// Coordinates are logical (CSS) pixels relative to the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began at (x, y).
    PointerDown { x: f32, y: f32 },
    /// A touch/click ended at (x, y).
    PointerUp { x: f32, y: f32 },
    /// A touch/cursor moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// Wheel scrolled; negative `delta_y` scrolls up (zoom in).
    Wheel { delta_y: f32 },
}

/// Pointer events waiting for the next tick.
/// The stage pushes as the page reports them; the tick drains them into
/// the orbit controls before the camera update.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Queue an event for the next tick.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Take every queued event, oldest first.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::Wheel { delta_y: -100.0 });
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.drain().is_empty());
    }

    #[test]
    fn drain_preserves_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        q.push(InputEvent::PointerMove { x: 5.0, y: 0.0 });
        q.push(InputEvent::PointerUp { x: 5.0, y: 0.0 });
        let events = q.drain();
        assert_eq!(events[1], InputEvent::PointerMove { x: 5.0, y: 0.0 });
        assert!(matches!(events[2], InputEvent::PointerUp { .. }));
    }
}
