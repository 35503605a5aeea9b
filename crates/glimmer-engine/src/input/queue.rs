/// Input event types the engine understands.
/// Generic — no DOM types leak below the bridge.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// The pointer moved to canvas coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// The pointer left the canvas.
    PointerLeave,
    /// The viewport (and therefore the canvas) was resized.
    Resize { width: f32, height: f32 },
}

/// A queue of input events.
/// DOM handlers write events into the queue; the frame runner drains them
/// at the start of every frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from the event closures).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
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
        q.push(InputEvent::PointerMove { x: 10.0, y: 20.0 });
        q.push(InputEvent::PointerLeave);
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn resize_event_carries_dimensions() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Resize {
            width: 1280.0,
            height: 720.0,
        });
        match q.drain()[0] {
            InputEvent::Resize { width, height } => {
                assert_eq!(width, 1280.0);
                assert_eq!(height, 720.0);
            }
            _ => panic!("Expected Resize event"),
        }
    }
}
