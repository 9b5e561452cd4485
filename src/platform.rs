//! Window/event source abstraction
//!
//! The real window (creation, close handling, cursor tracking) lives
//! outside this crate; the core only consumes a stream of discrete input
//! events per frame.

use std::collections::VecDeque;

use glam::Vec2;

/// Discrete input events produced by the window layer each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    /// The window was asked to close.
    Closed,
    /// Cursor moved; position in window coordinates.
    MouseMoved(Vec2),
    /// Primary mouse button pressed at the given position.
    MousePressed(Vec2),
}

/// Polls pending events, one per call, until drained for the frame.
pub trait EventSource {
    fn poll_event(&mut self) -> Option<WindowEvent>;
}

/// FIFO event queue. Backs the headless driver and tests; a real window
/// layer implements [`EventSource`] over its own native queue.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    queue: VecDeque<WindowEvent>,
}

impl ScriptedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, evnt: WindowEvent) {
        self.queue.push_back(evnt);
    }
}

impl EventSource for ScriptedEvents {
    fn poll_event(&mut self) -> Option<WindowEvent> {
        self.queue.pop_front()
    }
}
