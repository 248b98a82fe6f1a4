//! Session events drained by the host each frame.
//!
//! Sessions never reach outward: navigation and overlay intents queue
//! here, and the router on the host side decides what actually happens.

use std::collections::VecDeque;

use gloam_logic::content::{PanelKey, RoomKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Walk into the named room (door proximity, stair summit, or a
    /// double activation).
    EnterRoom(RoomKey),
    /// Leave toward the parent room.
    ExitRoom,
    /// Present an overlay panel.
    OpenPanel(PanelKey),
}

#[derive(Debug, Default)]
pub struct EventQueue {
    queue: VecDeque<SessionEvent>,
}

impl EventQueue {
    pub fn emit(&mut self, event: SessionEvent) {
        self.queue.push_back(event);
    }

    pub fn drain(&mut self) -> Vec<SessionEvent> {
        self.queue.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut q = EventQueue::default();
        q.emit(SessionEvent::OpenPanel(PanelKey::Resident));
        q.emit(SessionEvent::EnterRoom(RoomKey::Archive));
        assert_eq!(
            q.drain(),
            vec![
                SessionEvent::OpenPanel(PanelKey::Resident),
                SessionEvent::EnterRoom(RoomKey::Archive)
            ]
        );
        assert!(q.is_empty());
    }
}
