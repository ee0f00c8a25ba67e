use std::collections::VecDeque;

use crate::event::Event;

/// A simple FIFO event queue.
///
/// The app loop uses the bus in a three-phase cycle:
/// 1. **Publish** — input polling, timers and the export worker push events.
/// 2. **Drain** — all pending events are pulled out in order.
/// 3. **Apply** — each event is applied to the app state in sequence.
pub struct EventBus {
    queue: VecDeque<Event>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Enqueue an event at the back of the queue.
    pub fn publish(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Remove and return all pending events, preserving insertion order.
    pub fn drain(&mut self) -> Vec<Event> {
        self.queue.drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Toggle;

    #[test]
    fn publish_then_drain_preserves_order() {
        let mut bus = EventBus::new();
        bus.publish(Event::PresetSelected { id: "amber-ink".into() });
        bus.publish(Event::VisibilityToggled { flag: Toggle::Phone, visible: true });
        bus.publish(Event::Quit);

        let events = bus.drain();
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], Event::PresetSelected { id } if id == "amber-ink"));
        assert!(matches!(
            &events[1],
            Event::VisibilityToggled { flag: Toggle::Phone, visible: true }
        ));
        assert!(matches!(&events[2], Event::Quit));
        assert!(!bus.has_pending());
    }

    #[test]
    fn drain_on_empty_returns_empty() {
        let mut bus = EventBus::new();
        assert!(bus.drain().is_empty());
        assert!(!bus.has_pending());
    }

    #[test]
    fn has_pending_tracks_queue() {
        let mut bus = EventBus::new();
        assert!(!bus.has_pending());
        bus.publish(Event::FieldsReset);
        assert!(bus.has_pending());
        bus.drain();
        assert!(!bus.has_pending());
    }
}
