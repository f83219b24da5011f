//! Event types
//!
//! Input and lifecycle signals delivered by the page shell to widgets.
//! Targets are element keys (a section id, a panel key, or [`PAGE_TARGET`]).

/// Event type identifier
pub type EventType = u32;

/// Target key for events addressed to the page itself
pub const PAGE_TARGET: &str = "page";

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const CLICK: EventType = 3;
    /// Mouse wheel / trackpad scroll
    pub const WHEEL: EventType = 29;
    pub const SCROLL: EventType = 30;
    /// Finger drag on a touch surface
    pub const TOUCH_MOVE: EventType = 33;
    pub const RESIZE: EventType = 40;

    // Element lifecycle events
    pub const MOUNT: EventType = 60;
    pub const UNMOUNT: EventType = 61;
}

/// A UI event with associated data
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub event_type: EventType,
    pub target: String,
    pub data: EventData,
    /// Milliseconds since page load
    pub timestamp: u64,
    pub propagation_stopped: bool,
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    Scroll {
        delta_x: f32,
        delta_y: f32,
    },
    Touch {
        x: f32,
        y: f32,
    },
    /// Activation of a hyperlink
    Click {
        href: String,
    },
    Resize {
        width: u32,
        height: u32,
    },
    None,
}

impl Event {
    pub fn new(event_type: EventType, target: impl Into<String>, data: EventData) -> Self {
        Self {
            event_type,
            target: target.into(),
            data,
            timestamp: 0,
            propagation_stopped: false,
        }
    }

    pub fn scroll(target: impl Into<String>, delta_y: f32) -> Self {
        Self::new(
            event_types::SCROLL,
            target,
            EventData::Scroll {
                delta_x: 0.0,
                delta_y,
            },
        )
    }

    pub fn touch_move(target: impl Into<String>, x: f32, y: f32) -> Self {
        Self::new(event_types::TOUCH_MOVE, target, EventData::Touch { x, y })
    }

    pub fn click(target: impl Into<String>, href: impl Into<String>) -> Self {
        Self::new(
            event_types::CLICK,
            target,
            EventData::Click { href: href.into() },
        )
    }

    pub fn unmount(target: impl Into<String>) -> Self {
        Self::new(event_types::UNMOUNT, target, EventData::None)
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// True for scroll-like input that originates from the user
    pub fn is_user_scroll(&self) -> bool {
        matches!(
            self.event_type,
            event_types::SCROLL | event_types::WHEEL | event_types::TOUCH_MOVE
        )
    }

    /// Vertical scroll distance carried by the event, if any
    pub fn scroll_delta_y(&self) -> Option<f32> {
        match self.data {
            EventData::Scroll { delta_y, .. } => Some(delta_y),
            _ => None,
        }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_scroll_classification() {
        assert!(Event::scroll("languages", 12.0).is_user_scroll());
        assert!(Event::touch_move("languages", 1.0, 2.0).is_user_scroll());
        assert!(Event::new(event_types::WHEEL, "tools", EventData::None).is_user_scroll());
        assert!(!Event::click(PAGE_TARGET, "#about").is_user_scroll());
        assert!(!Event::unmount("tools").is_user_scroll());
    }

    #[test]
    fn test_scroll_delta() {
        assert_eq!(Event::scroll("a", -4.0).scroll_delta_y(), Some(-4.0));
        assert_eq!(Event::touch_move("a", 0.0, 0.0).scroll_delta_y(), None);
    }
}
