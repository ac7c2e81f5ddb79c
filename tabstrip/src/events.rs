//! Event handling types for the tab strip.
//!
//! The widget queues a [`ChangeEvent`] on every successful activation; the
//! host drains the queue after each input event via `Tabs::take_events`.

use crate::item::TabId;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Notification that a tab was activated.
///
/// In uncontrolled mode the widget has already applied the change when this
/// is queued. In controlled mode this is the request channel: the host
/// decides whether to re-supply the id via `Tabs::sync_active`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Id of the newly active tab.
    pub id: TabId,
}

impl ChangeEvent {
    /// Create a new change event.
    pub fn new(id: TabId) -> Self {
        Self { id }
    }
}

/// Outcome of a navigation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavOutcome {
    /// Index now displayed as active (`None` for an empty list).
    pub target: Option<usize>,
    /// True when keyboard focus should follow the target tab.
    pub focus_moved: bool,
}
