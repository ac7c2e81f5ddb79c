//! Event handling for the Tabs widget.

use log::debug;

use crate::events::{EventResult, NavOutcome};
use crate::item::TabItem;
use crate::keys::{KeyCombo, NavAction};
use crate::nav::{self, Direction};

use super::Tabs;
use super::render;

impl Tabs {
    /// Handle a key press against the current item snapshot.
    ///
    /// Unrecognized keys (including off-axis arrows and anything with
    /// ctrl/alt held) are not consumed, so the host can process them.
    pub fn handle_key(&self, key: &KeyCombo, items: &[TabItem]) -> EventResult {
        if items.is_empty() {
            return EventResult::Ignored;
        }

        let Some(action) = NavAction::from_key(key, self.orientation()) else {
            return EventResult::Ignored;
        };

        self.handle_action(action, items);
        EventResult::Consumed
    }

    /// Apply a symbolic navigation action.
    ///
    /// Arrow moves skip disabled tabs and wrap around list boundaries; when
    /// no enabled tab exists the active tab stays put. Moves record a focus
    /// intent for the target; re-activation does not.
    pub fn handle_action(&self, action: NavAction, items: &[TabItem]) -> NavOutcome {
        let Some(current) = self.active_index(items) else {
            return NavOutcome {
                target: None,
                focus_moved: false,
            };
        };

        let disabled: Vec<bool> = items.iter().map(|item| item.disabled).collect();
        let (target, wants_focus) = match action {
            NavAction::NextTab => (nav::next_enabled(current, Direction::Forward, &disabled), true),
            NavAction::PrevTab => (
                nav::next_enabled(current, Direction::Backward, &disabled),
                true,
            ),
            NavAction::FirstTab => (nav::first_enabled(&disabled).unwrap_or(current), true),
            NavAction::LastTab => (nav::last_enabled(&disabled).unwrap_or(current), true),
            NavAction::ActivateCurrent => (current, false),
        };

        let result = match items.get(target) {
            Some(item) if !item.disabled => self.apply_activation(item, wants_focus),
            _ => EventResult::Ignored,
        };

        NavOutcome {
            target: Some(target),
            focus_moved: wants_focus && result.is_handled(),
        }
    }

    /// Activate the tab at `index` (pointer-style activation).
    ///
    /// Out-of-range indices and disabled tabs are silent no-ops: no state
    /// change, no notification.
    pub fn activate(&self, index: usize, items: &[TabItem]) -> EventResult {
        match items.get(index) {
            Some(item) if !item.disabled => self.apply_activation(item, false),
            Some(item) => {
                debug!("Tabs[{}] ignoring disabled tab {}", self.id(), item.id);
                EventResult::Ignored
            }
            None => EventResult::Ignored,
        }
    }

    /// Activate the tab under a widget-relative click position.
    pub fn click(&self, x: u16, y: u16, items: &[TabItem]) -> EventResult {
        match render::hit_test(items, self.orientation(), x, y) {
            Some(index) => self.activate(index, items),
            None => EventResult::Ignored,
        }
    }
}
