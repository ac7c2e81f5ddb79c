//! Active-tab ownership.
//!
//! The store is the single source of truth for "what is active", behind one
//! read API regardless of whether the widget or the host owns the value.
//! The mode is fixed at construction and never changes.

use log::warn;

use crate::item::TabId;

/// Who owns the active-tab value.
#[derive(Debug, Clone)]
enum Ownership {
    /// The store owns the value and mutates it on activation.
    Owned { active: Option<TabId> },
    /// The host owns the value; the store mirrors the last supplied one.
    External { active: Option<TabId> },
}

/// Outcome of an activation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivateOutcome {
    /// The store mutated its own value (uncontrolled mode).
    Applied,
    /// The store left its value untouched; the host decides (controlled mode).
    Deferred,
}

/// Selection state with fixed ownership.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    ownership: Ownership,
}

impl SelectionStore {
    /// Create a store that owns its value (uncontrolled mode).
    pub fn owned(initial: Option<TabId>) -> Self {
        Self {
            ownership: Ownership::Owned { active: initial },
        }
    }

    /// Create a store mirroring a host-owned value (controlled mode).
    pub fn external(active: Option<TabId>) -> Self {
        Self {
            ownership: Ownership::External { active },
        }
    }

    /// Currently active id, if any.
    pub fn read(&self) -> Option<&TabId> {
        match &self.ownership {
            Ownership::Owned { active } | Ownership::External { active } => active.as_ref(),
        }
    }

    /// Check if the host owns the value.
    pub fn is_external(&self) -> bool {
        matches!(self.ownership, Ownership::External { .. })
    }

    /// Request that `id` become active.
    ///
    /// Mutates only in owned mode. In external mode the caller is expected
    /// to notify the host, which may re-supply the value via [`sync`].
    ///
    /// [`sync`]: SelectionStore::sync
    pub fn request_activate(&mut self, id: TabId) -> ActivateOutcome {
        match &mut self.ownership {
            Ownership::Owned { active } => {
                *active = Some(id);
                ActivateOutcome::Applied
            }
            Ownership::External { .. } => ActivateOutcome::Deferred,
        }
    }

    /// Re-supply the host-owned value. Returns true if the value was taken.
    ///
    /// Calling this on an owned store is a caller contract violation; the
    /// stored value is left untouched.
    pub fn sync(&mut self, active: Option<TabId>) -> bool {
        match &mut self.ownership {
            Ownership::External { active: current } => {
                *current = active;
                true
            }
            Ownership::Owned { .. } => {
                warn!("SelectionStore::sync called on an owned store; ignoring");
                false
            }
        }
    }
}
