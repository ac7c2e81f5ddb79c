//! Tabs widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::debug;

use crate::events::{ChangeEvent, EventResult};
use crate::item::{TabId, TabItem};
use crate::keys::Orientation;
use crate::selection::SelectionStore;

/// Unique identifier for a Tabs widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabsId(usize);

impl TabsId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TabsId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__tabs_{}", self.0)
    }
}

/// Derived per-tab presentation flags the host renders but does not compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabItemState {
    /// Tab is the displayed active tab
    pub selected: bool,
    /// Tab is the single keyboard-reachable entry point (roving tabindex)
    pub tab_reachable: bool,
    /// 1-based position in the set
    pub position: usize,
    /// Total number of tabs in the set
    pub set_size: usize,
}

/// Internal state for a Tabs widget.
#[derive(Debug)]
struct TabsInner {
    /// Active-tab ownership (controlled or uncontrolled)
    selection: SelectionStore,
    /// Layout axis, selects the arrow keys that navigate
    orientation: Orientation,
    /// Whether re-activating the already-active tab queues a change event
    notify_on_reselect: bool,
    /// Tab that should receive focus once it is reachable
    focus_intent: Option<TabId>,
    /// Queued change notifications, drained by the host
    events: Vec<ChangeEvent>,
}

/// A tab strip controller with reactive state.
///
/// `Tabs` tracks which tab in a host-supplied ordered list is active and
/// maps navigation keys to a new active tab, skipping disabled tabs and
/// wrapping around list boundaries. The item list itself is a snapshot
/// passed to each call; the widget only owns the selection.
///
/// Two ownership modes, fixed at construction: uncontrolled
/// ([`Tabs::new`], [`Tabs::with_initial`]) where the widget applies
/// activations itself, and controlled ([`Tabs::controlled`]) where the
/// widget only queues change events and the host re-supplies the active id
/// via [`Tabs::sync_active`].
///
/// # Example
///
/// ```ignore
/// let items = vec![
///     TabItem::new("files", "Files"),
///     TabItem::new("search", "Search").with_disabled(true),
///     TabItem::new("log", "Log"),
/// ];
/// let tabs = Tabs::new(&items);
///
/// tabs.handle_key(&KeyCombo::key(Key::Right), &items);
/// assert_eq!(tabs.active_index(&items), Some(2)); // "search" skipped
/// for change in tabs.take_events() {
///     println!("now showing {}", change.id);
/// }
/// ```
#[derive(Debug)]
pub struct Tabs {
    /// Unique identifier for this tabs instance
    id: TabsId,
    /// Internal state
    inner: Arc<RwLock<TabsInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl Tabs {
    fn build(selection: SelectionStore) -> Self {
        Self {
            id: TabsId::new(),
            inner: Arc::new(RwLock::new(TabsInner {
                selection,
                orientation: Orientation::default(),
                notify_on_reselect: true,
                focus_intent: None,
                events: Vec::new(),
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create an uncontrolled tab strip; the first item starts active.
    pub fn new(items: &[TabItem]) -> Self {
        Self::build(SelectionStore::owned(
            items.first().map(|item| item.id.clone()),
        ))
    }

    /// Create an uncontrolled tab strip starting at the given id.
    ///
    /// An id matching no item is kept as-is; display falls back to the
    /// first tab without rewriting the stored value.
    pub fn with_initial(initial: impl Into<TabId>) -> Self {
        Self::build(SelectionStore::owned(Some(initial.into())))
    }

    /// Create a controlled tab strip mirroring a host-owned active id.
    pub fn controlled(active: impl Into<TabId>) -> Self {
        Self::build(SelectionStore::external(Some(active.into())))
    }

    /// Set the layout axis.
    pub fn with_orientation(self, orientation: Orientation) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.orientation = orientation;
        }
        self
    }

    /// Set whether re-activating the active tab queues a change event.
    ///
    /// Defaults to true ("refresh current tab" semantics); when false,
    /// re-activation is a complete no-op.
    pub fn with_notify_on_reselect(self, notify: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.notify_on_reselect = notify;
        }
        self
    }

    /// Get the unique ID for this tab strip.
    pub fn id(&self) -> TabsId {
        self.id
    }

    /// Get the ID as a string (for host-side bookkeeping).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Selection state
    // -------------------------------------------------------------------------

    /// Get the stored active id, if any.
    pub fn active_id(&self) -> Option<TabId> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.selection.read().cloned())
    }

    /// Index of the displayed active tab.
    ///
    /// A stored id matching no item falls back to index 0; an empty list
    /// has no selection. The stored value is never rewritten by display
    /// fallback.
    pub fn active_index(&self, items: &[TabItem]) -> Option<usize> {
        if items.is_empty() {
            return None;
        }
        let matched = self.inner.read().ok().and_then(|guard| {
            guard
                .selection
                .read()
                .and_then(|active| items.iter().position(|item| &item.id == active))
        });
        Some(matched.unwrap_or(0))
    }

    /// Check if the host owns the active id.
    pub fn is_controlled(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.selection.is_external())
            .unwrap_or(false)
    }

    /// Re-supply the host-owned active id (controlled mode only).
    pub fn sync_active(&self, active: Option<TabId>) {
        if let Ok(mut guard) = self.inner.write()
            && guard.selection.sync(active)
        {
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get the layout axis.
    pub fn orientation(&self) -> Orientation {
        self.inner
            .read()
            .map(|guard| guard.orientation)
            .unwrap_or_default()
    }

    /// Change the layout axis.
    pub fn set_orientation(&self, orientation: Orientation) {
        if let Ok(mut guard) = self.inner.write() {
            guard.orientation = orientation;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Derived per-item state
    // -------------------------------------------------------------------------

    /// Per-tab presentation flags for the current item snapshot.
    ///
    /// Exactly one tab of a non-empty list is `tab_reachable`, keeping a
    /// single focusable entry point into the strip.
    pub fn tab_states(&self, items: &[TabItem]) -> Vec<TabItemState> {
        let active = self.active_index(items);
        items
            .iter()
            .enumerate()
            .map(|(idx, _)| TabItemState {
                selected: active == Some(idx),
                tab_reachable: active == Some(idx),
                position: idx + 1,
                set_size: items.len(),
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Notifications and focus intent
    // -------------------------------------------------------------------------

    /// Drain queued change notifications.
    pub fn take_events(&self) -> Vec<ChangeEvent> {
        self.inner
            .write()
            .map(|mut guard| std::mem::take(&mut guard.events))
            .unwrap_or_default()
    }

    /// Take the pending focus intent, if any.
    ///
    /// The intent names the tab that should receive focus once the host has
    /// rendered it as reachable. A newer intent supersedes an undrained
    /// older one.
    pub fn take_focus_intent(&self) -> Option<TabId> {
        self.inner
            .write()
            .ok()
            .and_then(|mut guard| guard.focus_intent.take())
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the tab strip state has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Internal activation (called by event handling)
    // -------------------------------------------------------------------------

    /// Apply an activation of a validated, enabled item.
    ///
    /// Queues exactly one change event per successful activation; the store
    /// mutates only in owned mode. With `focus` set, records a focus intent
    /// for the item.
    pub(crate) fn apply_activation(&self, item: &TabItem, focus: bool) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };

        let reselect = guard.selection.read() == Some(&item.id);
        if reselect && !guard.notify_on_reselect {
            return EventResult::Consumed;
        }

        let outcome = guard.selection.request_activate(item.id.clone());
        guard.events.push(ChangeEvent::new(item.id.clone()));
        if focus {
            guard.focus_intent = Some(item.id.clone());
        }
        drop(guard);

        self.dirty.store(true, Ordering::SeqCst);
        debug!("Tabs[{}] activated {} ({:?})", self.id, item.id, outcome);
        EventResult::Consumed
    }
}

impl Clone for Tabs {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for Tabs {
    fn default() -> Self {
        Self::new(&[])
    }
}
