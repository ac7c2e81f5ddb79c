//! A tab strip widget: roving focus, disabled-aware keyboard navigation,
//! and controlled/uncontrolled selection ownership.

pub mod events;
pub mod item;
pub mod keys;
pub mod nav;
pub mod selection;
pub mod tabs;

pub mod prelude {
    pub use crate::events::{ChangeEvent, EventResult, NavOutcome};
    pub use crate::item::{Badge, BadgeVariant, TabId, TabItem};
    pub use crate::keys::{Key, KeyCombo, Modifiers, NavAction, Orientation};
    pub use crate::selection::{ActivateOutcome, SelectionStore};
    pub use crate::tabs::{TabItemState, Tabs, TabsId};
}
