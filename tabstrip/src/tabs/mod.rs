//! Tabs widget - a tab strip with roving focus and disabled-aware navigation.

pub mod events;
pub mod render;
mod state;

pub use state::{TabItemState, Tabs, TabsId};
