//! Tab descriptors.
//!
//! Tabs are plain data supplied by the host on every call; the widget never
//! creates or destroys them. Position is the slice index, fixed by
//! declaration order.

use serde::{Deserialize, Serialize};

/// Opaque identifier for a tab.
///
/// Ids are compared verbatim. Integer ids from configuration are stored in
/// their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    /// Create a new tab id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TabId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TabId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<i64> for TabId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

/// Badge accent variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    /// Inherits the tab's own style
    #[default]
    Default,
    /// Attention-colored
    Warning,
    /// Confirmation-colored
    Success,
}

/// A small counter or status marker shown after a tab label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Accent variant
    #[serde(default)]
    pub variant: BadgeVariant,
    /// Text content; a badge with empty content renders nothing
    pub content: String,
}

impl Badge {
    /// Create a badge with the default variant.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            variant: BadgeVariant::default(),
            content: content.into(),
        }
    }

    /// Set the accent variant.
    pub fn with_variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Check if the badge has no content to show.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// A single tab descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabItem {
    /// Unique identifier
    pub id: TabId,
    /// Display label
    pub label: String,
    /// Optional badge shown after the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    /// Disabled tabs are skipped by navigation and cannot be activated
    #[serde(default)]
    pub disabled: bool,
}

impl TabItem {
    /// Create an enabled tab with no badge.
    pub fn new(id: impl Into<TabId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            badge: None,
            disabled: false,
        }
    }

    /// Attach a badge.
    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Set the disabled flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}
