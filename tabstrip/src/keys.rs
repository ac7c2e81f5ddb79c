//! Key model and navigation actions.
//!
//! Physical keys arrive as a [`KeyCombo`] (decoded from crossterm with
//! [`convert_key_event`] or parsed from a "ctrl+right"-style spec with
//! [`parse_key`]). [`NavAction`] is the symbolic layer the controller
//! consumes; the mapping depends on the strip's [`Orientation`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Modifier keys state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Control key held
    pub ctrl: bool,
    /// Shift key held
    pub shift: bool,
    /// Alt key held
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };

    /// Check if any modifier is active
    pub fn any(&self) -> bool {
        self.ctrl || self.shift || self.alt
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Character key
    Char(char),
    /// Function keys F1-F12
    F(u8),
    /// Enter/Return
    Enter,
    /// Escape
    Escape,
    /// Backspace
    Backspace,
    /// Tab
    Tab,
    /// Space
    Space,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Arrow right
    Right,
    /// Home
    Home,
    /// End
    End,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Insert
    Insert,
    /// Delete
    Delete,
}

/// A key combination (key + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// The key code
    pub key: Key,
    /// Modifier keys
    pub modifiers: Modifiers,
}

impl KeyCombo {
    /// Create a new key combo
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combo without modifiers
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Add ctrl modifier
    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Add shift modifier
    pub const fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    /// Add alt modifier
    pub const fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }
}

/// Layout axis of the tab strip.
///
/// Selects which arrow keys drive next/previous: right/left when horizontal,
/// down/up when vertical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Tabs laid out in a row
    #[default]
    Horizontal,
    /// Tabs laid out in a column
    Vertical,
}

/// Symbolic navigation actions over the tab strip.
///
/// These represent user intent, not specific keys; the mapping from a
/// [`KeyCombo`] is orientation-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    /// Move to the next enabled tab, wrapping past the end. Default: →/↓
    NextTab,
    /// Move to the previous enabled tab, wrapping past the start. Default: ←/↑
    PrevTab,
    /// Jump to the first enabled tab. Default: Home
    FirstTab,
    /// Jump to the last enabled tab. Default: End
    LastTab,
    /// Re-activate the tab that currently has focus. Default: Enter/Space
    ActivateCurrent,
}

impl NavAction {
    /// Map a key combo to a navigation action, if any.
    ///
    /// Keys with ctrl/alt modifiers never map; off-axis arrows map to
    /// nothing so the host can reuse them.
    pub fn from_key(key: &KeyCombo, orientation: Orientation) -> Option<Self> {
        if key.modifiers.ctrl || key.modifiers.alt {
            return None;
        }

        let horizontal = orientation == Orientation::Horizontal;
        match key.key {
            Key::Right if horizontal => Some(Self::NextTab),
            Key::Left if horizontal => Some(Self::PrevTab),
            Key::Down if !horizontal => Some(Self::NextTab),
            Key::Up if !horizontal => Some(Self::PrevTab),
            Key::Home => Some(Self::FirstTab),
            Key::End => Some(Self::LastTab),
            Key::Enter | Key::Space => Some(Self::ActivateCurrent),
            _ => None,
        }
    }
}

/// Error parsing a key spec string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKeyError {
    /// The spec was empty or contained no key
    #[error("empty key spec")]
    Empty,
    /// A modifier segment was not ctrl/shift/alt
    #[error("unknown modifier '{0}'")]
    UnknownModifier(String),
    /// The key segment was not a recognized key name
    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

/// Parse a "ctrl+right"-style key spec.
///
/// Segments are separated by `+`; all but the last must be `ctrl`, `shift`
/// or `alt`. The last segment is a key name (`enter`, `escape`, `space`,
/// `tab`, `backspace`, arrows, `home`, `end`, `pageup`, `pagedown`,
/// `insert`, `delete`, `f1`-`f12`) or a single character.
pub fn parse_key(spec: &str) -> Result<KeyCombo, ParseKeyError> {
    let segments: Vec<&str> = spec
        .split('+')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();

    let Some((name, modifier_names)) = segments.split_last() else {
        return Err(ParseKeyError::Empty);
    };

    let mut modifiers = Modifiers::NONE;
    for modifier in modifier_names {
        match modifier.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers.ctrl = true,
            "shift" => modifiers.shift = true,
            "alt" => modifiers.alt = true,
            other => return Err(ParseKeyError::UnknownModifier(other.to_string())),
        }
    }

    Ok(KeyCombo::new(parse_key_name(name)?, modifiers))
}

fn parse_key_name(name: &str) -> Result<Key, ParseKeyError> {
    let lower = name.to_ascii_lowercase();
    let key = match lower.as_str() {
        "enter" | "return" => Key::Enter,
        "escape" | "esc" => Key::Escape,
        "backspace" => Key::Backspace,
        "tab" => Key::Tab,
        "space" => Key::Space,
        "up" => Key::Up,
        "down" => Key::Down,
        "left" => Key::Left,
        "right" => Key::Right,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" => Key::PageUp,
        "pagedown" => Key::PageDown,
        "insert" => Key::Insert,
        "delete" => Key::Delete,
        _ => {
            if let Some(n) = lower.strip_prefix('f')
                && let Ok(n) = n.parse::<u8>()
                && (1..=12).contains(&n)
            {
                return Ok(Key::F(n));
            }
            let mut chars = name.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                return Ok(Key::Char(c));
            }
            return Err(ParseKeyError::UnknownKey(name.to_string()));
        }
    };
    Ok(key)
}

/// Convert crossterm KeyModifiers to tabstrip Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        shift: mods.contains(KeyModifiers::SHIFT),
        alt: mods.contains(KeyModifiers::ALT),
    }
}

/// Convert crossterm KeyCode to tabstrip Key
fn convert_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::F(n) => Some(Key::F(n)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        KeyCode::Insert => Some(Key::Insert),
        KeyCode::Delete => Some(Key::Delete),
        _ => None,
    }
}

/// Convert a crossterm KeyEvent to a tabstrip KeyCombo
///
/// Returns `None` for key codes the tab strip has no mapping for. Filtering
/// to press-only events is the caller's concern.
pub fn convert_key_event(event: KeyEvent) -> Option<KeyCombo> {
    let key = convert_key(event.code)?;
    let modifiers = convert_modifiers(event.modifiers);

    // Handle space specially (KeyCode::Char(' ') should become Key::Space)
    let key = if let Key::Char(' ') = key {
        Key::Space
    } else {
        key
    };

    Some(KeyCombo::new(key, modifiers))
}
