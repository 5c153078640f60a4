//! Keyboard event normalization.
//!
//! Browsers disagree on which fields a keyboard event carries. Modern engines
//! expose a textual `key`; older ones only give a numeric code whose meaning
//! depends on whether the event was a `keypress` or a `keydown`/`keyup`.
//! [`normalize`] walks an ordered chain of extraction strategies and returns
//! the first canonical key any of them produces.

use serde::{Deserialize, Serialize};

/// Code reported for the Escape key.
pub const CODE_ESCAPE: u32 = 27;
/// Code reported for the slash / question mark key on QWERTY layouts.
pub const CODE_SLASH: u32 = 191;

/// Canonical spelling of the Escape key.
pub const ESCAPE: &str = "Escape";

/// Which browser event produced a [`RawKeyEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KeyEventKind {
    /// `keydown`
    KeyDown,
    /// `keyup`
    #[default]
    KeyUp,
    /// `keypress` (character producing)
    KeyPress,
}

impl KeyEventKind {
    /// Character-producing events carry a character code rather than a key code.
    pub const fn is_character_press(self) -> bool {
        matches!(self, Self::KeyPress)
    }
}

impl From<&str> for KeyEventKind {
    fn from(s: &str) -> Self {
        match s {
            "keydown" => Self::KeyDown,
            "keypress" => Self::KeyPress,
            _ => Self::KeyUp,
        }
    }
}

/// Keyboard event payload as delivered by the browser.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawKeyEvent {
    /// Textual key, when the engine supports it.
    pub key: Option<String>,
    /// Numeric key or character code (`which`).
    pub which: u32,
    /// Event type.
    pub kind: KeyEventKind,
    /// Shift modifier state.
    pub shift: bool,
}

impl RawKeyEvent {
    /// Event with a textual key field.
    pub fn with_key(key: impl Into<String>, kind: KeyEventKind) -> Self {
        Self {
            key: Some(key.into()),
            which: 0,
            kind,
            shift: false,
        }
    }

    /// Legacy event with only a numeric code.
    pub const fn with_code(which: u32, kind: KeyEventKind) -> Self {
        Self {
            key: None,
            which,
            kind,
            shift: false,
        }
    }

    /// Set shift state.
    pub const fn shifted(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }
}

type Strategy = fn(&RawKeyEvent) -> Option<String>;

const STRATEGIES: [Strategy; 4] = [direct_key, printable_press, named_code, code_char];

/// Convert a raw event into its canonical key.
///
/// Named keys keep their spelling (`"Escape"`); anything else is the
/// character for the event. Case is not folded here: callers upper-case
/// before looking up the registry.
pub fn normalize(event: &RawKeyEvent) -> String {
    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(event))
        .unwrap_or_default()
}

/// Normalize and upper-case, the form the registry is keyed by.
pub fn canonical_key(event: &RawKeyEvent) -> String {
    normalize(event).to_uppercase()
}

/// Digit value of a single-digit key, used for pane focus.
pub fn pane_digit(key: &str) -> Option<usize> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(10).map(|d| d as usize),
        _ => None,
    }
}

fn direct_key(event: &RawKeyEvent) -> Option<String> {
    event.key.clone()
}

fn printable_press(event: &RawKeyEvent) -> Option<String> {
    let printable = matches!(event.which, 32..=126 | 160..=255);
    (event.kind.is_character_press() && printable).then(|| from_char_code(event.which).to_string())
}

fn named_code(event: &RawKeyEvent) -> Option<String> {
    match event.which {
        CODE_ESCAPE => Some(ESCAPE.to_string()),
        CODE_SLASH if event.shift => Some("?".to_string()),
        CODE_SLASH => Some("/".to_string()),
        _ => None,
    }
}

fn code_char(event: &RawKeyEvent) -> Option<String> {
    let c = from_char_code(event.which);
    if event.shift || event.kind.is_character_press() {
        Some(c.to_uppercase().collect())
    } else {
        Some(c.to_lowercase().collect())
    }
}

/// `String.fromCharCode` for a single code: 16-bit truncation, lone
/// surrogates replaced.
fn from_char_code(code: u32) -> char {
    char::from_u32(code & 0xFFFF).unwrap_or(char::REPLACEMENT_CHARACTER)
}
