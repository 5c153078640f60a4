//! Keyboard event field extraction.
//!
//! Kept free of `web_sys` so the field rules run under native tests.

use shortcut_core::{KeyEventKind, RawKeyEvent};

/// Build a [`RawKeyEvent`] from the fields a browser keyboard event exposes.
///
/// An empty `key` is treated as missing. The numeric code follows the
/// legacy `which` rule: the character code when set, else the key code.
pub fn raw_key_from_fields(
    key: &str,
    event_type: &str,
    char_code: u32,
    key_code: u32,
    shift: bool,
) -> RawKeyEvent {
    RawKeyEvent {
        key: (!key.is_empty()).then(|| key.to_string()),
        which: if char_code != 0 { char_code } else { key_code },
        kind: KeyEventKind::from(event_type),
        shift,
    }
}
