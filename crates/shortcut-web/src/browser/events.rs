//! Browser event handling - converts web keyboard events and focus state.

use super::keys::raw_key_from_fields;
use shortcut_core::{FocusTarget, RawKeyEvent};
use web_sys::{Document, KeyboardEvent};

/// Convert a web_sys KeyboardEvent to a [`RawKeyEvent`].
pub fn raw_key_event(event: &KeyboardEvent) -> RawKeyEvent {
    raw_key_from_fields(
        &event.key(),
        &event.type_(),
        event.char_code(),
        event.key_code(),
        event.shift_key(),
    )
}

/// Classify the element holding focus in `document`.
pub fn focus_target(document: &Document) -> FocusTarget {
    match document.active_element() {
        Some(element) => {
            let input_type = element.get_attribute("type");
            FocusTarget::from_element(&element.tag_name(), input_type.as_deref())
        }
        None => FocusTarget::None,
    }
}
