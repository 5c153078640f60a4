//! JavaScript host adapter.
//!
//! The conference application hands over a plain object whose methods the
//! shortcut layer calls:
//!
//! | Method | Called for |
//! |--------|------------|
//! | `showKeyboardShortcutsPanel(bool)` | Escape |
//! | `toggleKeyboardShortcutsPanel()` | `?` |
//! | `toggleRaisedHand()` | `R` |
//! | `muteAudio(bool)` / `isAudioMuted()` | push-to-talk |
//! | `clickOnPane(index)` | digits |
//! | `toggleOverlay(name)` / `isOverlayVisible(name)` | Escape over an overlay |
//! | `translate(key)` | help rows |
//! | `sendEvent(name)` | analytics |
//!
//! Missing methods are logged and skipped. Exceptions thrown by a method are
//! recorded in the [`DispatchScope`] and rethrown by the entry point once the
//! controller is released, so they surface in the browser's error reporting.

use super::scope::DispatchScope;
use js_sys::{Function, Object, Reflect};
use shortcut_core::{Analytics, ConferenceHost, Translator};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// Host collaborators backed by a JavaScript object.
#[derive(Debug, Clone)]
pub struct JsHost {
    target: Object,
    document: Document,
    overlay_container_id: String,
    scope: Rc<DispatchScope>,
}

impl JsHost {
    /// Wrap `target`. `overlay_container_id` is checked for visibility when
    /// the object has no `isOverlayVisible` method.
    pub fn new(
        target: Object,
        document: Document,
        overlay_container_id: &str,
        scope: Rc<DispatchScope>,
    ) -> Self {
        Self {
            target,
            document,
            overlay_container_id: overlay_container_id.to_string(),
            scope,
        }
    }

    fn method(&self, name: &str) -> Option<Function> {
        Reflect::get(&self.target, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }

    fn call(&self, name: &str, arg: Option<JsValue>) -> Option<JsValue> {
        let Some(function) = self.method(name) else {
            log::warn!("host method {name} not provided");
            return None;
        };
        let result = match arg {
            Some(arg) => function.call1(&self.target, &arg),
            None => function.call0(&self.target),
        };
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.scope.record_thrown(err);
                None
            }
        }
    }

    fn call_bool(&self, name: &str, arg: Option<JsValue>) -> bool {
        self.call(name, arg).is_some_and(|value| value.is_truthy())
    }

    /// Layout visibility of the overlay container, as `:visible` tests it.
    fn container_visible(&self) -> bool {
        self.document
            .get_element_by_id(&self.overlay_container_id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .is_some_and(|element| element.offset_width() > 0 || element.offset_height() > 0)
    }
}

impl ConferenceHost for JsHost {
    fn show_shortcuts_panel(&self, visible: bool) {
        self.call("showKeyboardShortcutsPanel", Some(JsValue::from_bool(visible)));
    }

    fn toggle_shortcuts_panel(&self) {
        self.call("toggleKeyboardShortcutsPanel", None);
    }

    fn toggle_raised_hand(&self) {
        self.call("toggleRaisedHand", None);
    }

    fn mute_audio(&self, muted: bool) {
        self.call("muteAudio", Some(JsValue::from_bool(muted)));
    }

    fn is_audio_muted(&self) -> bool {
        self.call_bool("isAudioMuted", None)
    }

    fn click_on_pane(&self, index: usize) {
        self.call("clickOnPane", Some(JsValue::from_f64(index as f64)));
    }

    fn toggle_overlay(&self, name: &str) {
        self.call("toggleOverlay", Some(JsValue::from_str(name)));
    }

    fn is_overlay_visible(&self, name: &str) -> bool {
        if self.method("isOverlayVisible").is_some() {
            self.call_bool("isOverlayVisible", Some(JsValue::from_str(name)))
        } else {
            self.container_visible()
        }
    }
}

impl Translator for JsHost {
    fn translate(&self, key: &str) -> String {
        self.call("translate", Some(JsValue::from_str(key)))
            .and_then(|value| value.as_string())
            .unwrap_or_else(|| key.to_string())
    }
}

impl Analytics for JsHost {
    fn send_event(&self, name: &str) {
        self.call("sendEvent", Some(JsValue::from_str(name)));
    }
}
