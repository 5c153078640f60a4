//! Event listener subscriptions.
//!
//! A [`ListenerHandle`] keeps the Rust closure alive for as long as the
//! listener is attached and detaches it when dropped.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// Attached event listener; dropping it removes the listener.
pub struct ListenerHandle {
    target: EventTarget,
    event_type: String,
    closure: Option<Closure<dyn FnMut(Event)>>,
}

impl ListenerHandle {
    /// Attach `handler` to `event_type` events on `target`.
    pub fn listen<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_type: event_type.to_string(),
            closure: Some(closure),
        })
    }

    /// Detach now instead of at drop.
    pub fn dispose(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(closure) = self.closure.take() {
            let removed = self
                .target
                .remove_event_listener_with_callback(&self.event_type, closure.as_ref().unchecked_ref());
            if removed.is_err() {
                log::warn!("failed to remove {} listener", self.event_type);
            }
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerHandle")
            .field("event_type", &self.event_type)
            .field("attached", &self.closure.is_some())
            .finish()
    }
}
