//! State of the key event being dispatched.
//!
//! JS code runs while the controller is mutably borrowed. Throwing from
//! there would skip the borrow guard's destructor and leave the controller
//! locked, so exceptions are parked here and rethrown after the borrow ends.

use std::cell::RefCell;
use wasm_bindgen::JsValue;

/// Event in flight and the first exception raised while handling it.
#[derive(Debug, Default)]
pub struct DispatchScope {
    event: RefCell<Option<JsValue>>,
    thrown: RefCell<Option<JsValue>>,
}

impl DispatchScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Browser event passed to shortcut callbacks; `undefined` outside a dispatch.
    pub fn current_event(&self) -> JsValue {
        self.event.borrow().clone().unwrap_or(JsValue::UNDEFINED)
    }

    pub(crate) fn set_event(&self, event: Option<JsValue>) {
        *self.event.borrow_mut() = event;
    }

    /// Keep `err` for rethrowing. Only the first exception survives.
    pub fn record_thrown(&self, err: JsValue) {
        let mut thrown = self.thrown.borrow_mut();
        if thrown.is_none() {
            *thrown = Some(err);
        } else {
            log::warn!("host exception dropped, another is pending");
        }
    }

    pub fn take_thrown(&self) -> Option<JsValue> {
        self.thrown.borrow_mut().take()
    }
}
