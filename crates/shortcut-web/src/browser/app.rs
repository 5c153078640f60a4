//! WASM entry point.

use super::dom_help::DomHelpList;
use super::events::{focus_target, raw_key_event};
use super::host::JsHost;
use super::listener::ListenerHandle;
use super::logger;
use super::scope::DispatchScope;
use shortcut_core::{HelpRenderer, RawKeyEvent, ShortcutConfig, ShortcutController, ShortcutHandler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, Event, KeyboardEvent};

/// Registry change requested while a shortcut callback was running.
enum PendingChange {
    Register {
        character: String,
        tag: Option<String>,
        handler: ShortcutHandler,
        help_text: Option<String>,
    },
    Unregister(String),
}

impl PendingChange {
    fn apply(self, controller: &mut ShortcutController) {
        match self {
            Self::Register {
                character,
                tag,
                handler,
                help_text,
            } => {
                let registered = controller.registry_mut().register(
                    &character,
                    tag.as_deref(),
                    handler,
                    help_text.as_deref(),
                );
                if let Err(err) = registered {
                    log::warn!("shortcut {character} not registered: {err}");
                }
            }
            Self::Unregister(character) => {
                controller.registry_mut().unregister(&character);
            }
        }
    }
}

/// Controller shared between the exported object and listener closures.
///
/// JS callbacks may register or unregister shortcuts while the controller
/// is borrowed for dispatch; those changes are queued and applied once the
/// dispatch returns.
struct Shared {
    controller: RefCell<ShortcutController>,
    pending: RefCell<Vec<PendingChange>>,
    scope: Rc<DispatchScope>,
}

impl Shared {
    fn new(controller: ShortcutController, scope: Rc<DispatchScope>) -> Self {
        Self {
            controller: RefCell::new(controller),
            pending: RefCell::new(Vec::new()),
            scope,
        }
    }

    /// Run `f` for a browser event, then rethrow any JS exception it raised.
    ///
    /// Events arriving while another dispatch holds the controller (a
    /// callback calling `dispatchEvent`) are ignored.
    fn dispatch(&self, event: &Event, f: impl FnOnce(&mut ShortcutController)) {
        {
            let Ok(mut controller) = self.controller.try_borrow_mut() else {
                log::warn!("nested {} event ignored", event.type_());
                return;
            };
            self.scope.set_event(Some(event.clone().into()));
            f(&mut controller);
            self.scope.set_event(None);
        }
        self.flush();
        if let Some(err) = self.scope.take_thrown() {
            wasm_bindgen::throw_val(err);
        }
    }

    /// Read-only access; yields the default while a dispatch holds the controller.
    fn inspect<R: Default>(&self, f: impl FnOnce(&ShortcutController) -> R) -> R {
        match self.controller.try_borrow() {
            Ok(controller) => f(&controller),
            Err(_) => {
                log::warn!("shortcut controller busy");
                R::default()
            }
        }
    }

    /// Apply `change` now, or queue it behind the running dispatch.
    /// Returns whether it was applied.
    fn change(&self, change: PendingChange) -> bool {
        match self.controller.try_borrow_mut() {
            Ok(mut controller) => {
                change.apply(&mut controller);
                true
            }
            Err(_) => {
                self.pending.borrow_mut().push(change);
                false
            }
        }
    }

    fn flush(&self) {
        let changes = std::mem::take(&mut *self.pending.borrow_mut());
        if changes.is_empty() {
            return;
        }
        let mut controller = self.controller.borrow_mut();
        for change in changes {
            change.apply(&mut controller);
        }
    }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Keyboard shortcuts for the conference page.
#[wasm_bindgen]
pub struct KeyboardShortcuts {
    shared: Rc<Shared>,
    document: Document,
    listeners: Vec<ListenerHandle>,
}

#[wasm_bindgen]
impl KeyboardShortcuts {
    /// Create the shortcut layer over a host object.
    ///
    /// `config_json` overrides the default configuration; the global
    /// shortcuts are registered immediately but no listener is attached
    /// until [`install`](Self::install).
    #[wasm_bindgen(constructor)]
    pub fn new(host: js_sys::Object, config_json: Option<String>) -> Result<KeyboardShortcuts, JsValue> {
        console_error_panic_hook::set_once();

        let config = match config_json {
            Some(json) => ShortcutConfig::from_json(&json).map_err(to_js)?,
            None => ShortcutConfig::default(),
        };
        logger::init(config.log_level_filter().unwrap_or(log::LevelFilter::Info));

        let document = window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;

        let scope = Rc::new(DispatchScope::new());
        let js_host = Rc::new(JsHost::new(
            host,
            document.clone(),
            &config.overlay_container_id,
            scope.clone(),
        ));
        let help = HelpRenderer::new(
            DomHelpList::new(document.clone(), &config.help_list_id),
            js_host.clone(),
        );
        let controller =
            ShortcutController::with_defaults(config, js_host.clone(), js_host, help).map_err(to_js)?;
        if let Some(err) = scope.take_thrown() {
            return Err(err);
        }

        Ok(Self {
            shared: Rc::new(Shared::new(controller, scope)),
            document,
            listeners: Vec::new(),
        })
    }

    /// Attach key and tooltip listeners. Calling twice replaces the first set.
    pub fn install(&mut self) -> Result<(), JsValue> {
        self.listeners.clear();
        let window = window().ok_or("No window")?;

        let shared = self.shared.clone();
        let document = self.document.clone();
        self.listeners.push(ListenerHandle::listen(&window, "keyup", move |e: Event| {
            if let Some(kb_event) = e.dyn_ref::<KeyboardEvent>() {
                let raw = raw_key_event(kb_event);
                let focus = focus_target(&document);
                shared.dispatch(&e, |c| {
                    c.on_key_up(&raw, focus);
                });
            }
        })?);

        let shared = self.shared.clone();
        let document = self.document.clone();
        self.listeners.push(ListenerHandle::listen(&window, "keydown", move |e: Event| {
            if let Some(kb_event) = e.dyn_ref::<KeyboardEvent>() {
                let raw = raw_key_event(kb_event);
                let focus = focus_target(&document);
                shared.dispatch(&e, |c| {
                    c.on_key_down(&raw, focus);
                });
            }
        })?);

        let selector = self
            .shared
            .inspect(|c| c.config().tooltip_selector.clone());
        for event_type in ["mouseover", "click"] {
            let shared = self.shared.clone();
            let selector = selector.clone();
            self.listeners.push(ListenerHandle::listen(&self.document, event_type, move |e: Event| {
                if let Some(anchor) = tooltip_anchor(&e, &selector) {
                    let content = anchor.get_attribute("content").unwrap_or_default();
                    let tag = anchor.get_attribute("shortcut");
                    let text = shared.inspect(|c| c.tooltip_content(&content, tag.as_deref()));
                    if anchor.set_attribute("data-content", &text).is_err() {
                        log::warn!("failed to set tooltip content");
                    }
                }
            })?);
        }

        log::debug!("{} listeners installed", self.listeners.len());
        Ok(())
    }

    /// Detach every listener.
    pub fn dispose(&mut self) {
        self.listeners.clear();
    }

    /// Register a shortcut calling `callback` with the triggering `KeyboardEvent`.
    pub fn register_shortcut(
        &self,
        character: &str,
        tag: Option<String>,
        callback: js_sys::Function,
        help_text: Option<String>,
    ) -> Result<(), JsValue> {
        if character.is_empty() {
            return Err(to_js(shortcut_core::ShortcutError::EmptyCharacter));
        }
        let scope = self.shared.scope.clone();
        let handler: ShortcutHandler = Box::new(move |_: &RawKeyEvent| {
            if let Err(err) = callback.call1(&JsValue::NULL, &scope.current_event()) {
                scope.record_thrown(err);
            }
        });
        let applied = self.shared.change(PendingChange::Register {
            character: character.to_string(),
            tag,
            handler,
            help_text,
        });
        // Queued changes report through the running dispatch instead.
        if applied {
            if let Some(err) = self.shared.scope.take_thrown() {
                return Err(err);
            }
        }
        Ok(())
    }

    /// Unregister a shortcut. Unknown characters are ignored.
    pub fn unregister_shortcut(&self, character: &str) {
        self.shared
            .change(PendingChange::Unregister(character.to_string()));
    }

    /// Tooltip suffix for `tag`, e.g. `" (M)"`.
    pub fn shortcut_suffix(&self, tag: &str) -> String {
        self.shared.inspect(|c| c.registry().lookup_by_tag(tag))
    }

    /// Whether `character` is registered.
    pub fn is_registered(&self, character: &str) -> bool {
        self.shared.inspect(|c| c.registry().contains(character))
    }

    /// Number of attached listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Nearest element matching `selector` from the event target upwards.
fn tooltip_anchor(event: &Event, selector: &str) -> Option<Element> {
    let element = event.target()?.dyn_into::<Element>().ok()?;
    element.closest(selector).ok().flatten()
}
