//! Integration tests for shortcut-core.
//!
//! These tests drive the public API the way the browser crate does: build a
//! controller over a recording host, feed it raw key events, and check what
//! reached the host and the help list.

use shortcut_core::{
    normalize, Analytics, ConferenceHost, FocusTarget, HelpList, HelpRenderer, KeyEventKind, KeyUpOutcome,
    MemoryHelpList, RawKeyEvent, ShortcutConfig, ShortcutController, Translator,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// =============================================================================
// Test doubles
// =============================================================================

#[derive(Default)]
struct Host {
    calls: RefCell<Vec<String>>,
    muted: Cell<bool>,
    smileys_visible: Cell<bool>,
}

impl Host {
    fn take_calls(&self) -> Vec<String> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }
}

impl ConferenceHost for Host {
    fn show_shortcuts_panel(&self, visible: bool) {
        self.calls.borrow_mut().push(format!("show_panel:{visible}"));
    }
    fn toggle_shortcuts_panel(&self) {
        self.calls.borrow_mut().push("toggle_panel".into());
    }
    fn toggle_raised_hand(&self) {
        self.calls.borrow_mut().push("raise_hand".into());
    }
    fn mute_audio(&self, muted: bool) {
        self.muted.set(muted);
        self.calls.borrow_mut().push(format!("mute:{muted}"));
    }
    fn is_audio_muted(&self) -> bool {
        self.muted.get()
    }
    fn click_on_pane(&self, index: usize) {
        self.calls.borrow_mut().push(format!("pane:{index}"));
    }
    fn toggle_overlay(&self, name: &str) {
        self.smileys_visible.set(!self.smileys_visible.get());
        self.calls.borrow_mut().push(format!("overlay:{name}"));
    }
    fn is_overlay_visible(&self, name: &str) -> bool {
        name == "smileys" && self.smileys_visible.get()
    }
}

struct Dictionary;

impl Translator for Dictionary {
    fn translate(&self, key: &str) -> String {
        match key {
            "keyboardShortcuts.raiseHand" => "Raise or lower your hand".to_string(),
            "keyboardShortcuts.toggleShortcuts" => "Show or hide keyboard shortcuts".to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Default)]
struct Events(RefCell<Vec<String>>);

impl Analytics for Events {
    fn send_event(&self, name: &str) {
        self.0.borrow_mut().push(name.to_string());
    }
}

struct Client {
    controller: ShortcutController,
    host: Rc<Host>,
    events: Rc<Events>,
    help: Rc<RefCell<MemoryHelpList>>,
}

fn client() -> Client {
    let host = Rc::new(Host::default());
    let events = Rc::new(Events::default());
    let help = Rc::new(RefCell::new(MemoryHelpList::new()));
    let controller = ShortcutController::with_defaults(
        ShortcutConfig::default(),
        host.clone(),
        events.clone(),
        HelpRenderer::new(help.clone(), Rc::new(Dictionary)),
    )
    .expect("default config is valid");
    Client {
        controller,
        host,
        events,
        help,
    }
}

fn key_up(key: &str) -> RawKeyEvent {
    RawKeyEvent::with_key(key, KeyEventKind::KeyUp)
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn test_registered_callback_invoked_once_with_event() {
    let mut c = client();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_clone = seen.clone();
    c.controller
        .registry_mut()
        .register(
            "l",
            None,
            Box::new(move |e| seen_clone.borrow_mut().push(e.clone())),
            None,
        )
        .expect("register");

    let event = key_up("L");
    assert_eq!(c.controller.on_key_up(&event, FocusTarget::None), KeyUpOutcome::Dispatched);
    assert_eq!(*seen.borrow(), vec![event]);
}

#[test]
fn test_second_registration_wins() {
    let mut c = client();
    let hits = Rc::new(RefCell::new(Vec::new()));
    for name in ["first", "second"] {
        let hits = hits.clone();
        c.controller
            .registry_mut()
            .register("K", None, Box::new(move |_| hits.borrow_mut().push(name)), None)
            .expect("register");
    }

    c.controller.on_key_up(&key_up("k"), FocusTarget::None);
    assert_eq!(*hits.borrow(), vec!["second"]);
    assert!(c.controller.registry().contains("K"));
}

#[test]
fn test_unregistered_key_falls_through() {
    let mut c = client();
    assert!(c.controller.registry_mut().unregister("R"));

    assert_eq!(c.controller.on_key_up(&key_up("r"), FocusTarget::None), KeyUpOutcome::Unhandled);
    assert!(c.host.take_calls().is_empty());
    assert!(c.events.0.borrow().is_empty());
}

#[test]
fn test_unregistered_digit_falls_through_to_pane() {
    let mut c = client();
    c.controller
        .registry_mut()
        .register("3", None, Box::new(|_| {}), None)
        .expect("register");
    c.controller.registry_mut().unregister("3");

    assert_eq!(
        c.controller.on_key_up(&key_up("3"), FocusTarget::None),
        KeyUpOutcome::PaneFocused(4)
    );
}

// =============================================================================
// Worked examples
// =============================================================================

#[test]
fn test_lowercase_r_raises_hand() {
    let mut c = client();
    let event = key_up("r");
    assert_eq!(normalize(&event), "r");

    c.controller.on_key_up(&event, FocusTarget::None);
    assert_eq!(c.host.take_calls(), vec!["raise_hand"]);
    assert_eq!(*c.events.0.borrow(), vec!["shortcut.raisedhand.toggled"]);
}

#[test]
fn test_keypress_question_mark_toggles_help() {
    let mut c = client();
    let event = RawKeyEvent::with_code(63, KeyEventKind::KeyPress);
    assert_eq!(normalize(&event), "?");

    c.controller.on_key_up(&event, FocusTarget::None);
    assert_eq!(c.host.take_calls(), vec!["toggle_panel"]);
}

#[test]
fn test_escape_code_hides_panel_or_closes_smileys() {
    let mut c = client();
    let event = RawKeyEvent::with_code(27, KeyEventKind::KeyUp);
    assert_eq!(normalize(&event), "Escape");

    c.controller.on_key_up(&event, FocusTarget::None);
    assert_eq!(c.host.take_calls(), vec!["show_panel:false"]);

    c.host.smileys_visible.set(true);
    assert_eq!(
        c.controller.on_key_up(&event, FocusTarget::None),
        KeyUpOutcome::OverlayToggled
    );
    assert_eq!(c.host.take_calls(), vec!["overlay:smileys"]);
    assert!(!c.host.smileys_visible.get());
}

#[test]
fn test_digit_five_focuses_pane_six() {
    let mut c = client();
    assert_eq!(
        c.controller.on_key_up(&key_up("5"), FocusTarget::None),
        KeyUpOutcome::PaneFocused(6)
    );
    assert_eq!(c.host.take_calls(), vec!["pane:6"]);
}

#[test]
fn test_legacy_keyup_digit_code() {
    let mut c = client();
    let event = RawKeyEvent::with_code(u32::from(b'7'), KeyEventKind::KeyUp);
    assert_eq!(
        c.controller.on_key_up(&event, FocusTarget::None),
        KeyUpOutcome::PaneFocused(8)
    );
}

// =============================================================================
// Push-to-talk
// =============================================================================

#[test]
fn test_hold_t_to_talk() {
    let mut c = client();
    c.host.muted.set(true);

    let press = RawKeyEvent::with_code(84, KeyEventKind::KeyDown);
    assert!(c.controller.on_key_down(&press, FocusTarget::None));
    assert!(!c.host.muted.get());

    let release = RawKeyEvent::with_code(84, KeyEventKind::KeyUp);
    c.controller.on_key_up(&release, FocusTarget::None);
    assert!(c.host.muted.get());
    assert_eq!(c.host.take_calls(), vec!["mute:false", "mute:true"]);
}

#[test]
fn test_typing_t_in_chat_keeps_mute() {
    let mut c = client();
    c.host.muted.set(true);

    let focus = FocusTarget::from_element("TEXTAREA", None);
    assert!(!c.controller.on_key_down(&key_up("t"), focus));
    assert_eq!(c.controller.on_key_up(&key_up("t"), focus), KeyUpOutcome::Suppressed);
    assert!(c.host.muted.get());
    assert!(c.host.take_calls().is_empty());
}

// =============================================================================
// Help panel and tooltips
// =============================================================================

#[test]
fn test_help_rows_translated() {
    let c = client();
    let help = c.help.borrow();
    assert_eq!(
        help.get("R").map(|item| item.description.as_str()),
        Some("Raise or lower your hand")
    );
    assert_eq!(
        help.get("1-9").map(|item| item.description_key.as_str()),
        Some("keyboardShortcuts.focusRemote")
    );
    assert!(help.get("ESCAPE").is_none());
}

#[test]
fn test_unregister_removes_help_row_once() {
    let mut c = client();
    assert!(c.help.borrow().contains("?"));

    c.controller.registry_mut().unregister("?");
    assert!(!c.help.borrow().contains("?"));

    // Repeating is harmless
    c.controller.registry_mut().unregister("?");
    assert!(!c.help.borrow().contains("?"));
}

#[test]
fn test_help_skipped_without_container() {
    let help = Rc::new(RefCell::new(MemoryHelpList::unmounted()));
    let controller = ShortcutController::with_defaults(
        ShortcutConfig::default(),
        Rc::new(Host::default()),
        Rc::new(Events::default()),
        HelpRenderer::new(help.clone(), Rc::new(Dictionary)),
    )
    .expect("default config is valid");

    assert_eq!(controller.registry().len(), 4);
    assert!(help.borrow().is_empty());
}

#[test]
fn test_tooltip_suffix() {
    let mut c = client();
    c.controller
        .registry_mut()
        .register("C", Some("toggleChatButton"), Box::new(|_| {}), Some("keyboardShortcuts.toggleChat"))
        .expect("register");

    assert_eq!(
        c.controller.tooltip_content("Open / close chat", Some("toggleChatButton")),
        "Open / close chat (C)"
    );
    assert_eq!(c.controller.registry().lookup_by_tag("unknown"), "");
}
