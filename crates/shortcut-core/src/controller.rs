//! Key listener logic and the default shortcut set.
//!
//! [`ShortcutController`] is the composition root: it owns the registry, the
//! host application handle and the configuration. The browser crate feeds
//! it key events together with the current focus target; tests do the same
//! with hand-built events.

use crate::config::ShortcutConfig;
use crate::error::ShortcutError;
use crate::help::HelpRenderer;
use crate::host::{Analytics, ConferenceHost};
use crate::key::{canonical_key, pane_digit, RawKeyEvent};
use crate::registry::{ShortcutBuilder, ShortcutRegistry};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Registry key of the Escape shortcut.
pub const ESCAPE_KEY: &str = "ESCAPE";
/// Registry key of the help toggle.
pub const HELP_KEY: &str = "?";
/// Registry key of the raise-hand toggle.
pub const RAISE_HAND_KEY: &str = "R";

/// Help row for the local pane digit.
pub const FOCUS_LOCAL_ROW: &str = "0";
/// Help row for the remote pane digits.
pub const FOCUS_REMOTE_ROW: &str = "1-9";

/// Analytics event names.
pub mod events {
    /// Help panel toggled from the keyboard.
    pub const HELP: &str = "shortcut.shortcut.help";
    /// Hand raised or lowered from the keyboard.
    pub const RAISED_HAND: &str = "shortcut.raisedhand.toggled";
    /// Push-to-talk key released.
    pub const TALK: &str = "shortcut.talk.clicked";
}

/// Localization keys of the default help rows.
pub mod help_keys {
    /// `?`
    pub const TOGGLE_SHORTCUTS: &str = "keyboardShortcuts.toggleShortcuts";
    /// `R`
    pub const RAISE_HAND: &str = "keyboardShortcuts.raiseHand";
    /// Push-to-talk key.
    pub const PUSH_TO_TALK: &str = "keyboardShortcuts.pushToTalk";
    /// `0`
    pub const FOCUS_LOCAL: &str = "keyboardShortcuts.focusLocal";
    /// `1-9`
    pub const FOCUS_REMOTE: &str = "keyboardShortcuts.focusRemote";
}

/// Element holding document focus when a key event arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FocusTarget {
    /// `<input type="text">`
    TextInput,
    /// `<input type="password">`
    PasswordInput,
    /// `<textarea>`
    TextArea,
    /// Any other focused element.
    Other,
    /// Nothing focused.
    #[default]
    None,
}

impl FocusTarget {
    /// Classify an element by tag name and `type` attribute.
    ///
    /// An `<input>` without a `type` attribute is a text input.
    pub fn from_element(tag_name: &str, input_type: Option<&str>) -> Self {
        if tag_name.eq_ignore_ascii_case("textarea") {
            return Self::TextArea;
        }
        if !tag_name.eq_ignore_ascii_case("input") {
            return Self::Other;
        }
        match input_type.map(str::to_ascii_lowercase).as_deref() {
            None | Some("text") => Self::TextInput,
            Some("password") => Self::PasswordInput,
            Some(_) => Self::Other,
        }
    }

    /// Text entry swallows shortcut keys.
    pub const fn is_text_entry(self) -> bool {
        matches!(self, Self::TextInput | Self::PasswordInput | Self::TextArea)
    }
}

/// What a key-up event ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyUpOutcome {
    /// A registered shortcut ran.
    Dispatched,
    /// A digit focused the pane at this index.
    PaneFocused(usize),
    /// Escape closed the escape overlay.
    OverlayToggled,
    /// Focus was in a text entry; the key was left alone.
    Suppressed,
    /// Nothing matched.
    Unhandled,
}

/// Owns the shortcut registry and reacts to key events.
pub struct ShortcutController {
    registry: ShortcutRegistry,
    host: Rc<dyn ConferenceHost>,
    config: ShortcutConfig,
}

impl ShortcutController {
    /// Create a controller with an empty registry.
    pub fn new(config: ShortcutConfig, host: Rc<dyn ConferenceHost>, help: HelpRenderer) -> Self {
        Self {
            registry: ShortcutRegistry::with_help(help),
            host,
            config,
        }
    }

    /// Validate `config`, then create a controller with the global shortcuts
    /// registered.
    pub fn with_defaults(
        config: ShortcutConfig,
        host: Rc<dyn ConferenceHost>,
        analytics: Rc<dyn Analytics>,
        help: HelpRenderer,
    ) -> Result<Self, ShortcutError> {
        config.validate()?;
        let mut controller = Self::new(config, host, help);
        controller.init_global_shortcuts(analytics)?;
        Ok(controller)
    }

    /// Register shortcuts for actions that have no button of their own.
    pub fn init_global_shortcuts(&mut self, analytics: Rc<dyn Analytics>) -> Result<(), ShortcutError> {
        let host = self.host.clone();
        ShortcutBuilder::new(ESCAPE_KEY).register(
            &mut self.registry,
            Box::new(move |_| host.show_shortcuts_panel(false)),
        )?;

        let host = self.host.clone();
        let sink = analytics.clone();
        ShortcutBuilder::new(HELP_KEY)
            .help(help_keys::TOGGLE_SHORTCUTS)
            .register(
                &mut self.registry,
                Box::new(move |_| {
                    sink.send_event(events::HELP);
                    host.toggle_shortcuts_panel();
                }),
            )?;

        let host = self.host.clone();
        let sink = analytics.clone();
        ShortcutBuilder::new(RAISE_HAND_KEY)
            .help(help_keys::RAISE_HAND)
            .register(
                &mut self.registry,
                Box::new(move |_| {
                    sink.send_event(events::RAISED_HAND);
                    host.toggle_raised_hand();
                }),
            )?;

        // Release half of push-to-talk; the press half lives in on_key_down.
        let host = self.host.clone();
        ShortcutBuilder::new(&self.config.push_to_talk())
            .help(help_keys::PUSH_TO_TALK)
            .register(
                &mut self.registry,
                Box::new(move |_| {
                    analytics.send_event(events::TALK);
                    host.mute_audio(true);
                }),
            )?;

        let help = self.registry.help_mut();
        help.add_entry(FOCUS_LOCAL_ROW, help_keys::FOCUS_LOCAL);
        help.add_entry(FOCUS_REMOTE_ROW, help_keys::FOCUS_REMOTE);

        log::info!("{} global shortcuts registered", self.registry.len());
        Ok(())
    }

    /// Handle a key-up event.
    pub fn on_key_up(&mut self, event: &RawKeyEvent, focus: FocusTarget) -> KeyUpOutcome {
        let key = canonical_key(event);

        if key == ESCAPE_KEY && self.host.is_overlay_visible(&self.config.escape_overlay) {
            self.host.toggle_overlay(&self.config.escape_overlay);
            return KeyUpOutcome::OverlayToggled;
        }

        if focus.is_text_entry() {
            return KeyUpOutcome::Suppressed;
        }

        if self.registry.dispatch(&key, event) {
            return KeyUpOutcome::Dispatched;
        }

        match pane_digit(&key) {
            Some(digit) => {
                let index = digit + self.config.pane_offset;
                log::debug!("focusing pane {index}");
                self.host.click_on_pane(index);
                KeyUpOutcome::PaneFocused(index)
            }
            None => KeyUpOutcome::Unhandled,
        }
    }

    /// Handle a key-down event. Returns true when audio was unmuted.
    pub fn on_key_down(&mut self, event: &RawKeyEvent, focus: FocusTarget) -> bool {
        if focus.is_text_entry() {
            return false;
        }
        if canonical_key(event) != self.config.push_to_talk() {
            return false;
        }
        if self.host.is_audio_muted() {
            self.host.mute_audio(false);
            return true;
        }
        false
    }

    /// Tooltip text for an element: its content plus the shortcut suffix.
    pub fn tooltip_content(&self, content: &str, tag: Option<&str>) -> String {
        match tag {
            Some(tag) => format!("{content}{}", self.registry.lookup_by_tag(tag)),
            None => content.to_string(),
        }
    }

    /// Shortcut registry.
    pub fn registry(&self) -> &ShortcutRegistry {
        &self.registry
    }

    /// Mutable shortcut registry.
    pub fn registry_mut(&mut self) -> &mut ShortcutRegistry {
        &mut self.registry
    }

    /// Active configuration.
    pub fn config(&self) -> &ShortcutConfig {
        &self.config
    }
}

impl std::fmt::Debug for ShortcutController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortcutController")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
