//! Collaborators supplied by the conference application.
//!
//! The shortcut layer never owns UI state. Everything it triggers goes
//! through these traits so the browser crate can forward to JavaScript and
//! tests can record calls.

/// Application actions reachable from keyboard shortcuts.
pub trait ConferenceHost {
    /// Show or hide the keyboard shortcuts panel.
    fn show_shortcuts_panel(&self, visible: bool);

    /// Flip the keyboard shortcuts panel.
    fn toggle_shortcuts_panel(&self);

    /// Raise the local hand, or lower it if already raised.
    fn toggle_raised_hand(&self);

    /// Mute (`true`) or unmute (`false`) local audio.
    fn mute_audio(&self, muted: bool);

    /// Whether local audio is currently muted.
    fn is_audio_muted(&self) -> bool;

    /// Focus the video pane at `index` (0 is the local pane).
    fn click_on_pane(&self, index: usize);

    /// Toggle a named overlay such as the smileys picker.
    fn toggle_overlay(&self, name: &str);

    /// Whether a named overlay is currently shown.
    fn is_overlay_visible(&self, name: &str) -> bool;
}

/// Resolves localization keys to display strings.
pub trait Translator {
    /// Translate `key`, falling back to whatever the implementation chooses.
    fn translate(&self, key: &str) -> String;
}

/// Fire-and-forget usage reporting.
pub trait Analytics {
    /// Report a named event.
    fn send_event(&self, name: &str);
}

/// Translator that echoes the key back.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyTranslator;

impl Translator for KeyTranslator {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Analytics sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAnalytics;

impl Analytics for NoAnalytics {
    fn send_event(&self, _name: &str) {}
}
