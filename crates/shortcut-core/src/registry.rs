//! Keyboard shortcut registry.
//!
//! This module provides:
//! - Single-key shortcut registration and dispatch
//! - Reverse lookup from an element tag to its shortcut (tooltip suffixes)
//! - Help panel rows kept in step with registrations

use crate::error::ShortcutError;
use crate::help::HelpRenderer;
use crate::key::RawKeyEvent;
use std::collections::BTreeMap;

/// Callback for shortcut handling.
pub type ShortcutHandler = Box<dyn FnMut(&RawKeyEvent)>;

/// Registration for a shortcut character.
pub struct ShortcutEntry {
    character: String,
    associated_tag: Option<String>,
    help_text: Option<String>,
    handler: ShortcutHandler,
}

impl ShortcutEntry {
    /// Canonical (upper-case) character.
    pub fn character(&self) -> &str {
        &self.character
    }

    /// Tag linking the shortcut to a UI element.
    pub fn associated_tag(&self) -> Option<&str> {
        self.associated_tag.as_deref()
    }

    /// Localization key of the help row, if the shortcut is listed.
    pub fn help_text(&self) -> Option<&str> {
        self.help_text.as_deref()
    }
}

impl std::fmt::Debug for ShortcutEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortcutEntry")
            .field("character", &self.character)
            .field("associated_tag", &self.associated_tag)
            .field("help_text", &self.help_text)
            .finish_non_exhaustive()
    }
}

/// Registry mapping shortcut characters to handlers.
///
/// Characters are case-insensitive and stored upper-case. Registering a
/// character twice replaces the earlier entry without complaint.
pub struct ShortcutRegistry {
    /// Entries by canonical character.
    entries: BTreeMap<String, ShortcutEntry>,
    /// Help panel rows.
    help: HelpRenderer,
}

impl ShortcutRegistry {
    /// Create a registry that never shows help rows.
    pub fn new() -> Self {
        Self::with_help(HelpRenderer::detached())
    }

    /// Create a registry that lists described shortcuts in `help`.
    pub fn with_help(help: HelpRenderer) -> Self {
        Self {
            entries: BTreeMap::new(),
            help,
        }
    }

    /// Register a shortcut.
    ///
    /// Any existing help row for the character is replaced by the row for
    /// `help_text`, or dropped when no help text is given.
    pub fn register(
        &mut self,
        character: &str,
        associated_tag: Option<&str>,
        handler: ShortcutHandler,
        help_text: Option<&str>,
    ) -> Result<(), ShortcutError> {
        if character.is_empty() {
            return Err(ShortcutError::EmptyCharacter);
        }
        let character = character.to_uppercase();

        let entry = ShortcutEntry {
            character: character.clone(),
            associated_tag: associated_tag.map(str::to_string),
            help_text: help_text.map(str::to_string),
            handler,
        };

        if self.entries.insert(character.clone(), entry).is_some() {
            log::debug!("shortcut {character} replaced");
        } else {
            log::debug!("shortcut {character} registered");
        }

        // A row may exist without an entry (help-only rows) or from an
        // earlier registration; the list keeps at most one row per key.
        self.help.remove_entry(&character);

        if let Some(help_key) = help_text {
            self.help.add_entry(&character, help_key);
        }

        Ok(())
    }

    /// Unregister a shortcut. Returns whether an entry was removed.
    ///
    /// The help row is removed as well; unknown characters are a no-op.
    pub fn unregister(&mut self, character: &str) -> bool {
        let character = character.to_uppercase();
        let removed = self.entries.remove(&character).is_some();
        self.help.remove_entry(&character);
        if removed {
            log::debug!("shortcut {character} unregistered");
        }
        removed
    }

    /// Tooltip suffix for the first shortcut tagged `tag`, e.g. `" (R)"`.
    ///
    /// Empty when no shortcut carries the tag.
    pub fn lookup_by_tag(&self, tag: &str) -> String {
        self.entries
            .values()
            .find(|entry| entry.associated_tag.as_deref() == Some(tag))
            .map(|entry| format!(" ({})", entry.character))
            .unwrap_or_default()
    }

    /// Invoke the handler registered for `key`.
    ///
    /// `key` is upper-cased before lookup. Returns false when nothing is
    /// registered so the caller can apply its own default.
    pub fn dispatch(&mut self, key: &str, event: &RawKeyEvent) -> bool {
        let key = key.to_uppercase();
        match self.entries.get_mut(&key) {
            Some(entry) => {
                log::debug!("dispatching shortcut {key}");
                (entry.handler)(event);
                true
            }
            None => false,
        }
    }

    /// Whether `character` is registered.
    pub fn contains(&self, character: &str) -> bool {
        self.entries.contains_key(&character.to_uppercase())
    }

    /// Entry for `character`.
    pub fn get(&self, character: &str) -> Option<&ShortcutEntry> {
        self.entries.get(&character.to_uppercase())
    }

    /// All entries, ordered by character.
    pub fn entries(&self) -> impl Iterator<Item = &ShortcutEntry> {
        self.entries.values()
    }

    /// Number of registered shortcuts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no shortcut is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every shortcut and its help row.
    pub fn clear(&mut self) {
        for character in std::mem::take(&mut self.entries).into_keys() {
            self.help.remove_entry(&character);
        }
    }

    /// Help panel renderer.
    pub fn help(&self) -> &HelpRenderer {
        &self.help
    }

    /// Mutable help panel renderer, for rows without a registry entry.
    pub fn help_mut(&mut self) -> &mut HelpRenderer {
        &mut self.help
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ShortcutRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortcutRegistry")
            .field("characters", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for registering shortcuts with a fluent API.
#[derive(Debug, Clone)]
pub struct ShortcutBuilder {
    character: String,
    tag: Option<String>,
    help_text: Option<String>,
}

impl ShortcutBuilder {
    /// Create a new builder.
    pub fn new(character: &str) -> Self {
        Self {
            character: character.to_string(),
            tag: None,
            help_text: None,
        }
    }

    /// Link to a UI element tag.
    pub fn tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    /// List in the help panel under `help_text`.
    pub fn help(mut self, help_text: &str) -> Self {
        self.help_text = Some(help_text.to_string());
        self
    }

    /// Register with a registry.
    pub fn register(
        self,
        registry: &mut ShortcutRegistry,
        handler: ShortcutHandler,
    ) -> Result<(), ShortcutError> {
        registry.register(
            &self.character,
            self.tag.as_deref(),
            handler,
            self.help_text.as_deref(),
        )
    }
}
