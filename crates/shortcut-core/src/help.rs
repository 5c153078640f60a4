//! Help panel listing the active shortcuts.
//!
//! The panel is a flat list of rows keyed by shortcut character. Rows are
//! built here (including translation) and handed to a [`HelpList`], which
//! owns the actual container: a DOM `<ul>` in the browser, a vector in tests.

use crate::host::{KeyTranslator, Translator};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// One row of the help panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpItem {
    /// Row identifier, the shortcut character.
    pub id: String,
    /// Text shown inside the key glyph.
    pub key_label: String,
    /// Localization key for the description.
    pub description_key: String,
    /// Translated description.
    pub description: String,
}

/// Container receiving help rows.
///
/// Implementations must tolerate a missing container: `append` and `remove`
/// are silent no-ops when there is nowhere to put the row.
pub trait HelpList {
    /// Append a row to the end of the list.
    fn append(&mut self, item: HelpItem);

    /// Remove the row with `id`, returning whether one existed.
    fn remove(&mut self, id: &str) -> bool;

    /// Whether a row with `id` is present.
    fn contains(&self, id: &str) -> bool;
}

impl<L: HelpList> HelpList for Rc<RefCell<L>> {
    fn append(&mut self, item: HelpItem) {
        self.borrow_mut().append(item);
    }

    fn remove(&mut self, id: &str) -> bool {
        self.borrow_mut().remove(id)
    }

    fn contains(&self, id: &str) -> bool {
        self.borrow().contains(id)
    }
}

/// In-memory help list.
///
/// `mounted` mirrors whether the container exists in the current view;
/// an unmounted list ignores appends the way the DOM list does when its
/// container element is missing.
#[derive(Debug, Clone)]
pub struct MemoryHelpList {
    items: Vec<HelpItem>,
    mounted: bool,
}

impl MemoryHelpList {
    /// Create a mounted, empty list.
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            mounted: true,
        }
    }

    /// Create a list whose container is absent.
    pub const fn unmounted() -> Self {
        Self {
            items: Vec::new(),
            mounted: false,
        }
    }

    /// Mount or unmount the container. Unmounting drops all rows.
    pub fn set_mounted(&mut self, mounted: bool) {
        self.mounted = mounted;
        if !mounted {
            self.items.clear();
        }
    }

    /// Whether the container exists.
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Rows in display order.
    pub fn items(&self) -> &[HelpItem] {
        &self.items
    }

    /// Row by id.
    pub fn get(&self, id: &str) -> Option<&HelpItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for MemoryHelpList {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpList for MemoryHelpList {
    fn append(&mut self, item: HelpItem) {
        if self.mounted {
            self.items.push(item);
        }
    }

    fn remove(&mut self, id: &str) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }
}

/// Builds translated help rows and keeps them in a [`HelpList`].
pub struct HelpRenderer {
    list: Box<dyn HelpList>,
    translator: Rc<dyn Translator>,
}

impl HelpRenderer {
    /// Create a renderer over `list`, translating with `translator`.
    pub fn new(list: impl HelpList + 'static, translator: Rc<dyn Translator>) -> Self {
        Self {
            list: Box::new(list),
            translator,
        }
    }

    /// Renderer with no container, for registries that never show help.
    pub fn detached() -> Self {
        Self::new(MemoryHelpList::unmounted(), Rc::new(KeyTranslator))
    }

    /// Add a row for `character` described by `help_key`.
    pub fn add_entry(&mut self, character: &str, help_key: &str) {
        let item = HelpItem {
            id: character.to_string(),
            key_label: character.to_string(),
            description_key: help_key.to_string(),
            description: self.translator.translate(help_key),
        };
        self.list.append(item);
    }

    /// Remove the row for `character`; absent rows are ignored.
    pub fn remove_entry(&mut self, character: &str) -> bool {
        self.list.remove(character)
    }
}

impl Default for HelpRenderer {
    fn default() -> Self {
        Self::detached()
    }
}

impl std::fmt::Debug for HelpRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HelpRenderer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Translator for Upper {
        fn translate(&self, key: &str) -> String {
            key.to_uppercase()
        }
    }

    fn renderer() -> (HelpRenderer, Rc<RefCell<MemoryHelpList>>) {
        let list = Rc::new(RefCell::new(MemoryHelpList::new()));
        (HelpRenderer::new(list.clone(), Rc::new(Upper)), list)
    }

    #[test]
    fn test_add_entry_translates_description() {
        let (mut help, list) = renderer();
        help.add_entry("R", "keyboardShortcuts.raiseHand");

        let list = list.borrow();
        let item = list.get("R").unwrap();
        assert_eq!(item.key_label, "R");
        assert_eq!(item.description_key, "keyboardShortcuts.raiseHand");
        assert_eq!(item.description, "KEYBOARDSHORTCUTS.RAISEHAND");
    }

    #[test]
    fn test_add_then_remove_leaves_no_node() {
        let (mut help, list) = renderer();
        help.add_entry("?", "keyboardShortcuts.toggleShortcuts");
        assert!(list.borrow().contains("?"));

        assert!(help.remove_entry("?"));
        assert!(!list.borrow().contains("?"));
        assert!(list.borrow().is_empty());

        // Second removal is a no-op
        assert!(!help.remove_entry("?"));
    }

    #[test]
    fn test_rows_keep_insertion_order() {
        let (mut help, list) = renderer();
        help.add_entry("ESCAPE", "a");
        help.add_entry("?", "b");
        help.add_entry("R", "c");

        let ids: Vec<_> = list.borrow().items().iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec!["ESCAPE", "?", "R"]);
    }

    #[test]
    fn test_missing_container_skips_insertion() {
        let list = Rc::new(RefCell::new(MemoryHelpList::unmounted()));
        let mut help = HelpRenderer::new(list.clone(), Rc::new(KeyTranslator));

        help.add_entry("R", "keyboardShortcuts.raiseHand");
        assert!(!list.borrow().contains("R"));
        assert!(!help.remove_entry("R"));
    }

    #[test]
    fn test_unmount_drops_rows() {
        let mut list = MemoryHelpList::new();
        list.append(HelpItem {
            id: "T".to_string(),
            key_label: "T".to_string(),
            description_key: "k".to_string(),
            description: "k".to_string(),
        });
        assert_eq!(list.len(), 1);

        list.set_mounted(false);
        assert!(!list.is_mounted());
        assert!(list.is_empty());
    }

    #[test]
    fn test_detached_renderer_is_inert() {
        let mut help = HelpRenderer::detached();
        help.add_entry("R", "x");
        assert!(!help.remove_entry("R"));
    }
}
