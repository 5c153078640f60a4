//! Help list rendered into the document.
//!
//! Each row is
//!
//! ```html
//! <li id="R">
//!   <span class="item-action"><kbd class="regular-key">R</kbd></span>
//!   <span class="item-description" data-i18n="keyboardShortcuts.raiseHand">…</span>
//! </li>
//! ```
//!
//! appended to the list element named in the configuration. Without that
//! element every operation is a no-op.

use shortcut_core::{HelpItem, HelpList};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// [`HelpList`] backed by a `<ul>` in the document.
#[derive(Debug, Clone)]
pub struct DomHelpList {
    document: Document,
    list_id: String,
}

impl DomHelpList {
    /// Help list inside the element with id `list_id`.
    pub fn new(document: Document, list_id: &str) -> Self {
        Self {
            document,
            list_id: list_id.to_string(),
        }
    }

    fn container(&self) -> Option<Element> {
        self.document.get_element_by_id(&self.list_id)
    }

    /// Row element for `id` among the container's children.
    ///
    /// Other elements in the page may share the id, so the lookup never
    /// leaves the container.
    fn row(&self, id: &str) -> Option<Element> {
        let rows = self.container()?.children();
        (0..rows.length())
            .filter_map(|index| rows.item(index))
            .find(|row| row.id() == id)
    }

    fn build_row(&self, item: &HelpItem) -> Result<Element, JsValue> {
        let row = self.document.create_element("li")?;
        row.set_id(&item.id);

        let action = self.document.create_element("span")?;
        action.set_class_name("item-action");
        let kbd = self.document.create_element("kbd")?;
        kbd.set_class_name("regular-key");
        kbd.set_text_content(Some(&item.key_label));
        action.append_child(&kbd)?;

        let description = self.document.create_element("span")?;
        description.set_class_name("item-description");
        description.set_attribute("data-i18n", &item.description_key)?;
        description.set_text_content(Some(&item.description));

        row.append_child(&action)?;
        row.append_child(&description)?;
        Ok(row)
    }
}

impl HelpList for DomHelpList {
    fn append(&mut self, item: HelpItem) {
        let Some(container) = self.container() else {
            log::debug!("#{} not mounted, help row {} skipped", self.list_id, item.id);
            return;
        };
        let appended = self
            .build_row(&item)
            .and_then(|row| container.append_child(&row));
        if appended.is_err() {
            log::warn!("failed to add help row {}", item.id);
        }
    }

    fn remove(&mut self, id: &str) -> bool {
        match self.row(id) {
            Some(row) => {
                row.remove();
                true
            }
            None => false,
        }
    }

    fn contains(&self, id: &str) -> bool {
        self.row(id).is_some()
    }
}
