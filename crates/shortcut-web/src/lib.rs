//! Browser bindings for conference keyboard shortcuts.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { KeyboardShortcuts } from './shortcut_web.js';
//!
//! async function main() {
//!     await init();
//!     const shortcuts = new KeyboardShortcuts(hostActions, null);
//!     shortcuts.install();
//!     shortcuts.register_shortcut('M', 'toggleAudioButton', toggleMute, 'keyboardShortcuts.mute');
//! }
//! ```

#![allow(
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::needless_pass_by_value,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::new_without_default
)]

pub use shortcut_core::*;

pub mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::KeyboardShortcuts;

pub use browser::raw_key_from_fields;
