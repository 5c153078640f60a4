//! Browser runtime for the shortcut layer.
//!
//! This module bridges [`shortcut_core::ShortcutController`] to the DOM:
//! key listeners on `window`, the help list element, tooltip content and
//! the JavaScript host object.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod dom_help;
#[cfg(target_arch = "wasm32")]
pub mod events;
#[cfg(target_arch = "wasm32")]
pub mod host;
#[cfg(target_arch = "wasm32")]
pub mod listener;
#[cfg(target_arch = "wasm32")]
pub mod logger;
#[cfg(target_arch = "wasm32")]
pub mod scope;

// Cross-platform modules
pub mod keys;

#[cfg(target_arch = "wasm32")]
pub use app::KeyboardShortcuts;
#[cfg(target_arch = "wasm32")]
pub use dom_help::DomHelpList;
#[cfg(target_arch = "wasm32")]
pub use host::JsHost;
#[cfg(target_arch = "wasm32")]
pub use listener::ListenerHandle;
#[cfg(target_arch = "wasm32")]
pub use scope::DispatchScope;
pub use keys::raw_key_from_fields;
