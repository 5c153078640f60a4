//! Core types for single-key keyboard shortcuts in the conference client.
//!
//! This crate provides the platform-independent half of the shortcut layer:
//! - Key normalization: [`normalize`], [`RawKeyEvent`]
//! - Registration and dispatch: [`ShortcutRegistry`]
//! - Help panel rows: [`HelpRenderer`], [`HelpList`]
//! - Listener logic and default shortcuts: [`ShortcutController`]
//!
//! The browser bindings live in `shortcut-web`.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

mod config;
pub mod controller;
mod error;
pub mod help;
pub mod host;
pub mod key;
pub mod registry;

pub use config::ShortcutConfig;
pub use controller::{FocusTarget, KeyUpOutcome, ShortcutController};
pub use error::{ConfigError, ShortcutError};
pub use help::{HelpItem, HelpList, HelpRenderer, MemoryHelpList};
pub use host::{Analytics, ConferenceHost, KeyTranslator, NoAnalytics, Translator};
pub use key::{canonical_key, normalize, pane_digit, KeyEventKind, RawKeyEvent};
pub use registry::{ShortcutBuilder, ShortcutEntry, ShortcutHandler, ShortcutRegistry};
