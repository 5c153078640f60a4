//! Error types for shortcut-core.

use thiserror::Error;

/// Errors raised by the shortcut registry and controller.
#[derive(Debug, Error)]
pub enum ShortcutError {
    /// A shortcut was registered with an empty character.
    #[error("shortcut character must not be empty")]
    EmptyCharacter,

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while loading or validating [`crate::ShortcutConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A field holds a value the controller cannot use.
    #[error("Invalid value for '{field}': {message}")]
    Invalid {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, message: &str) -> Self {
        Self::Invalid {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}
