//! Shortcut layer configuration.
//!
//! Every field has a default matching the conference client's markup, so an
//! empty document is a valid configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Configuration for the controller and its browser wiring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutConfig {
    /// Id of the `<ul>` holding help rows.
    pub help_list_id: String,
    /// Overlay that Escape closes before anything else.
    pub escape_overlay: String,
    /// Id of the element whose visibility stands for the escape overlay.
    pub overlay_container_id: String,
    /// Key held to talk while muted.
    pub push_to_talk_key: String,
    /// Added to a pressed digit to get the pane index.
    pub pane_offset: usize,
    /// Selector of elements whose tooltip gets a shortcut suffix.
    pub tooltip_selector: String,
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    pub log_level: String,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            help_list_id: "keyboard-shortcuts-list".to_string(),
            escape_overlay: "smileys".to_string(),
            overlay_container_id: "smileysContainer".to_string(),
            push_to_talk_key: "T".to_string(),
            pane_offset: 1,
            tooltip_selector: "[data-toggle=popover]".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ShortcutConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("help_list_id", &self.help_list_id),
            ("escape_overlay", &self.escape_overlay),
            ("overlay_container_id", &self.overlay_container_id),
            ("tooltip_selector", &self.tooltip_selector),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid(field, "must not be empty"));
            }
        }

        if self.push_to_talk_key.chars().count() != 1 {
            return Err(ConfigError::invalid(
                "push_to_talk_key",
                "must be a single character",
            ));
        }

        if self.log_level_filter().is_none() {
            return Err(ConfigError::invalid("log_level", "unknown level"));
        }

        Ok(())
    }

    /// Push-to-talk key in registry form.
    pub fn push_to_talk(&self) -> String {
        self.push_to_talk_key.to_uppercase()
    }

    /// Parsed log level.
    pub fn log_level_filter(&self) -> Option<log::LevelFilter> {
        self.log_level.parse().ok()
    }
}
