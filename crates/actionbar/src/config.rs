//! Container configuration.
//!
//! The only option is the item size: the square edge length every action
//! view is attached with. It is fixed when the container is constructed.
//!
//! Configuration can be built in code or read from a TOML document:
//!
//! ```toml
//! [action_container]
//! action-size = 48
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Construction-time configuration for an [`ActionContainer`](crate::ActionContainer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ActionContainerConfig {
    /// Square edge length, in pixels, of each attached action view.
    pub action_size: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigDocument {
    action_container: RawContainerSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct RawContainerSection {
    action_size: Option<toml::Value>,
}

impl ActionContainerConfig {
    /// Create a configuration with the default item size of zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the item size using builder pattern.
    pub fn with_action_size(mut self, size: u32) -> Self {
        self.action_size = size;
        self
    }

    /// Parse a configuration from a TOML document.
    ///
    /// A missing `[action_container]` table or `action-size` key yields the
    /// default size.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let document: ConfigDocument = toml::from_str(source).map_err(ConfigError::from)?;
        let action_size = match document.action_container.action_size {
            None => 0,
            Some(value) => parse_action_size(&value)?,
        };
        tracing::debug!(target: "actionbar::config", action_size, "resolved container config");
        Ok(Self { action_size })
    }

    /// Read and parse a configuration file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_toml_str(&source)
    }
}

fn parse_action_size(value: &toml::Value) -> Result<u32> {
    let raw = value
        .as_integer()
        .ok_or_else(|| ConfigError::invalid_value("action-size", "expected an integer"))?;
    u32::try_from(raw).map_err(|_| {
        ConfigError::invalid_value(
            "action-size",
            format!("{raw} is outside the range 0..={}", u32::MAX),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size_is_zero() {
        assert_eq!(ActionContainerConfig::new().action_size, 0);
        assert_eq!(ActionContainerConfig::from_toml_str("").unwrap().action_size, 0);
        assert_eq!(
            ActionContainerConfig::from_toml_str("[action_container]\n")
                .unwrap()
                .action_size,
            0
        );
    }

    #[test]
    fn test_builder() {
        let config = ActionContainerConfig::new().with_action_size(40);
        assert_eq!(config.action_size, 40);
    }

    #[test]
    fn test_parse_size() {
        let config =
            ActionContainerConfig::from_toml_str("[action_container]\naction-size = 48\n").unwrap();
        assert_eq!(config.action_size, 48);
    }

    #[test]
    fn test_negative_size_rejected() {
        let err = ActionContainerConfig::from_toml_str("[action_container]\naction-size = -4\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref property, .. } if property == "action-size"));
    }

    #[test]
    fn test_non_integer_size_rejected() {
        let err =
            ActionContainerConfig::from_toml_str("[action_container]\naction-size = \"big\"\n")
                .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_malformed_document() {
        let err = ActionContainerConfig::from_toml_str("[action_container").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toolbar.toml");
        std::fs::write(&path, "[action_container]\naction-size = 36\n").unwrap();
        assert_eq!(
            ActionContainerConfig::from_toml_file(&path).unwrap().action_size,
            36
        );

        let missing = dir.path().join("missing.toml");
        let err = ActionContainerConfig::from_toml_file(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
