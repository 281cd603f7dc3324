//! Configuration types for Agent Builder

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the persisted state slot
pub const DEFAULT_SLOT_KEY: &str = "agent-builder-state";

/// Directory holding persisted slots
pub const DEFAULT_STORAGE_DIR: &str = ".agent-builder";

/// Builder configuration file (agent-builder.json)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuilderConfig {
    /// Where slot files are written
    pub storage_dir: PathBuf,

    /// Slot holding the wizard state
    pub slot_key: String,

    /// Save the wizard state when the interactive session ends
    pub autosave: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            slot_key: DEFAULT_SLOT_KEY.to_string(),
            autosave: true,
        }
    }
}

impl BuilderConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would produce an unusable slot path
    pub fn validate(&self) -> crate::Result<()> {
        let key = self.slot_key.trim();
        if key.is_empty() {
            return Err(crate::BuilderError::Config("slotKey must not be empty".to_string()));
        }
        if key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(crate::BuilderError::Config(format!(
                "slotKey '{}' must be a plain file name",
                self.slot_key
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_parse() {
        let json = r#"{
            "storageDir": "/tmp/agents",
            "autosave": false
        }"#;

        let config: BuilderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/agents"));
        assert_eq!(config.slot_key, DEFAULT_SLOT_KEY);
        assert!(!config.autosave);
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"slotKey": "scout"}}"#).unwrap();

        let config = BuilderConfig::from_file(file.path()).unwrap();
        assert_eq!(config.slot_key, "scout");
        assert!(config.autosave);
    }

    #[test]
    fn test_config_rejects_path_like_slot_key() {
        let config = BuilderConfig {
            slot_key: "../escape".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_empty_slot_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"slotKey": "  "}}"#).unwrap();
        assert!(BuilderConfig::from_file(file.path()).is_err());
    }
}
