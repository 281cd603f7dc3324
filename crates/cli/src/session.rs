//! Session wiring - configuration resolution and store construction

use clap::Args;
use shared::BuilderConfig;
use std::path::PathBuf;
use store::{AgentSpecStore, FileSlotStorage, LoadOutcome, SlotStorage};
use tracing::debug;

/// Options shared by every command
#[derive(Debug, Clone, Default, Args)]
pub struct SessionArgs {
    /// Configuration file (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the saved wizard state (overrides the config file)
    #[arg(long, global = true)]
    pub storage_dir: Option<PathBuf>,
}

impl SessionArgs {
    /// Resolve the effective configuration
    pub fn resolve_config(&self) -> anyhow::Result<BuilderConfig> {
        let mut config = match &self.config {
            Some(path) => BuilderConfig::from_file(path)?,
            None => BuilderConfig::default(),
        };
        if let Some(dir) = &self.storage_dir {
            config.storage_dir = dir.clone();
        }
        Ok(config)
    }
}

/// Build a file-backed store and restore any saved state
pub fn open_store(config: &BuilderConfig) -> AgentSpecStore<FileSlotStorage> {
    debug!(dir = %config.storage_dir.display(), slot = %config.slot_key, "Opening store");
    let storage = FileSlotStorage::new(&config.storage_dir);
    let mut store = AgentSpecStore::with_slot_key(storage, config.slot_key.clone());
    restore(&mut store);
    store
}

/// Load the slot, telling the user when a saved state had to be ignored
pub fn restore<S: SlotStorage>(store: &mut AgentSpecStore<S>) -> LoadOutcome {
    let outcome = store.load_from_slot();
    if let LoadOutcome::Rejected { reason } = &outcome {
        eprintln!("Ignoring saved state in slot '{}': {}", store.slot_key(), reason);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{IdentityPatch, DEFAULT_SLOT_KEY};
    use std::io::Write;

    #[test]
    fn test_resolve_defaults() {
        let config = SessionArgs::default().resolve_config().unwrap();
        assert_eq!(config, BuilderConfig::default());
    }

    #[test]
    fn test_storage_dir_overrides_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"storageDir": "/from/file", "slotKey": "scout"}}"#).unwrap();

        let args = SessionArgs {
            config: Some(file.path().to_path_buf()),
            storage_dir: Some(PathBuf::from("/from/flag")),
        };
        let config = args.resolve_config().unwrap();

        assert_eq!(config.storage_dir, PathBuf::from("/from/flag"));
        assert_eq!(config.slot_key, "scout");
    }

    #[test]
    fn test_open_store_restores_saved_state() {
        let dir = tempfile::tempdir().unwrap();
        let config = BuilderConfig {
            storage_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        let mut first = open_store(&config);
        first.update_identity(IdentityPatch::new().name("Scout"));
        first.save_to_slot().unwrap();

        let second = open_store(&config);
        assert_eq!(second.agent_spec().identity.name, "Scout");
        assert_eq!(second.slot_key(), DEFAULT_SLOT_KEY);
    }

    #[test]
    fn test_open_store_ignores_corrupt_slot() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("agent-builder-state.json"), "garbage").unwrap();
        let config = BuilderConfig {
            storage_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        let store = open_store(&config);
        assert!(store.agent_spec().identity.name.is_empty());
    }
}
