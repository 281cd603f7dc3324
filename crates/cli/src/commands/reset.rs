//! agent-builder reset command

use crate::session::open_store;
use clap::Args;
use shared::BuilderConfig;

#[derive(Debug, Args)]
pub struct ResetCommand {
    /// Delete the saved slot instead of overwriting it with a fresh state
    #[arg(long)]
    pub purge: bool,
}

impl ResetCommand {
    pub fn run(&self, config: &BuilderConfig) -> anyhow::Result<()> {
        let mut store = open_store(config);
        store.reset();
        if self.purge {
            store.clear_slot()?;
            println!("Removed saved state '{}'", store.slot_key());
        } else {
            store.save_to_slot()?;
            println!("Reset wizard to its initial state");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::IdentityPatch;

    fn config_in(dir: &tempfile::TempDir) -> BuilderConfig {
        BuilderConfig {
            storage_dir: dir.path().to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_reset_overwrites_slot() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let mut store = open_store(&config);
        store.update_identity(IdentityPatch::new().name("Scout"));
        store.save_to_slot().unwrap();

        ResetCommand { purge: false }.run(&config).unwrap();

        assert!(open_store(&config).agent_spec().identity.name.is_empty());
        assert!(dir.path().join("agent-builder-state.json").exists());
    }

    #[test]
    fn test_purge_removes_slot() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let mut store = open_store(&config);
        store.save_to_slot().unwrap();

        ResetCommand { purge: true }.run(&config).unwrap();

        assert!(!dir.path().join("agent-builder-state.json").exists());
    }
}
