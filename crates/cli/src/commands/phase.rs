//! agent-builder phase command

use crate::session::open_store;
use clap::Args;
use shared::{BuilderConfig, Phase};
use std::str::FromStr;
use store::{AgentSpecStore, SlotStorage};

/// Where to move the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseTarget {
    Exact(Phase),
    Next,
    Prev,
}

impl FromStr for PhaseTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "next" => Ok(PhaseTarget::Next),
            "prev" | "previous" => Ok(PhaseTarget::Prev),
            other => other
                .parse::<u8>()
                .map_err(|_| format!("Expected 1, 2, 3, next or prev, got '{}'", s))
                .and_then(|n| Phase::try_from(n).map_err(|e| e.to_string()))
                .map(PhaseTarget::Exact),
        }
    }
}

impl PhaseTarget {
    /// Apply the move to a store
    pub fn apply<S: SlotStorage>(self, store: &mut AgentSpecStore<S>) {
        match self {
            PhaseTarget::Exact(phase) => store.set_phase(phase),
            PhaseTarget::Next => store.next_phase(),
            PhaseTarget::Prev => store.prev_phase(),
        }
    }
}

#[derive(Debug, Args)]
pub struct PhaseCommand {
    /// Target phase: 1, 2, 3, next or prev
    pub target: PhaseTarget,
}

impl PhaseCommand {
    pub fn run(&self, config: &BuilderConfig) -> anyhow::Result<()> {
        let mut store = open_store(config);
        self.target.apply(&mut store);
        store.save_to_slot()?;

        let phase = store.current_phase();
        println!("Now in phase {}: {}", phase.number(), phase.label());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemorySlotStorage;

    #[test]
    fn test_parse_targets() {
        assert_eq!("2".parse::<PhaseTarget>().unwrap(), PhaseTarget::Exact(Phase::Diagram));
        assert_eq!("next".parse::<PhaseTarget>().unwrap(), PhaseTarget::Next);
        assert_eq!("PREV".parse::<PhaseTarget>().unwrap(), PhaseTarget::Prev);
        assert!("4".parse::<PhaseTarget>().is_err());
        assert!("0".parse::<PhaseTarget>().is_err());
        assert!("sideways".parse::<PhaseTarget>().is_err());
    }

    #[test]
    fn test_apply_clamps_at_edges() {
        let mut store = AgentSpecStore::new(MemorySlotStorage::new());
        PhaseTarget::Prev.apply(&mut store);
        assert_eq!(store.current_phase(), Phase::Discovery);

        PhaseTarget::Exact(Phase::Configuration).apply(&mut store);
        PhaseTarget::Next.apply(&mut store);
        assert_eq!(store.current_phase(), Phase::Configuration);
    }

    #[test]
    fn test_run_persists_phase() {
        let dir = tempfile::tempdir().unwrap();
        let config = BuilderConfig {
            storage_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        let cmd = PhaseCommand { target: PhaseTarget::Next };
        cmd.run(&config).unwrap();
        cmd.run(&config).unwrap();

        assert_eq!(open_store(&config).current_phase(), Phase::Configuration);
    }
}
