//! BuilderState - Snapshot of everything the wizard holds
//!
//! Nested structures sit behind `Arc`. The store copies on write, so a
//! snapshot handed out earlier never changes, and `Arc::ptr_eq` tells which
//! parts a mutation touched.

use shared::{AgentSpecification, Phase, Phase1State, Phase2State, Phase3State};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuilderState {
    pub current_phase: Phase,
    pub agent_spec: Arc<AgentSpecification>,
    pub phase1: Arc<Phase1State>,
    pub phase2: Arc<Phase2State>,
    pub phase3: Arc<Phase3State>,
}

impl BuilderState {
    /// True when `other` shares every nested structure with `self`
    pub fn shares_structure_with(&self, other: &BuilderState) -> bool {
        Arc::ptr_eq(&self.agent_spec, &other.agent_spec)
            && Arc::ptr_eq(&self.phase1, &other.phase1)
            && Arc::ptr_eq(&self.phase2, &other.phase2)
            && Arc::ptr_eq(&self.phase3, &other.phase3)
    }
}
