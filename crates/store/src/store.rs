//! AgentSpecStore - Single source of truth for the wizard
//!
//! All mutators are synchronous. Each one replaces the nested structure it
//! touches (copy on write through `Arc::make_mut`) and then notifies every
//! observer in registration order.

use crate::persisted::PersistedState;
use crate::state::BuilderState;
use crate::storage::SlotStorage;
use shared::{
    position_by_id, AgentConnection, AgentSpecification, BuilderError, ChatMessage, Guardrail,
    GuardrailPatch, IdentityPatch, McpTool, McpToolPatch, MemoryKind, MemoryPatch, Phase, Result,
    Skill, SkillPatch, SpecPatch, DEFAULT_SLOT_KEY,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

type Observer = Box<dyn Fn(&BuilderState)>;

/// Handle returned by [`AgentSpecStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Result of reading the state slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The slot was read and applied
    Restored { schema_version: u64 },
    /// The slot has never been written
    Missing,
    /// The slot could not be used; state is unchanged
    Rejected { reason: String },
}

impl LoadOutcome {
    pub fn is_restored(&self) -> bool {
        matches!(self, LoadOutcome::Restored { .. })
    }
}

/// The agent specification store
pub struct AgentSpecStore<S: SlotStorage> {
    state: BuilderState,
    storage: S,
    slot_key: String,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl<S: SlotStorage> AgentSpecStore<S> {
    /// Create a store with default state persisting to the default slot
    pub fn new(storage: S) -> Self {
        Self::with_slot_key(storage, DEFAULT_SLOT_KEY)
    }

    /// Create a store persisting to a named slot
    pub fn with_slot_key(storage: S, slot_key: impl Into<String>) -> Self {
        Self {
            state: BuilderState::default(),
            storage,
            slot_key: slot_key.into(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    // ========== Readers ==========

    /// Borrow the live state
    pub fn state(&self) -> &BuilderState {
        &self.state
    }

    /// Cheap copy of the current state. Later mutations never alter it.
    pub fn snapshot(&self) -> BuilderState {
        self.state.clone()
    }

    pub fn current_phase(&self) -> Phase {
        self.state.current_phase
    }

    pub fn agent_spec(&self) -> &AgentSpecification {
        &self.state.agent_spec
    }

    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ========== Observers ==========

    /// Register an observer, called after every mutation
    pub fn subscribe(&mut self, observer: impl Fn(&BuilderState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn notify(&self) {
        for (_, observer) in &self.observers {
            observer(&self.state);
        }
    }

    fn spec_mut(&mut self) -> &mut AgentSpecification {
        Arc::make_mut(&mut self.state.agent_spec)
    }

    // ========== Specification ==========

    /// Replace whole top-level sections of the specification
    pub fn update_spec(&mut self, patch: SpecPatch) {
        patch.apply_to(self.spec_mut());
        debug!("Specification sections replaced");
        self.notify();
    }

    /// Merge fields into the identity
    pub fn update_identity(&mut self, patch: IdentityPatch) {
        patch.apply_to(&mut self.spec_mut().identity);
        debug!(name = %self.state.agent_spec.identity.name, "Identity updated");
        self.notify();
    }

    /// Merge settings into a memory kind given by its wire name.
    ///
    /// Unknown names are a programming error and leave state untouched.
    pub fn update_memory_config(&mut self, kind: &str, patch: MemoryPatch) -> Result<()> {
        let kind: MemoryKind = kind.parse().map_err(BuilderError::from)?;
        self.update_memory(kind, patch);
        Ok(())
    }

    /// Merge settings into a memory kind
    pub fn update_memory(&mut self, kind: MemoryKind, patch: MemoryPatch) {
        patch.apply_to(self.spec_mut().memory.get_mut(kind));
        debug!(kind = %kind, "Memory settings updated");
        self.notify();
    }

    pub fn add_skill(&mut self, skill: Skill) {
        debug!(id = %skill.id, "Skill added");
        self.spec_mut().skills.push(skill);
        self.notify();
    }

    /// Merge into the first skill with this id. Missing ids are ignored.
    pub fn update_skill(&mut self, id: &str, patch: SkillPatch) {
        match position_by_id(&self.state.agent_spec.skills, id) {
            Some(index) => patch.apply_to(&mut self.spec_mut().skills[index]),
            None => debug!(id, "No skill to update"),
        }
        self.notify();
    }

    pub fn add_mcp_tool(&mut self, tool: McpTool) {
        debug!(id = %tool.id, provider = %tool.provider, "MCP tool added");
        self.spec_mut().mcp_tools.push(tool);
        self.notify();
    }

    /// Merge into the first tool with this id. Missing ids are ignored.
    pub fn update_mcp_tool(&mut self, id: &str, patch: McpToolPatch) {
        match position_by_id(&self.state.agent_spec.mcp_tools, id) {
            Some(index) => patch.apply_to(&mut self.spec_mut().mcp_tools[index]),
            None => debug!(id, "No MCP tool to update"),
        }
        self.notify();
    }

    pub fn add_a2a_connection(&mut self, connection: AgentConnection) {
        debug!(id = %connection.id, agent = %connection.agent_name, "A2A connection added");
        self.spec_mut().a2a_connections.push(connection);
        self.notify();
    }

    pub fn add_guardrail(&mut self, guardrail: Guardrail) {
        debug!(id = %guardrail.id, "Guardrail added");
        self.spec_mut().guardrails.push(guardrail);
        self.notify();
    }

    /// Merge into the first guardrail with this id. Missing ids are ignored.
    pub fn update_guardrail(&mut self, id: &str, patch: GuardrailPatch) {
        match position_by_id(&self.state.agent_spec.guardrails, id) {
            Some(index) => patch.apply_to(&mut self.spec_mut().guardrails[index]),
            None => debug!(id, "No guardrail to update"),
        }
        self.notify();
    }

    // ========== Phase Navigation ==========

    /// Jump straight to a phase
    pub fn set_phase(&mut self, phase: Phase) {
        self.state.current_phase = phase;
        debug!(phase = phase.number(), "Phase set");
        self.notify();
    }

    /// Advance one phase, staying on the last
    pub fn next_phase(&mut self) {
        self.state.current_phase = self.state.current_phase.next();
        debug!(phase = self.state.current_phase.number(), "Next phase");
        self.notify();
    }

    /// Go back one phase, staying on the first
    pub fn prev_phase(&mut self) {
        self.state.current_phase = self.state.current_phase.prev();
        debug!(phase = self.state.current_phase.number(), "Previous phase");
        self.notify();
    }

    // ========== Phase 1 ==========

    pub fn add_message(&mut self, message: ChatMessage) {
        Arc::make_mut(&mut self.state.phase1).messages.push(message);
        self.notify();
    }

    pub fn set_current_section(&mut self, section: u8) {
        Arc::make_mut(&mut self.state.phase1).current_section = section;
        self.notify();
    }

    pub fn set_discovery_complete(&mut self, complete: bool) {
        Arc::make_mut(&mut self.state.phase1).is_complete = complete;
        self.notify();
    }

    // ========== Phase 2 ==========

    pub fn select_node(&mut self, node_id: Option<String>) {
        Arc::make_mut(&mut self.state.phase2).selected_node = node_id;
        self.notify();
    }

    // ========== Phase 3 ==========

    pub fn set_current_step(&mut self, step: u8) {
        Arc::make_mut(&mut self.state.phase3).current_step = step;
        self.notify();
    }

    pub fn set_expanded_card(&mut self, card_id: Option<String>) {
        Arc::make_mut(&mut self.state.phase3).expanded_card = card_id;
        self.notify();
    }

    /// Return to the documented defaults (the slot is left alone)
    pub fn reset(&mut self) {
        self.state = BuilderState::default();
        info!("Wizard state reset to defaults");
        self.notify();
    }

    // ========== Export ==========

    /// Pretty-printed JSON of the specification only
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&*self.state.agent_spec)?)
    }

    /// The specification rendered as YAML
    pub fn export_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&*self.state.agent_spec)
            .map_err(|e| BuilderError::Other(format!("YAML error: {}", e)))
    }

    // ========== Persistence ==========

    /// Write the whole wizard state to the slot, overwriting it
    pub fn save_to_slot(&mut self) -> Result<()> {
        let document = PersistedState::encode(&self.state)?;
        self.storage.write(&self.slot_key, &document)?;
        info!(slot = %self.slot_key, bytes = document.len(), "Wizard state saved");
        Ok(())
    }

    /// Restore the wizard state from the slot.
    ///
    /// Never fails: an unreadable or malformed slot is logged and reported,
    /// and the current state is kept as is.
    pub fn load_from_slot(&mut self) -> LoadOutcome {
        let raw = match self.storage.read(&self.slot_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(slot = %self.slot_key, "No saved wizard state");
                return LoadOutcome::Missing;
            }
            Err(e) => return self.reject(e),
        };

        match PersistedState::decode(&raw) {
            Ok(document) => {
                let schema_version = document.schema_version;
                self.state = document.into();
                info!(slot = %self.slot_key, schema_version, "Wizard state restored");
                self.notify();
                LoadOutcome::Restored { schema_version }
            }
            Err(e) => self.reject(e),
        }
    }

    fn reject(&self, error: BuilderError) -> LoadOutcome {
        warn!(slot = %self.slot_key, error = %error, "Failed to load wizard state");
        LoadOutcome::Rejected {
            reason: error.to_string(),
        }
    }

    /// Remove the slot
    pub fn clear_slot(&mut self) -> Result<()> {
        self.storage.remove(&self.slot_key)
    }
}

impl<S: SlotStorage + std::fmt::Debug> std::fmt::Debug for AgentSpecStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentSpecStore")
            .field("state", &self.state)
            .field("storage", &self.storage)
            .field("slot_key", &self.slot_key)
            .field("observers", &self.observers.len())
            .finish()
    }
}
