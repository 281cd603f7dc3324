//! PersistedState - Versioned document stored in the state slot
//!
//! Version 0 is the legacy shape without a `schemaVersion` field. Every
//! document is migrated step by step on the raw JSON value before it is
//! decoded, so older slots keep loading after the shape moves on.

use crate::state::BuilderState;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{AgentSpecification, BuilderError, Phase, Phase1State, Phase2State, Phase3State, Result};
use std::sync::Arc;

/// Schema version written by this build
pub const CURRENT_SCHEMA_VERSION: u64 = 1;

const SCHEMA_VERSION_FIELD: &str = "schemaVersion";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub schema_version: u64,
    pub current_phase: Phase,
    pub agent_spec: Arc<AgentSpecification>,
    pub phase1: Arc<Phase1State>,
    pub phase2: Arc<Phase2State>,
    pub phase3: Arc<Phase3State>,
}

impl From<&BuilderState> for PersistedState {
    fn from(state: &BuilderState) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            current_phase: state.current_phase,
            agent_spec: Arc::clone(&state.agent_spec),
            phase1: Arc::clone(&state.phase1),
            phase2: Arc::clone(&state.phase2),
            phase3: Arc::clone(&state.phase3),
        }
    }
}

impl From<PersistedState> for BuilderState {
    fn from(doc: PersistedState) -> Self {
        Self {
            current_phase: doc.current_phase,
            agent_spec: doc.agent_spec,
            phase1: doc.phase1,
            phase2: doc.phase2,
            phase3: doc.phase3,
        }
    }
}

impl PersistedState {
    /// Serialize a state snapshot as the current document version
    pub fn encode(state: &BuilderState) -> Result<String> {
        Ok(serde_json::to_string(&PersistedState::from(state))?)
    }

    /// Parse, migrate and decode a stored document
    pub fn decode(raw: &str) -> Result<PersistedState> {
        let value: Value = serde_json::from_str(raw)?;
        let migrated = migrate(value)?;
        Ok(serde_json::from_value(migrated)?)
    }
}

/// Version recorded in a raw document (absent means version 0)
pub fn schema_version_of(value: &Value) -> Result<u64> {
    match value.get(SCHEMA_VERSION_FIELD) {
        None => Ok(0),
        Some(v) => v.as_u64().ok_or_else(|| {
            BuilderError::Other(format!("{} must be a non-negative integer", SCHEMA_VERSION_FIELD))
        }),
    }
}

/// Bring a raw document up to [`CURRENT_SCHEMA_VERSION`]
pub fn migrate(mut value: Value) -> Result<Value> {
    if !value.is_object() {
        return Err(BuilderError::Other("Persisted state is not a JSON object".to_string()));
    }

    let mut version = schema_version_of(&value)?;
    if version > CURRENT_SCHEMA_VERSION {
        return Err(BuilderError::UnsupportedSchemaVersion {
            found: version,
            supported: CURRENT_SCHEMA_VERSION,
        });
    }

    while version < CURRENT_SCHEMA_VERSION {
        value = match version {
            0 => migrate_v0_to_v1(value),
            _ => unreachable!("no migration registered for schema version {}", version),
        };
        version += 1;
    }

    Ok(value)
}

// v0 and v1 share a shape; v1 only stamps the version.
fn migrate_v0_to_v1(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        obj.insert(SCHEMA_VERSION_FIELD.to_string(), Value::from(1u64));
    }
    value
}
