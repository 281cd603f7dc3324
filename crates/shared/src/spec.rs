//! The agent specification aggregate

use crate::connection::AgentConnection;
use crate::guardrail::Guardrail;
use crate::identity::AgentIdentity;
use crate::memory::MemoryConfiguration;
use crate::skill::Skill;
use crate::tool::McpTool;
use serde::{Deserialize, Serialize};

/// Entities carrying a caller-supplied string id
pub trait Identified {
    fn id(&self) -> &str;
}

/// Position of the first entity with the given id.
///
/// Ids are not required to be unique; with duplicates only the first match is
/// ever found.
pub fn position_by_id<T: Identified>(items: &[T], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// Everything collected about the agent being built
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSpecification {
    pub identity: AgentIdentity,
    pub memory: MemoryConfiguration,
    pub skills: Vec<Skill>,
    pub mcp_tools: Vec<McpTool>,
    pub a2a_connections: Vec<AgentConnection>,
    pub guardrails: Vec<Guardrail>,
}

impl AgentSpecification {
    /// Display name, falling back to a placeholder while unnamed
    pub fn display_name(&self) -> &str {
        if self.identity.name.trim().is_empty() {
            "My Agent"
        } else {
            &self.identity.name
        }
    }
}

/// Wholesale replacement of top-level sections. Absent sections are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecPatch {
    pub identity: Option<AgentIdentity>,
    pub memory: Option<MemoryConfiguration>,
    pub skills: Option<Vec<Skill>>,
    pub mcp_tools: Option<Vec<McpTool>>,
    pub a2a_connections: Option<Vec<AgentConnection>>,
    pub guardrails: Option<Vec<Guardrail>>,
}

impl SpecPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity(mut self, identity: AgentIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn memory(mut self, memory: MemoryConfiguration) -> Self {
        self.memory = Some(memory);
        self
    }

    pub fn skills(mut self, skills: Vec<Skill>) -> Self {
        self.skills = Some(skills);
        self
    }

    pub fn mcp_tools(mut self, tools: Vec<McpTool>) -> Self {
        self.mcp_tools = Some(tools);
        self
    }

    pub fn a2a_connections(mut self, connections: Vec<AgentConnection>) -> Self {
        self.a2a_connections = Some(connections);
        self
    }

    pub fn guardrails(mut self, guardrails: Vec<Guardrail>) -> Self {
        self.guardrails = Some(guardrails);
        self
    }

    pub fn apply_to(self, spec: &mut AgentSpecification) {
        if let Some(identity) = self.identity {
            spec.identity = identity;
        }
        if let Some(memory) = self.memory {
            spec.memory = memory;
        }
        if let Some(skills) = self.skills {
            spec.skills = skills;
        }
        if let Some(mcp_tools) = self.mcp_tools {
            spec.mcp_tools = mcp_tools;
        }
        if let Some(a2a_connections) = self.a2a_connections {
            spec.a2a_connections = a2a_connections;
        }
        if let Some(guardrails) = self.guardrails {
            spec.guardrails = guardrails;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guardrail::RuleType;

    #[test]
    fn test_default_spec_shape() {
        let json = serde_json::to_value(AgentSpecification::default()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();

        assert_eq!(
            keys,
            vec!["identity", "memory", "skills", "mcpTools", "a2aConnections", "guardrails"]
        );
        assert_eq!(json["identity"]["name"], "");
        assert_eq!(json["skills"], serde_json::json!([]));
    }

    #[test]
    fn test_display_name_fallback() {
        let mut spec = AgentSpecification::default();
        assert_eq!(spec.display_name(), "My Agent");

        spec.identity.name = "Scout".to_string();
        assert_eq!(spec.display_name(), "Scout");
    }

    #[test]
    fn test_position_by_id_returns_first_duplicate() {
        let skills = vec![
            Skill::new("dup", "First"),
            Skill::new("other", "Other"),
            Skill::new("dup", "Second"),
        ];

        assert_eq!(position_by_id(&skills, "dup"), Some(0));
        assert_eq!(position_by_id(&skills, "missing"), None);
    }

    #[test]
    fn test_spec_patch_replaces_only_given_sections() {
        let mut spec = AgentSpecification::default();
        spec.skills.push(Skill::new("s1", "Search"));

        SpecPatch::new()
            .guardrails(vec![Guardrail::new("g1", "No PII", RuleType::Compliance)])
            .apply_to(&mut spec);

        assert_eq!(spec.skills.len(), 1);
        assert_eq!(spec.guardrails.len(), 1);
    }
}
