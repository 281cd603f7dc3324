//! MCP tool types

use crate::spec::Identified;
use serde::{Deserialize, Serialize};

/// An MCP tool the agent can call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpTool {
    /// Caller-supplied identifier
    pub id: String,

    /// Tool name
    pub name: String,

    /// Tool description
    pub description: String,

    /// MCP server or vendor providing the tool
    pub provider: String,

    /// Whether the tool is active
    pub enabled: bool,
}

impl McpTool {
    /// Create an enabled tool
    pub fn new(id: impl Into<String>, name: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            provider: provider.into(),
            enabled: true,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Identified for McpTool {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Partial update for [`McpTool`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct McpToolPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub provider: Option<String>,
    pub enabled: Option<bool>,
}

impl McpToolPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn apply_to(self, tool: &mut McpTool) {
        if let Some(id) = self.id {
            tool.id = id;
        }
        if let Some(name) = self.name {
            tool.name = name;
        }
        if let Some(description) = self.description {
            tool.description = description;
        }
        if let Some(provider) = self.provider {
            tool.provider = provider;
        }
        if let Some(enabled) = self.enabled {
            tool.enabled = enabled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tool_is_enabled() {
        let tool = McpTool::new("t1", "read_file", "filesystem");
        assert_eq!(tool.name, "read_file");
        assert_eq!(tool.provider, "filesystem");
        assert!(tool.enabled);
    }

    #[test]
    fn test_tool_serializes_camel_case_fields() {
        let tool = McpTool::new("t1", "read_file", "filesystem").with_description("Reads files");
        let json = serde_json::to_value(&tool).unwrap();
        assert_eq!(json["provider"], "filesystem");
        assert_eq!(json["description"], "Reads files");
        assert_eq!(json["enabled"], true);
    }

    #[test]
    fn test_tool_patch() {
        let mut tool = McpTool::new("t1", "read_file", "filesystem");
        McpToolPatch::new().provider("fs-v2").enabled(false).apply_to(&mut tool);
        assert_eq!(tool.provider, "fs-v2");
        assert!(!tool.enabled);
        assert_eq!(tool.name, "read_file");
    }
}
