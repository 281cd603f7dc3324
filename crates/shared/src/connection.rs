//! Agent-to-agent connection types

use crate::spec::Identified;
use serde::{Deserialize, Serialize};

/// Direction of an A2A link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    #[default]
    Bidirectional,
    Unidirectional,
}

impl std::str::FromStr for ConnectionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bidirectional" | "bi" => Ok(ConnectionType::Bidirectional),
            "unidirectional" | "uni" => Ok(ConnectionType::Unidirectional),
            other => Err(format!("Unknown connection type '{}'", other)),
        }
    }
}

/// A link to another agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConnection {
    /// Caller-supplied identifier
    pub id: String,

    /// Name of the peer agent
    pub agent_name: String,

    pub connection_type: ConnectionType,

    pub description: String,
}

impl AgentConnection {
    pub fn new(
        id: impl Into<String>,
        agent_name: impl Into<String>,
        connection_type: ConnectionType,
    ) -> Self {
        Self {
            id: id.into(),
            agent_name: agent_name.into(),
            connection_type,
            description: String::new(),
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Identified for AgentConnection {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_type_wire_format() {
        let conn = AgentConnection::new("c1", "researcher", ConnectionType::Unidirectional);
        let json = serde_json::to_value(&conn).unwrap();
        assert_eq!(json["connectionType"], "unidirectional");
        assert_eq!(json["agentName"], "researcher");
    }

    #[test]
    fn test_connection_type_parse() {
        assert_eq!("uni".parse::<ConnectionType>().unwrap(), ConnectionType::Unidirectional);
        assert_eq!("Bidirectional".parse::<ConnectionType>().unwrap(), ConnectionType::Bidirectional);
        assert!("sideways".parse::<ConnectionType>().is_err());
    }
}
