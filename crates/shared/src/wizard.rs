//! Wizard navigation and per-phase UI state

use crate::error::InvalidPhaseError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of discovery sections in phase 1
pub const SECTION_COUNT: u8 = 7;

/// Number of workflow steps in phase 3
pub const STEP_COUNT: u8 = 7;

/// Discovery sections, numbered from 1
pub const DISCOVERY_SECTIONS: [&str; SECTION_COUNT as usize] = [
    "Identity",
    "Memory",
    "Skills",
    "MCP Tools",
    "Connections",
    "Guardrails",
    "Review",
];

/// Configuration workflow steps, numbered from 1
pub const WORKFLOW_STEPS: [&str; STEP_COUNT as usize] = [
    "Identity",
    "Memory Types",
    "Skills",
    "MCP Tools",
    "Connections",
    "Memory Config",
    "Guardrails",
];

/// Name of a 1-based discovery section
pub fn section_name(section: u8) -> Option<&'static str> {
    section
        .checked_sub(1)
        .and_then(|i| DISCOVERY_SECTIONS.get(i as usize))
        .copied()
}

/// Name of a 1-based workflow step
pub fn step_name(step: u8) -> Option<&'static str> {
    step.checked_sub(1)
        .and_then(|i| WORKFLOW_STEPS.get(i as usize))
        .copied()
}

/// Top-level wizard screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Phase {
    #[default]
    Discovery = 1,
    Diagram = 2,
    Configuration = 3,
}

impl Phase {
    pub fn all() -> &'static [Phase] {
        &[Phase::Discovery, Phase::Diagram, Phase::Configuration]
    }

    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Short label used in the phase switcher
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Discovery => "Discovery",
            Phase::Diagram => "Diagram",
            Phase::Configuration => "Config",
        }
    }

    /// Following phase, staying on the last one
    pub fn next(&self) -> Phase {
        match self {
            Phase::Discovery => Phase::Diagram,
            Phase::Diagram | Phase::Configuration => Phase::Configuration,
        }
    }

    /// Preceding phase, staying on the first one
    pub fn prev(&self) -> Phase {
        match self {
            Phase::Discovery | Phase::Diagram => Phase::Discovery,
            Phase::Configuration => Phase::Diagram,
        }
    }
}

impl TryFrom<u8> for Phase {
    type Error = InvalidPhaseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Phase::Discovery),
            2 => Ok(Phase::Diagram),
            3 => Ok(Phase::Configuration),
            _ => Err(InvalidPhaseError { value }),
        }
    }
}

impl From<Phase> for u8 {
    fn from(phase: Phase) -> Self {
        phase.number()
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    Bot,
    User,
}

/// Quick-reply button attached to a bot message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickOption {
    pub id: String,
    pub label: String,
    pub value: String,
}

/// One entry of the discovery transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Caller-supplied identifier
    pub id: String,

    pub role: ChatRole,

    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<QuickOption>>,

    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Bot message stamped now
    pub fn bot(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(id, ChatRole::Bot, content)
    }

    /// User message stamped now
    pub fn user(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(id, ChatRole::User, content)
    }

    fn new(id: impl Into<String>, role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role,
            content: content.into(),
            options: None,
            timestamp: Utc::now(),
        }
    }

    /// Builder: attach quick replies
    pub fn with_options(mut self, options: Vec<QuickOption>) -> Self {
        self.options = Some(options);
        self
    }

    /// Builder: override timestamp
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Opening message of a fresh discovery chat
pub const GREETING: &str = "Hi! I'm here to help you build your AI agent. Let's start by defining your agent's identity. What would you like to name your agent?";

/// Phase 1: chat-style discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase1State {
    /// Current discovery section (1..=7)
    pub current_section: u8,
    pub messages: Vec<ChatMessage>,
    pub is_complete: bool,
}

impl Default for Phase1State {
    fn default() -> Self {
        Self {
            current_section: 1,
            messages: vec![ChatMessage::bot("1", GREETING)],
            is_complete: false,
        }
    }
}

/// Phase 2: architecture diagram
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase2State {
    pub selected_node: Option<String>,
}

/// Phase 3: configuration dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase3State {
    /// Current workflow step (1..=7)
    pub current_step: u8,
    pub expanded_card: Option<String>,
}

impl Default for Phase3State {
    fn default() -> Self {
        // The dashboard opens on memory configuration
        Self {
            current_step: 6,
            expanded_card: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============== Phase Tests ==============

    #[test]
    fn test_phase_navigation_clamps() {
        assert_eq!(Phase::Discovery.next(), Phase::Diagram);
        assert_eq!(Phase::Configuration.next(), Phase::Configuration);
        assert_eq!(Phase::Discovery.prev(), Phase::Discovery);
        assert_eq!(Phase::Configuration.prev(), Phase::Diagram);
    }

    #[test]
    fn test_phase_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Phase::Diagram).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Phase>("3").unwrap(), Phase::Configuration);
    }

    #[test]
    fn test_phase_rejects_out_of_range() {
        assert!(serde_json::from_str::<Phase>("0").is_err());
        assert!(serde_json::from_str::<Phase>("4").is_err());
        assert_eq!(Phase::try_from(9), Err(InvalidPhaseError { value: 9 }));
    }

    // ============== Catalog Tests ==============

    #[test]
    fn test_section_and_step_names() {
        assert_eq!(section_name(1), Some("Identity"));
        assert_eq!(section_name(7), Some("Review"));
        assert_eq!(section_name(0), None);
        assert_eq!(section_name(8), None);
        assert_eq!(step_name(6), Some("Memory Config"));
    }

    // ============== Phase State Tests ==============

    #[test]
    fn test_phase1_default_has_greeting() {
        let state = Phase1State::default();
        assert_eq!(state.current_section, 1);
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].id, "1");
        assert_eq!(state.messages[0].role, ChatRole::Bot);
        assert!(!state.is_complete);
    }

    #[test]
    fn test_phase3_default_step() {
        let state = Phase3State::default();
        assert_eq!(state.current_step, 6);
        assert!(state.expanded_card.is_none());
    }

    #[test]
    fn test_chat_message_wire_format() {
        let msg = ChatMessage::user("m1", "Scout");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "user");
        assert!(json.get("options").is_none());
        assert!(json["timestamp"].is_string());

        let back: ChatMessage = serde_json::from_value(json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_phase2_null_selection_round_trip() {
        let json = serde_json::to_string(&Phase2State::default()).unwrap();
        assert_eq!(json, r#"{"selectedNode":null}"#);
    }
}
