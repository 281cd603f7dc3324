//! Guardrail types

use crate::spec::Identified;
use serde::{Deserialize, Serialize};

/// Category of a guardrail rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    Content,
    Behavior,
    Security,
    Compliance,
}

impl RuleType {
    pub fn all() -> &'static [RuleType] {
        &[
            RuleType::Content,
            RuleType::Behavior,
            RuleType::Security,
            RuleType::Compliance,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleType::Content => "content",
            RuleType::Behavior => "behavior",
            RuleType::Security => "security",
            RuleType::Compliance => "compliance",
        }
    }
}

impl std::str::FromStr for RuleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleType::all()
            .iter()
            .copied()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown rule type '{}'", s))
    }
}

/// A rule constraining what the agent may do
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guardrail {
    /// Caller-supplied identifier
    pub id: String,

    pub name: String,

    pub description: String,

    pub rule_type: RuleType,

    pub enabled: bool,
}

impl Guardrail {
    /// Create an enabled guardrail
    pub fn new(id: impl Into<String>, name: impl Into<String>, rule_type: RuleType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            rule_type,
            enabled: true,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Identified for Guardrail {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Partial update for [`Guardrail`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardrailPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub rule_type: Option<RuleType>,
    pub enabled: Option<bool>,
}

impl GuardrailPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule_type(mut self, rule_type: RuleType) -> Self {
        self.rule_type = Some(rule_type);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn apply_to(self, guardrail: &mut Guardrail) {
        if let Some(id) = self.id {
            guardrail.id = id;
        }
        if let Some(name) = self.name {
            guardrail.name = name;
        }
        if let Some(description) = self.description {
            guardrail.description = description;
        }
        if let Some(rule_type) = self.rule_type {
            guardrail.rule_type = rule_type;
        }
        if let Some(enabled) = self.enabled {
            guardrail.enabled = enabled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_type_wire_format() {
        let rail = Guardrail::new("g1", "No PII", RuleType::Compliance);
        let json = serde_json::to_value(&rail).unwrap();
        assert_eq!(json["ruleType"], "compliance");
    }

    #[test]
    fn test_rule_type_parse() {
        assert_eq!("Security".parse::<RuleType>().unwrap(), RuleType::Security);
        assert!("vibes".parse::<RuleType>().is_err());
    }

    #[test]
    fn test_guardrail_patch() {
        let mut rail = Guardrail::new("g1", "No PII", RuleType::Content);
        GuardrailPatch::new()
            .rule_type(RuleType::Security)
            .enabled(false)
            .apply_to(&mut rail);

        assert_eq!(rail.rule_type, RuleType::Security);
        assert!(!rail.enabled);
        assert_eq!(rail.name, "No PII");
    }
}
