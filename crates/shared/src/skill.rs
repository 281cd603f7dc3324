//! Skill types

use crate::spec::Identified;
use serde::{Deserialize, Serialize};

/// A capability the agent should have
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Caller-supplied identifier
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// What the skill enables
    pub description: String,

    /// Whether the skill is active
    pub enabled: bool,
}

impl Skill {
    /// Create an enabled skill with an empty description
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            enabled: true,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: set enabled flag
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Identified for Skill {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Partial update for [`Skill`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub enabled: Option<bool>,
}

impl SkillPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn apply_to(self, skill: &mut Skill) {
        if let Some(id) = self.id {
            skill.id = id;
        }
        if let Some(name) = self.name {
            skill.name = name;
        }
        if let Some(description) = self.description {
            skill.description = description;
        }
        if let Some(enabled) = self.enabled {
            skill.enabled = enabled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_builder() {
        let skill = Skill::new("search", "Web Search")
            .with_description("Looks things up")
            .with_enabled(false);

        assert_eq!(skill.id, "search");
        assert_eq!(skill.description, "Looks things up");
        assert!(!skill.enabled);
    }

    #[test]
    fn test_skill_patch_keeps_untouched_fields() {
        let mut skill = Skill::new("search", "Web Search").with_description("Looks things up");
        SkillPatch::new().enabled(false).apply_to(&mut skill);

        assert_eq!(skill.name, "Web Search");
        assert_eq!(skill.description, "Looks things up");
        assert!(!skill.enabled);
    }

    #[test]
    fn test_skill_deserialization() {
        let json = r#"{"id": "s1", "name": "Summarize", "description": "", "enabled": true}"#;
        let skill: Skill = serde_json::from_str(json).unwrap();
        assert_eq!(skill.id(), "s1");
        assert!(skill.enabled);
    }
}
