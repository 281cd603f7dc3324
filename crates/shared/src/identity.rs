//! Agent identity types

use serde::{Deserialize, Serialize};

/// Conversational persona of the agent being built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Persona {
    #[default]
    Friendly,
    Professional,
    Technical,
    Creative,
}

impl Persona {
    /// All personas in display order
    pub fn all() -> &'static [Persona] {
        &[
            Persona::Friendly,
            Persona::Professional,
            Persona::Technical,
            Persona::Creative,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Friendly => "Friendly",
            Persona::Professional => "Professional",
            Persona::Technical => "Technical",
            Persona::Creative => "Creative",
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Persona {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Persona::all()
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown persona '{}'", s))
    }
}

/// Who the agent is and what it is for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentIdentity {
    /// Display name (empty until the user picks one)
    pub name: String,

    /// Conversational persona
    pub persona: Persona,

    /// What the agent is meant to achieve
    pub objective: String,

    /// Optional icon identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Partial update for [`AgentIdentity`]. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityPatch {
    pub name: Option<String>,
    pub persona: Option<Persona>,
    pub objective: Option<String>,
    /// `Some(None)` clears the icon
    pub icon: Option<Option<String>>,
}

impl IdentityPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: set persona
    pub fn persona(mut self, persona: Persona) -> Self {
        self.persona = Some(persona);
        self
    }

    /// Builder: set objective
    pub fn objective(mut self, objective: impl Into<String>) -> Self {
        self.objective = Some(objective.into());
        self
    }

    /// Builder: set icon
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(Some(icon.into()));
        self
    }

    /// Builder: clear icon
    pub fn clear_icon(mut self) -> Self {
        self.icon = Some(None);
        self
    }

    /// Merge this patch into an identity
    pub fn apply_to(self, identity: &mut AgentIdentity) {
        if let Some(name) = self.name {
            identity.name = name;
        }
        if let Some(persona) = self.persona {
            identity.persona = persona;
        }
        if let Some(objective) = self.objective {
            identity.objective = objective;
        }
        if let Some(icon) = self.icon {
            identity.icon = icon;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============== Persona Tests ==============

    #[test]
    fn test_persona_default_is_friendly() {
        assert_eq!(Persona::default(), Persona::Friendly);
    }

    #[test]
    fn test_persona_from_str_is_case_insensitive() {
        assert_eq!("technical".parse::<Persona>().unwrap(), Persona::Technical);
        assert_eq!(" Creative ".parse::<Persona>().unwrap(), Persona::Creative);
        assert!("grumpy".parse::<Persona>().is_err());
    }

    #[test]
    fn test_persona_serializes_as_title_case() {
        let json = serde_json::to_string(&Persona::Professional).unwrap();
        assert_eq!(json, "\"Professional\"");
    }

    // ============== Patch Tests ==============

    #[test]
    fn test_patch_merges_only_present_fields() {
        let mut identity = AgentIdentity {
            name: "Old".to_string(),
            persona: Persona::Technical,
            objective: "Keep me".to_string(),
            icon: Some("bot".to_string()),
        };

        IdentityPatch::new().name("Scout").apply_to(&mut identity);

        assert_eq!(identity.name, "Scout");
        assert_eq!(identity.persona, Persona::Technical);
        assert_eq!(identity.objective, "Keep me");
        assert_eq!(identity.icon.as_deref(), Some("bot"));
    }

    #[test]
    fn test_patch_can_clear_icon() {
        let mut identity = AgentIdentity {
            icon: Some("bot".to_string()),
            ..Default::default()
        };

        IdentityPatch::new().clear_icon().apply_to(&mut identity);
        assert!(identity.icon.is_none());
    }

    #[test]
    fn test_identity_omits_missing_icon() {
        let json = serde_json::to_value(AgentIdentity::default()).unwrap();
        assert!(json.get("icon").is_none());
        assert_eq!(json["persona"], "Friendly");
    }
}
