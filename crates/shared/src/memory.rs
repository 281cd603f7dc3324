//! Memory configuration types
//!
//! The memory section of a specification always holds exactly five kinds.
//! They are modelled as struct fields rather than a map so that no kind can be
//! added or dropped.

use crate::error::InvalidMemoryKindError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// One of the five fixed categories of agent memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MemoryKind {
    ShortTerm,
    Episodic,
    Procedural,
    Semantic,
    Policy,
}

impl MemoryKind {
    /// All kinds in canonical order
    pub fn all() -> &'static [MemoryKind] {
        &[
            MemoryKind::ShortTerm,
            MemoryKind::Episodic,
            MemoryKind::Procedural,
            MemoryKind::Semantic,
            MemoryKind::Policy,
        ]
    }

    /// Wire name (matches the JSON key)
    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryKind::ShortTerm => "shortTerm",
            MemoryKind::Episodic => "episodic",
            MemoryKind::Procedural => "procedural",
            MemoryKind::Semantic => "semantic",
            MemoryKind::Policy => "policy",
        }
    }

    /// Card title on the configuration dashboard
    pub fn title(&self) -> &'static str {
        match self {
            MemoryKind::ShortTerm => "Short-Term Memory",
            MemoryKind::Episodic => "Episodic Memory",
            MemoryKind::Procedural => "Procedural Memory",
            MemoryKind::Semantic => "Semantic Memory",
            MemoryKind::Policy => "Policy Memory",
        }
    }

    /// Long description shown on the configuration dashboard
    pub fn dashboard_description(&self) -> &'static str {
        match self {
            MemoryKind::ShortTerm => "Stores recent conversation context for immediate reference",
            MemoryKind::Episodic => "Stores specific events and experiences with temporal context",
            MemoryKind::Procedural => "Stores learned procedures, workflows, and action sequences",
            MemoryKind::Semantic => "Stores facts, knowledge, and conceptual information",
            MemoryKind::Policy => "Stores rules, guidelines, and behavioral constraints",
        }
    }

    /// Description stored in a fresh specification
    pub fn default_description(&self) -> &'static str {
        match self {
            MemoryKind::ShortTerm => "Stores recent conversation context",
            MemoryKind::Episodic => "Stores specific events and experiences",
            MemoryKind::Procedural => "Stores learned procedures and workflows",
            MemoryKind::Semantic => "Stores facts and knowledge",
            MemoryKind::Policy => "Stores rules and guidelines",
        }
    }

    fn expected() -> Vec<&'static str> {
        MemoryKind::all().iter().map(|k| k.as_str()).collect()
    }
}

impl std::fmt::Display for MemoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MemoryKind {
    type Err = InvalidMemoryKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MemoryKind::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| InvalidMemoryKindError {
                kind: s.to_string(),
                expected: MemoryKind::expected(),
            })
    }
}

impl TryFrom<&str> for MemoryKind {
    type Error = InvalidMemoryKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Settings for a single memory kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorySettings {
    pub enabled: bool,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_days: Option<NonZeroU32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<NonZeroU32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_store: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_model: Option<String>,
}

impl MemorySettings {
    /// Disabled settings with the kind's default description
    pub fn for_kind(kind: MemoryKind) -> Self {
        Self {
            enabled: false,
            description: kind.default_description().to_string(),
            retention_days: None,
            max_entries: None,
            vector_store: None,
            embedding_model: None,
        }
    }
}

/// The fixed five-kind memory mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryConfiguration {
    pub short_term: MemorySettings,
    pub episodic: MemorySettings,
    pub procedural: MemorySettings,
    pub semantic: MemorySettings,
    pub policy: MemorySettings,
}

impl MemoryConfiguration {
    pub fn get(&self, kind: MemoryKind) -> &MemorySettings {
        match kind {
            MemoryKind::ShortTerm => &self.short_term,
            MemoryKind::Episodic => &self.episodic,
            MemoryKind::Procedural => &self.procedural,
            MemoryKind::Semantic => &self.semantic,
            MemoryKind::Policy => &self.policy,
        }
    }

    pub fn get_mut(&mut self, kind: MemoryKind) -> &mut MemorySettings {
        match kind {
            MemoryKind::ShortTerm => &mut self.short_term,
            MemoryKind::Episodic => &mut self.episodic,
            MemoryKind::Procedural => &mut self.procedural,
            MemoryKind::Semantic => &mut self.semantic,
            MemoryKind::Policy => &mut self.policy,
        }
    }

    /// Iterate kinds with their settings in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (MemoryKind, &MemorySettings)> + '_ {
        MemoryKind::all().iter().map(move |k| (*k, self.get(*k)))
    }

    /// Kinds that are currently enabled
    pub fn enabled_kinds(&self) -> Vec<MemoryKind> {
        self.iter()
            .filter(|(_, settings)| settings.enabled)
            .map(|(kind, _)| kind)
            .collect()
    }
}

impl Default for MemoryConfiguration {
    fn default() -> Self {
        Self {
            short_term: MemorySettings::for_kind(MemoryKind::ShortTerm),
            episodic: MemorySettings::for_kind(MemoryKind::Episodic),
            procedural: MemorySettings::for_kind(MemoryKind::Procedural),
            semantic: MemorySettings::for_kind(MemoryKind::Semantic),
            policy: MemorySettings::for_kind(MemoryKind::Policy),
        }
    }
}

/// Partial update for [`MemorySettings`]. Unset fields are left alone.
///
/// Optional settings use a nested `Option`: `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPatch {
    pub enabled: Option<bool>,
    pub description: Option<String>,
    pub retention_days: Option<Option<NonZeroU32>>,
    pub max_entries: Option<Option<NonZeroU32>>,
    pub vector_store: Option<Option<String>>,
    pub embedding_model: Option<Option<String>>,
}

impl MemoryPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set retention. Zero clears it.
    pub fn retention_days(mut self, days: u32) -> Self {
        self.retention_days = Some(NonZeroU32::new(days));
        self
    }

    /// Builder: set max entries. Zero clears it.
    pub fn max_entries(mut self, entries: u32) -> Self {
        self.max_entries = Some(NonZeroU32::new(entries));
        self
    }

    pub fn vector_store(mut self, store: impl Into<String>) -> Self {
        self.vector_store = Some(Some(store.into()));
        self
    }

    pub fn embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = Some(Some(model.into()));
        self
    }

    /// Merge this patch into settings
    pub fn apply_to(self, settings: &mut MemorySettings) {
        if let Some(enabled) = self.enabled {
            settings.enabled = enabled;
        }
        if let Some(description) = self.description {
            settings.description = description;
        }
        if let Some(retention_days) = self.retention_days {
            settings.retention_days = retention_days;
        }
        if let Some(max_entries) = self.max_entries {
            settings.max_entries = max_entries;
        }
        if let Some(vector_store) = self.vector_store {
            settings.vector_store = vector_store;
        }
        if let Some(embedding_model) = self.embedding_model {
            settings.embedding_model = embedding_model;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============== MemoryKind Tests ==============

    #[test]
    fn test_kind_parse_round_trips_wire_name() {
        for kind in MemoryKind::all() {
            assert_eq!(kind.as_str().parse::<MemoryKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_kind_parse_rejects_unknown() {
        let err = "longTerm".parse::<MemoryKind>().unwrap_err();
        assert_eq!(err.kind, "longTerm");
        assert_eq!(err.expected.len(), 5);
    }

    #[test]
    fn test_kind_parse_is_case_sensitive() {
        assert!("ShortTerm".parse::<MemoryKind>().is_err());
        assert!("short_term".parse::<MemoryKind>().is_err());
    }

    // ============== MemoryConfiguration Tests ==============

    #[test]
    fn test_default_configuration_is_all_disabled() {
        let config = MemoryConfiguration::default();
        assert!(config.enabled_kinds().is_empty());
        assert_eq!(config.episodic.description, "Stores specific events and experiences");
        assert_eq!(config.policy.description, "Stores rules and guidelines");
    }

    #[test]
    fn test_configuration_serializes_exactly_five_keys() {
        let json = serde_json::to_value(MemoryConfiguration::default()).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 5);
        for kind in MemoryKind::all() {
            assert!(json.get(kind.as_str()).is_some(), "missing {}", kind);
        }
    }

    #[test]
    fn test_configuration_rejects_missing_kind() {
        let mut json = serde_json::to_value(MemoryConfiguration::default()).unwrap();
        json.as_object_mut().unwrap().remove("semantic");
        assert!(serde_json::from_value::<MemoryConfiguration>(json).is_err());
    }

    #[test]
    fn test_settings_reject_zero_retention() {
        let json = r#"{"enabled": true, "description": "x", "retentionDays": 0}"#;
        assert!(serde_json::from_str::<MemorySettings>(json).is_err());
    }

    // ============== MemoryPatch Tests ==============

    #[test]
    fn test_patch_merges_and_keeps_description() {
        let mut settings = MemorySettings::for_kind(MemoryKind::Episodic);
        MemoryPatch::new()
            .enabled(true)
            .retention_days(14)
            .apply_to(&mut settings);

        assert!(settings.enabled);
        assert_eq!(settings.retention_days, NonZeroU32::new(14));
        assert_eq!(settings.description, MemoryKind::Episodic.default_description());
        assert!(settings.max_entries.is_none());
    }

    #[test]
    fn test_patch_zero_clears_limit() {
        let mut settings = MemorySettings::for_kind(MemoryKind::ShortTerm);
        MemoryPatch::new().max_entries(500).apply_to(&mut settings);
        assert_eq!(settings.max_entries, NonZeroU32::new(500));

        MemoryPatch::new().max_entries(0).apply_to(&mut settings);
        assert!(settings.max_entries.is_none());
    }
}
