//! ArchitectureDiagram - Phase 2 view of a specification
//!
//! A central agent node with one component node per specification section,
//! each carrying a live count.

use shared::{AgentSpecification, Phase2State};

/// Component node on the architecture diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramNodeKind {
    Memory,
    Skills,
    Mcp,
    A2a,
    Guardrails,
}

impl DiagramNodeKind {
    pub fn all() -> &'static [DiagramNodeKind] {
        &[
            DiagramNodeKind::Memory,
            DiagramNodeKind::Skills,
            DiagramNodeKind::Mcp,
            DiagramNodeKind::A2a,
            DiagramNodeKind::Guardrails,
        ]
    }

    /// Id stored in `phase2.selectedNode`
    pub fn id(&self) -> &'static str {
        match self {
            DiagramNodeKind::Memory => "memory",
            DiagramNodeKind::Skills => "skills",
            DiagramNodeKind::Mcp => "mcp",
            DiagramNodeKind::A2a => "a2a",
            DiagramNodeKind::Guardrails => "guardrails",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiagramNodeKind::Memory => "Memory Systems",
            DiagramNodeKind::Skills => "Skills",
            DiagramNodeKind::Mcp => "MCP Tools",
            DiagramNodeKind::A2a => "A2A Connections",
            DiagramNodeKind::Guardrails => "Guardrails",
        }
    }

    pub fn from_id(id: &str) -> Option<DiagramNodeKind> {
        DiagramNodeKind::all().iter().copied().find(|k| k.id() == id)
    }

    fn count_in(&self, spec: &AgentSpecification) -> usize {
        match self {
            DiagramNodeKind::Memory => spec.memory.enabled_kinds().len(),
            DiagramNodeKind::Skills => spec.skills.len(),
            DiagramNodeKind::Mcp => spec.mcp_tools.len(),
            DiagramNodeKind::A2a => spec.a2a_connections.len(),
            DiagramNodeKind::Guardrails => spec.guardrails.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramNode {
    pub kind: DiagramNodeKind,
    pub count: usize,
}

impl DiagramNode {
    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Snapshot of the diagram for one specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchitectureDiagram {
    pub agent_label: String,
    pub nodes: Vec<DiagramNode>,
}

impl ArchitectureDiagram {
    pub fn from_spec(spec: &AgentSpecification) -> Self {
        Self {
            agent_label: spec.display_name().to_string(),
            nodes: DiagramNodeKind::all()
                .iter()
                .map(|kind| DiagramNode {
                    kind: *kind,
                    count: kind.count_in(spec),
                })
                .collect(),
        }
    }

    pub fn node(&self, id: &str) -> Option<&DiagramNode> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    /// The node currently selected in phase 2, if it is a known node
    pub fn selected<'a>(&'a self, phase2: &Phase2State) -> Option<&'a DiagramNode> {
        phase2.selected_node.as_deref().and_then(|id| self.node(id))
    }

    /// Edges from the agent to each component, as (from, to) ids
    pub fn edges(&self) -> Vec<(&'static str, &'static str)> {
        self.nodes.iter().map(|n| ("agent", n.id())).collect()
    }
}
