//! Text renderings of the three wizard screens
//!
//! Screens only read the state they are given; all changes go through the
//! store's mutators.

use console::style;
use shared::{
    section_name, ChatRole, MemoryKind, Phase, DISCOVERY_SECTIONS, SECTION_COUNT, STEP_COUNT,
    WORKFLOW_STEPS,
};
use std::fmt::Write;
use store::{ArchitectureDiagram, BuilderState};

/// Retention shown for an enabled memory kind with no explicit value
pub const DEFAULT_RETENTION_DAYS: u32 = 30;

/// Max entries shown for an enabled memory kind with no explicit value
pub const DEFAULT_MAX_ENTRIES: u32 = 1000;

/// Render the screen for the current phase
pub fn render(state: &BuilderState) -> String {
    let mut out = phase_nav(state.current_phase);
    out.push('\n');
    out.push_str(&match state.current_phase {
        Phase::Discovery => discovery_screen(state),
        Phase::Diagram => diagram_screen(state),
        Phase::Configuration => config_screen(state),
    });
    out
}

/// Phase switcher line with the active phase highlighted
pub fn phase_nav(current: Phase) -> String {
    Phase::all()
        .iter()
        .map(|phase| {
            let label = format!("{} {}", phase.number(), phase.label());
            if *phase == current {
                style(format!("[{}]", label)).cyan().bold().to_string()
            } else {
                format!(" {} ", label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Phase 1: section progress, transcript and live spec preview
pub fn discovery_screen(state: &BuilderState) -> String {
    let phase1 = &state.phase1;
    let spec = &state.agent_spec;
    let mut out = String::new();

    let section = phase1.current_section;
    let percent = section.min(SECTION_COUNT) as u32 * 100 / SECTION_COUNT as u32;
    let _ = writeln!(
        out,
        "{}  Step {} of {} ({}%)",
        style("Agent Builder").bold(),
        section,
        SECTION_COUNT,
        percent
    );

    for (i, name) in DISCOVERY_SECTIONS.iter().enumerate() {
        let marker = if i + 1 == section as usize { ">" } else { " " };
        let _ = writeln!(out, " {} {}", marker, name);
    }

    let _ = writeln!(out, "\n{}", style("Let's configure your agent's specifications").bold());
    for message in &phase1.messages {
        match message.role {
            ChatRole::Bot => {
                let _ = writeln!(out, "  {} {}", style("bot:").green(), message.content);
            }
            ChatRole::User => {
                let _ = writeln!(out, "  {} {}", style("you:").blue(), message.content);
            }
        }
        if let Some(options) = &message.options {
            let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
            let _ = writeln!(out, "       [{}]", labels.join("] ["));
        }
    }
    if phase1.is_complete {
        let _ = writeln!(out, "  {}", style("Discovery complete").green());
    }

    let _ = writeln!(out, "\n{}", style("Agent Specification").bold());
    let name = if spec.identity.name.is_empty() {
        "Not set"
    } else {
        spec.identity.name.as_str()
    };
    let _ = writeln!(out, "  Name: {}", name);
    let _ = writeln!(out, "  Persona: {}", spec.identity.persona);
    for (kind, settings) in spec.memory.iter() {
        let status = if settings.enabled { "Enabled" } else { "Disabled" };
        let _ = writeln!(out, "  {}: {}", kind, status);
    }
    out
}

/// Phase 2: component nodes with counts and the selection details
pub fn diagram_screen(state: &BuilderState) -> String {
    let spec = &state.agent_spec;
    let diagram = ArchitectureDiagram::from_spec(spec);
    let mut out = String::new();

    let _ = writeln!(out, "{}", style("Agent Architecture Diagram").bold());
    let _ = writeln!(out, "  [{}] ({})", diagram.agent_label, spec.identity.persona);
    for (i, node) in diagram.nodes.iter().enumerate() {
        let branch = if i + 1 == diagram.nodes.len() { "└─" } else { "├─" };
        let selected = state.phase2.selected_node.as_deref() == Some(node.id());
        let line = format!("{} {} ({}) <{}>", branch, node.label(), node.count, node.id());
        if selected {
            let _ = writeln!(out, "   {}", style(line).cyan().bold());
        } else {
            let _ = writeln!(out, "   {}", line);
        }
    }

    let _ = writeln!(out, "\n{}", style("Component Details").bold());
    match diagram.selected(&state.phase2) {
        Some(node) => {
            let _ = writeln!(out, "  Selected: {}", node.label());
            let _ = writeln!(out, "  Entries: {}", node.count);
        }
        None => {
            let _ = writeln!(out, "  Select a node with /select <id> to view details");
        }
    }
    out
}

/// Phase 3: workflow steps, memory cards and agent summary
pub fn config_screen(state: &BuilderState) -> String {
    let spec = &state.agent_spec;
    let step = state.phase3.current_step;
    let mut out = String::new();

    let completed = step.saturating_sub(1).min(STEP_COUNT) as u32;
    let _ = writeln!(
        out,
        "Step {} of {}  {}% complete",
        step,
        STEP_COUNT,
        completed * 100 / STEP_COUNT as u32
    );
    for (i, name) in WORKFLOW_STEPS.iter().enumerate() {
        let id = i as u8 + 1;
        let mark = if id < step { "✓" } else { "○" };
        if id == step {
            let _ = writeln!(out, " {} {}", mark, style(name).cyan().bold());
        } else {
            let _ = writeln!(out, " {} {}", mark, name);
        }
    }

    let _ = writeln!(
        out,
        "\nConfigure how your agent remembers and recalls information across different contexts."
    );
    for kind in MemoryKind::all() {
        let settings = spec.memory.get(*kind);
        let expanded = state.phase3.expanded_card.as_deref() == Some(kind.as_str());
        let toggle = if settings.enabled { "[on] " } else { "[off]" };
        let _ = writeln!(out, "  {} {} <{}>", toggle, style(kind.title()).bold(), kind);
        let _ = writeln!(out, "        {}", kind.dashboard_description());
        if settings.enabled || expanded {
            let retention = settings
                .retention_days
                .map(|d| d.get())
                .unwrap_or(DEFAULT_RETENTION_DAYS);
            let entries = settings
                .max_entries
                .map(|e| e.get())
                .unwrap_or(DEFAULT_MAX_ENTRIES);
            let _ = writeln!(out, "        Retention Days: {}", retention);
            let _ = writeln!(out, "        Max Entries: {}", entries);
        }
    }

    let _ = writeln!(out, "\n{}", style(spec.display_name()).bold());
    let _ = writeln!(out, "  PERSONA: {}", spec.identity.persona);
    let objective = if spec.identity.objective.is_empty() {
        "Not set"
    } else {
        spec.identity.objective.as_str()
    };
    let _ = writeln!(out, "  OBJECTIVE: {}", objective);
    let enabled: Vec<&str> = spec.memory.enabled_kinds().iter().map(|k| k.as_str()).collect();
    let _ = writeln!(
        out,
        "  MEMORY TYPES: {}",
        if enabled.is_empty() { "none".to_string() } else { enabled.join(", ") }
    );
    let _ = writeln!(
        out,
        "  SKILLS: {}  TOOLS: {}  CONNECTIONS: {}",
        spec.skills.len(),
        spec.mcp_tools.len(),
        spec.a2a_connections.len()
    );
    let _ = writeln!(out, "  GUARDRAILS:");
    if spec.guardrails.is_empty() {
        let _ = writeln!(out, "    (none)");
    }
    for rail in &spec.guardrails {
        let mark = if rail.enabled { "✓" } else { "✗" };
        let _ = writeln!(out, "    {} {} ({})", mark, rail.name, rail.rule_type.as_str());
    }
    out
}

/// One-line status used by the REPL prompt
pub fn prompt_label(state: &BuilderState) -> String {
    match state.current_phase {
        Phase::Discovery => format!(
            "discovery:{}",
            section_name(state.phase1.current_section).unwrap_or("?")
        ),
        Phase::Diagram => "diagram".to_string(),
        Phase::Configuration => format!("config:{}", state.phase3.current_step),
    }
}
