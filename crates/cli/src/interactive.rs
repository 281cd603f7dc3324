//! Interactive REPL mode

use crate::commands::{ExportFormat, PhaseTarget};
use crate::{commands, screens};
use anyhow::{anyhow, bail, Context};
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use shared::{
    AgentConnection, ConnectionType, Guardrail, GuardrailPatch, IdentityPatch, McpTool,
    McpToolPatch, MemoryKind, MemoryPatch, Persona, RuleType, Skill, SkillPatch, STEP_COUNT,
};
use std::io::{self, BufRead, Write};
use store::{AgentSpecStore, DiagramNodeKind, DiscoveryChat, SlotStorage};
use tracing::warn;
use uuid::Uuid;

/// Interactive wizard session over one store
pub struct InteractiveCli<S: SlotStorage> {
    store: AgentSpecStore<S>,
    autosave: bool,
}

impl<S: SlotStorage> InteractiveCli<S> {
    pub fn new(store: AgentSpecStore<S>, autosave: bool) -> Self {
        Self { store, autosave }
    }

    pub fn store(&self) -> &AgentSpecStore<S> {
        &self.store
    }

    /// Run the interactive REPL on stdin
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.run_with(io::stdin().lock());
        Ok(())
    }

    /// Run the REPL over any line source. Input errors end the session,
    /// and autosave still happens.
    pub fn run_with<R: BufRead>(&mut self, mut reader: R) {
        println!("Agent Builder Interactive Mode");
        println!("Type /help for commands, /quit to exit");
        println!();
        print!("{}", screens::render(self.store.state()));

        loop {
            print!("\n[{}] > ", screens::prompt_label(self.store.state()));
            if let Err(e) = io::stdout().flush() {
                warn!(error = %e, "Could not flush prompt");
            }

            let mut input = String::new();
            match reader.read_line(&mut input) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    eprintln!("{} Could not read input: {}", style("Error:").red(), e);
                    break;
                }
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            match self.handle_input(input) {
                Ok(true) => break,
                Ok(false) => print!("{}", screens::render(self.store.state())),
                Err(e) => println!("{} {}", style("Error:").red(), e),
            }
        }

        self.finish();
    }

    /// Save on exit when autosave is on. A failed write is reported only.
    fn finish(&mut self) {
        if !self.autosave {
            return;
        }
        match self.store.save_to_slot() {
            Ok(()) => println!("Saved to slot '{}'", self.store.slot_key()),
            Err(e) => eprintln!("Could not save state: {}", e),
        }
    }

    /// Dispatch one line. Returns true when the session should end.
    pub fn handle_input(&mut self, input: &str) -> anyhow::Result<bool> {
        if input.starts_with('/') {
            return self.handle_command(input);
        }

        if self.store.current_phase() != shared::Phase::Discovery {
            println!("Free text is only used during discovery. Type /help for commands.");
            return Ok(false);
        }
        let mut chat = DiscoveryChat::new(&mut self.store);
        if let Some(exchange) = chat.send(input) {
            if exchange.named_agent {
                println!("Agent named '{}'", input.trim());
            }
        }
        Ok(false)
    }

    fn handle_command(&mut self, input: &str) -> anyhow::Result<bool> {
        let (cmd, rest) = match input.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };
        let args: Vec<&str> = rest.split_whitespace().collect();

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Goodbye!");
                return Ok(true);
            }
            "/help" | "/h" => print_help(),
            "/next" => self.store.next_phase(),
            "/prev" => self.store.prev_phase(),
            "/phase" => {
                let target: PhaseTarget = required(&args, 0, "/phase <1|2|3|next|prev>")?
                    .parse()
                    .map_err(|e: String| anyhow!(e))?;
                target.apply(&mut self.store);
            }
            "/section" => {
                let arg = required(&args, 0, "/section <1-7|next>")?;
                if arg == "next" {
                    DiscoveryChat::new(&mut self.store).advance_section();
                } else {
                    let section = parse_in_range(arg, shared::SECTION_COUNT, "section")?;
                    self.store.set_current_section(section);
                }
            }
            "/select" => {
                let arg = required(&args, 0, "/select <memory|skills|mcp|a2a|guardrails|none>")?;
                if arg == "none" {
                    self.store.select_node(None);
                } else {
                    let kind = DiagramNodeKind::from_id(arg)
                        .ok_or_else(|| anyhow!("Unknown node '{}'", arg))?;
                    self.store.select_node(Some(kind.id().to_string()));
                }
            }
            "/step" => {
                let step = parse_in_range(required(&args, 0, "/step <1-7>")?, STEP_COUNT, "step")?;
                self.store.set_current_step(step);
            }
            "/expand" => {
                let arg = required(&args, 0, "/expand <memory kind|none>")?;
                if arg == "none" {
                    self.store.set_expanded_card(None);
                } else {
                    let kind = MemoryKind::try_from(arg)?;
                    self.store.set_expanded_card(Some(kind.as_str().to_string()));
                }
            }
            "/memory" => {
                let usage = "/memory <kind> on|off";
                let kind = required(&args, 0, usage)?;
                let enabled = parse_switch(required(&args, 1, usage)?)?;
                self.store
                    .update_memory_config(kind, MemoryPatch::new().enabled(enabled))?;
            }
            "/retention" => {
                let usage = "/retention <kind> <days>";
                let kind = required(&args, 0, usage)?;
                let days: u32 = required(&args, 1, usage)?
                    .parse()
                    .context("Retention must be a whole number of days")?;
                self.store
                    .update_memory_config(kind, MemoryPatch::new().retention_days(days))?;
            }
            "/persona" => {
                let persona = match args.first() {
                    Some(name) => name.parse::<Persona>().map_err(|e| anyhow!(e))?,
                    None => pick_persona()?,
                };
                self.store
                    .update_identity(IdentityPatch::new().persona(persona));
            }
            "/name" => {
                let name = text_or_prompt(rest, "Agent name")?;
                self.store.update_identity(IdentityPatch::new().name(name));
            }
            "/objective" => {
                let objective = text_or_prompt(rest, "Objective")?;
                self.store
                    .update_identity(IdentityPatch::new().objective(objective));
            }
            "/skill" => self.skill_command(&args, rest)?,
            "/tool" => self.tool_command(&args)?,
            "/connect" => {
                let usage = "/connect <agent> [bi|uni]";
                let agent = required(&args, 0, usage)?;
                let connection_type = match args.get(1) {
                    Some(t) => t.parse::<ConnectionType>().map_err(|e| anyhow!(e))?,
                    None => ConnectionType::default(),
                };
                self.store
                    .add_a2a_connection(AgentConnection::new(new_id(), agent, connection_type));
            }
            "/guardrail" => self.guardrail_command(&args)?,
            "/export" => {
                let format = match args.first() {
                    Some(&"yaml") | Some(&"yml") => ExportFormat::Yaml,
                    Some(&"json") | None => ExportFormat::Json,
                    Some(other) => bail!("Unknown export format '{}'", other),
                };
                println!("{}", commands::export::render(&self.store, format)?);
            }
            "/save" => {
                self.store.save_to_slot()?;
                println!("Saved to slot '{}'", self.store.slot_key());
            }
            _ => {
                println!("Unknown command: {}", cmd);
            }
        }

        Ok(false)
    }

    fn skill_command(&mut self, args: &[&str], rest: &str) -> anyhow::Result<()> {
        match args.first() {
            Some(&"on") | Some(&"off") => {
                let enabled = args[0] == "on";
                let id = required(args, 1, "/skill on|off <id>")?;
                self.store
                    .update_skill(id, SkillPatch::new().enabled(enabled));
            }
            _ => {
                let name = text_or_prompt(rest, "Skill name")?;
                self.store.add_skill(Skill::new(new_id(), name));
            }
        }
        Ok(())
    }

    fn tool_command(&mut self, args: &[&str]) -> anyhow::Result<()> {
        match args.first() {
            Some(&"on") | Some(&"off") => {
                let enabled = args[0] == "on";
                let id = required(args, 1, "/tool on|off <id>")?;
                self.store
                    .update_mcp_tool(id, McpToolPatch::new().enabled(enabled));
            }
            _ => {
                let usage = "/tool <provider> <name>";
                let provider = required(args, 0, usage)?;
                if args.len() < 2 {
                    bail!("Usage: {}", usage);
                }
                let name = args[1..].join(" ");
                self.store
                    .add_mcp_tool(McpTool::new(new_id(), name, provider));
            }
        }
        Ok(())
    }

    fn guardrail_command(&mut self, args: &[&str]) -> anyhow::Result<()> {
        match args.first() {
            Some(&"on") | Some(&"off") => {
                let enabled = args[0] == "on";
                let id = required(args, 1, "/guardrail on|off <id>")?;
                self.store
                    .update_guardrail(id, GuardrailPatch::new().enabled(enabled));
            }
            _ => {
                let usage = "/guardrail <content|behavior|security|compliance> <name>";
                let rule_type = required(args, 0, usage)?
                    .parse::<RuleType>()
                    .map_err(|e| anyhow!(e))?;
                if args.len() < 2 {
                    bail!("Usage: {}", usage);
                }
                let name = args[1..].join(" ");
                self.store
                    .add_guardrail(Guardrail::new(new_id(), name, rule_type));
            }
        }
        Ok(())
    }
}

fn print_help() {
    println!("Commands:");
    println!("  /next, /prev            - Move between phases");
    println!("  /phase <1|2|3>          - Jump to a phase");
    println!("  /section <n|next>       - Discovery section");
    println!("  /select <node|none>     - Select a diagram node");
    println!("  /step <n>               - Configuration step");
    println!("  /expand <kind|none>     - Expand a memory card");
    println!("  /memory <kind> on|off   - Enable or disable a memory kind");
    println!("  /retention <kind> <n>   - Retention days for a memory kind");
    println!("  /name, /persona, /objective");
    println!("  /skill <name>           - Add a skill (/skill on|off <id>)");
    println!("  /tool <provider> <name> - Add an MCP tool (/tool on|off <id>)");
    println!("  /connect <agent> [bi|uni]");
    println!("  /guardrail <type> <name> (/guardrail on|off <id>)");
    println!("  /export [json|yaml]     - Print the specification");
    println!("  /save                   - Save now");
    println!("  /quit                   - Exit");
    println!();
    println!("During discovery, plain text answers the current question.");
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn required<'a>(args: &[&'a str], index: usize, usage: &str) -> anyhow::Result<&'a str> {
    args.get(index)
        .copied()
        .ok_or_else(|| anyhow!("Usage: {}", usage))
}

fn parse_in_range(value: &str, max: u8, what: &str) -> anyhow::Result<u8> {
    match value.parse::<u8>() {
        Ok(n) if (1..=max).contains(&n) => Ok(n),
        _ => bail!("{} must be between 1 and {}", what, max),
    }
}

fn parse_switch(value: &str) -> anyhow::Result<bool> {
    match value {
        "on" | "true" | "enable" => Ok(true),
        "off" | "false" | "disable" => Ok(false),
        other => bail!("Expected on or off, got '{}'", other),
    }
}

fn text_or_prompt(text: &str, prompt: &str) -> anyhow::Result<String> {
    if !text.is_empty() {
        return Ok(text.to_string());
    }
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()?;
    Ok(value)
}

fn pick_persona() -> anyhow::Result<Persona> {
    let personas = Persona::all();
    let labels: Vec<&str> = personas.iter().map(|p| p.as_str()).collect();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Persona")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(personas[index])
}
