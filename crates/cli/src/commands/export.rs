//! agent-builder export command

use crate::session::open_store;
use anyhow::Context;
use clap::{Args, ValueEnum};
use shared::BuilderConfig;
use std::path::PathBuf;
use store::{AgentSpecStore, SlotStorage};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ExportCommand {
    pub fn run(&self, config: &BuilderConfig) -> anyhow::Result<()> {
        let store = open_store(config);
        let document = render(&store, self.format)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &document)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("Exported specification to {}", path.display());
            }
            None => println!("{}", document),
        }
        Ok(())
    }
}

/// Serialize the current specification in the requested format
pub fn render<S: SlotStorage>(
    store: &AgentSpecStore<S>,
    format: ExportFormat,
) -> anyhow::Result<String> {
    let document = match format {
        ExportFormat::Json => store.export_json()?,
        ExportFormat::Yaml => store.export_yaml()?,
    };
    Ok(document)
}
