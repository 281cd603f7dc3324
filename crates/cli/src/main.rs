//! Agent Builder CLI - Terminal wizard for agent specifications
//!
//! Usage:
//!   agent-builder                         - Start the interactive wizard
//!   agent-builder show                    - Print the current phase screen
//!   agent-builder export --format yaml    - Export the specification
//!   agent-builder phase <1|2|3|next|prev> - Move between phases
//!   agent-builder reset                   - Start over

use clap::{Parser, Subcommand};
use cli::commands::{ExportCommand, PhaseCommand, ResetCommand, ShowCommand};
use cli::interactive::InteractiveCli;
use cli::session::{open_store, SessionArgs};

#[derive(Parser)]
#[command(name = "agent-builder")]
#[command(about = "Agent Builder - Design AI agent specifications in three phases")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    session: SessionArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the screen for the current phase
    Show(ShowCommand),
    /// Export the agent specification
    Export(ExportCommand),
    /// Move the wizard to another phase
    Phase(PhaseCommand),
    /// Reset the wizard to its initial state
    Reset(ResetCommand),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.session.resolve_config()?;

    match cli.command {
        Some(Commands::Show(cmd)) => cmd.run(&config),
        Some(Commands::Export(cmd)) => cmd.run(&config),
        Some(Commands::Phase(cmd)) => cmd.run(&config),
        Some(Commands::Reset(cmd)) => cmd.run(&config),
        None => {
            // No subcommand - start interactive mode
            let mut interactive = InteractiveCli::new(open_store(&config), config.autosave);
            interactive.run()
        }
    }
}
