//! agent-builder show command

use crate::screens;
use crate::session::open_store;
use clap::Args;
use shared::BuilderConfig;

#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Print only the one-line status instead of the full screen
    #[arg(long)]
    pub brief: bool,
}

impl ShowCommand {
    pub fn run(&self, config: &BuilderConfig) -> anyhow::Result<()> {
        let store = open_store(config);
        if self.brief {
            println!("{}", screens::prompt_label(store.state()));
        } else {
            print!("{}", screens::render(store.state()));
        }
        Ok(())
    }
}
