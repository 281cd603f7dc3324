//! CLI Commands

pub mod show;
pub mod export;
pub mod phase;
pub mod reset;

pub use show::ShowCommand;
pub use export::{ExportCommand, ExportFormat};
pub use phase::{PhaseCommand, PhaseTarget};
pub use reset::ResetCommand;
