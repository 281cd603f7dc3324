//! # Agent Builder Shared
//!
//! Specification model, wizard state and common types used across the
//! Agent Builder crates.

pub mod error;
pub mod identity;
pub mod memory;
pub mod skill;
pub mod tool;
pub mod connection;
pub mod guardrail;
pub mod spec;
pub mod wizard;
pub mod config;

// Re-exports
pub use error::*;
pub use identity::*;
pub use memory::*;
pub use skill::*;
pub use tool::*;
pub use connection::*;
pub use guardrail::*;
pub use spec::*;
pub use wizard::*;
pub use config::*;
