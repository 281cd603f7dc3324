//! # Agent Builder CLI
//!
//! Terminal front-end for the agent specification wizard.

pub mod commands;
pub mod interactive;
pub mod screens;
pub mod session;
