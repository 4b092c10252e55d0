//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the vellum binary.

mod catalog;
mod commands;
mod prefs;
mod run;
mod session;

use std::path::Path;
use vellum::{AgentRoster, VellumResult};

pub use catalog::{list_agents, list_models};
pub use commands::{Cli, Commands, PrefsCommands, PromptArgs};
pub use prefs::handle_prefs_command;
pub use run::{run_agent, run_prompt};
pub use session::run_session;

/// Roster from `path`, or the built-in agents.
fn load_roster(path: Option<&Path>) -> VellumResult<AgentRoster> {
    match path {
        Some(path) => AgentRoster::from_file(path),
        None => Ok(AgentRoster::default()),
    }
}
