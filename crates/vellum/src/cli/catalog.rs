//! Listing handlers for `models` and `agents`.

use std::path::Path;
use vellum::{VellumResult, catalog};

use super::load_roster;

/// Print the model catalog.
pub fn list_models(selected: &str) {
    println!("{:<32} {:<10} STATUS", "MODEL", "PROVIDER");
    for model in catalog() {
        let status = if model.is_available() {
            "available"
        } else {
            "not implemented"
        };
        let marker = if model.id() == selected { "*" } else { " " };
        println!(
            "{}{:<31} {:<10} {}",
            marker,
            model.id(),
            model.provider().name(),
            status
        );
    }
}

/// Print the agent roster.
pub fn list_agents(agents: Option<&Path>) -> VellumResult<()> {
    let roster = load_roster(agents)?;
    for agent in roster.agents() {
        println!("{} - {} ({})", agent.id(), agent.name(), agent.model());
        if !agent.description().is_empty() {
            println!("    {}", agent.description());
        }
    }
    Ok(())
}
