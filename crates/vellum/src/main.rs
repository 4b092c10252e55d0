//! Vellum CLI binary.
//!
//! This binary provides command-line access to Vellum's functionality:
//! - Run review tasks, custom prompts and agents over documents
//! - Hold an interactive session with live gauges
//! - Inspect the model catalog and manage preferences

use clap::Parser;
use std::process::ExitCode;
use tracing::error;
use vellum::{Assistant, LoggingConfig, VellumConfig, VellumResult, init_logging};

mod cli;

use cli::{
    Cli, Commands, handle_prefs_command, list_agents, list_models, run_agent, run_prompt,
    run_session,
};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let logging = LoggingConfig::new(cli.verbose).with_json_logs(cli.json_logs);
    if let Err(e) = init_logging(&logging) {
        eprintln!("Error: {}", e.user_message());
        return ExitCode::FAILURE;
    }

    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> VellumResult<()> {
    let config = VellumConfig::load(cli.config.as_deref())?;
    let mut assistant = Assistant::from_config(config)?;

    match cli.command {
        Commands::Run { prompt, input, hud } => {
            run_prompt(&assistant, &prompt, input.as_deref(), hud).await?;
        }

        Commands::Agent { id, agents, input } => {
            run_agent(&assistant, &id, agents.as_deref(), input.as_deref()).await?;
        }

        Commands::Models => {
            list_models(assistant.selected_model());
        }

        Commands::Agents { agents } => {
            list_agents(agents.as_deref())?;
        }

        Commands::Prefs(command) => {
            handle_prefs_command(&mut assistant, command)?;
        }

        Commands::Session { prompt } => {
            run_session(&assistant, &prompt).await?;
        }
    }

    Ok(())
}
