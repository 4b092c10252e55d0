//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vellum::ReviewTask;

/// Vellum - regulatory document review assistant
#[derive(Parser, Debug)]
#[command(name = "vellum")]
#[command(
    about = "Regulatory document review assistant backed by a hosted text-generation API",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file overriding the bundled and user defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one review task or custom prompt over a document
    Run {
        #[command(flatten)]
        prompt: PromptArgs,

        /// Document to review (text or markdown); reads stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,

        /// Print the session HUD to stderr afterwards
        #[arg(long)]
        hud: bool,
    },

    /// Run a submission review agent over a document
    Agent {
        /// Agent identifier
        id: String,

        /// TOML roster replacing the built-in agents
        #[arg(long)]
        agents: Option<PathBuf>,

        /// Document to review; reads stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// List known models
    Models,

    /// List available agents
    Agents {
        /// TOML roster replacing the built-in agents
        #[arg(long)]
        agents: Option<PathBuf>,
    },

    /// Show or change stored preferences
    #[command(subcommand)]
    Prefs(PrefsCommands),

    /// Interactive session: each block of stdin ended by a line with a single "." is one invocation
    Session {
        #[command(flatten)]
        prompt: PromptArgs,
    },
}

/// Instruction and model selection shared by `run` and `session`.
#[derive(Args, Debug, Clone)]
pub struct PromptArgs {
    /// Preset review task
    #[arg(long, value_enum)]
    pub task: Option<TaskArg>,

    /// Keywords to highlight (notes-organize)
    #[arg(long, default_value = "")]
    pub keywords: String,

    /// Custom instruction prompt, replacing the task's prompt
    #[arg(long)]
    pub prompt: Option<String>,

    /// Model identifier, replacing the task's or selected model
    #[arg(long)]
    pub model: Option<String>,
}

/// Review task presets
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskArg {
    /// 510(k) summary analysis
    Summary,
    /// Review guideline with checklist
    Guidance,
    /// Structured notes with highlighted keywords
    NotesOrganize,
    /// Action-item checklist
    NotesActionItems,
    /// Glossary of technical terms
    NotesGlossary,
    /// Professional rewrite for an FDA report
    NotesPolish,
}

impl TaskArg {
    /// The preset with its arguments filled in.
    pub fn task(self, keywords: &str) -> ReviewTask {
        match self {
            TaskArg::Summary => ReviewTask::Summary,
            TaskArg::Guidance => ReviewTask::Guidance,
            TaskArg::NotesOrganize => ReviewTask::NotesOrganize {
                keywords: keywords.to_string(),
            },
            TaskArg::NotesActionItems => ReviewTask::NotesActionItems,
            TaskArg::NotesGlossary => ReviewTask::NotesGlossary,
            TaskArg::NotesPolish => ReviewTask::NotesPolish,
        }
    }
}

/// Preference subcommands
#[derive(Subcommand, Debug)]
pub enum PrefsCommands {
    /// Show stored preferences with keys masked
    Show,

    /// Store a preference; an empty value clears it
    Set {
        /// gemini_api_key, openai_api_key, selected_model or theme_id
        key: String,

        /// New value
        value: String,
    },
}
