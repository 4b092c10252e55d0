//! Configurable review agents.

use crate::{DEFAULT_TEMPERATURE, InvocationRequest, InvocationRequestBuilder, Provider};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, instrument};
use vellum_error::{ConfigError, VellumResult};

/// A named review persona with its own model and prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Agent {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    system_prompt: String,
    provider: Provider,
}

impl Agent {
    /// Request builder for running this agent over the given content.
    ///
    /// The agent's own temperature is informational; every invocation runs
    /// at the shared default temperature.
    pub fn request(&self, content: impl Into<String>) -> InvocationRequestBuilder {
        let mut builder = InvocationRequest::builder();
        builder
            .instruction_prompt(self.system_prompt.clone())
            .user_content(content)
            .model_identifier(self.model.clone())
            .temperature(DEFAULT_TEMPERATURE)
            .max_output_tokens(self.max_tokens);
        builder
    }
}

#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    agents: Vec<Agent>,
}

/// The set of agents available for submission review.
///
/// # Examples
///
/// ```
/// use vellum_core::AgentRoster;
///
/// let roster = AgentRoster::default();
/// assert_eq!(roster.agents().len(), 3);
/// assert_eq!(*roster.get("risk_agent").unwrap().max_tokens(), 5000);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AgentRoster {
    agents: Vec<Agent>,
}

impl Default for AgentRoster {
    fn default() -> Self {
        Self {
            agents: default_agents(),
        }
    }
}

impl AgentRoster {
    /// Parse a roster from TOML `[[agents]]` tables.
    pub fn from_toml_str(source: &str) -> VellumResult<Self> {
        let file: RosterFile = toml::from_str(source)
            .map_err(|e| ConfigError::new(format!("Failed to parse agents: {}", e)))?;
        let roster = Self { agents: file.agents };
        roster.validate()?;
        Ok(roster)
    }

    /// Load a roster from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> VellumResult<Self> {
        let source = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read agents from {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let roster = Self::from_toml_str(&source)?;
        debug!(count = roster.agents.len(), "Loaded agents");
        Ok(roster)
    }

    /// All agents in file order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Look up an agent by id.
    pub fn get(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    fn validate(&self) -> VellumResult<()> {
        if self.agents.is_empty() {
            return Err(ConfigError::new("Agent roster is empty").into());
        }
        let mut seen = HashSet::new();
        for agent in &self.agents {
            if agent.id.trim().is_empty() {
                return Err(ConfigError::new("Agent id must not be empty").into());
            }
            if !seen.insert(agent.id.as_str()) {
                return Err(ConfigError::new(format!("Duplicate agent id '{}'", agent.id)).into());
            }
            if agent.max_tokens == 0 {
                return Err(ConfigError::new(format!(
                    "Agent '{}' must allow at least one output token",
                    agent.id
                ))
                .into());
            }
        }
        Ok(())
    }
}

fn default_agents() -> Vec<Agent> {
    vec![
        Agent {
            id: "summary_agent".to_string(),
            name: "Summarizer".to_string(),
            description: "Extracts key information from 510(k) summaries.".to_string(),
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.2,
            max_tokens: 4000,
            system_prompt: "You are an expert FDA reviewer. Summarize the provided 510(k) summary \
                document. Highlight key regulatory information."
                .to_string(),
            provider: Provider::Gemini,
        },
        Agent {
            id: "risk_agent".to_string(),
            name: "Risk Analyst".to_string(),
            description: "Analyzes risk factors in submission materials.".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            temperature: 0.3,
            max_tokens: 5000,
            system_prompt: "Identify and list all risk factors and mitigations mentioned in the \
                text. Format as a table."
                .to_string(),
            provider: Provider::Gemini,
        },
        Agent {
            id: "clinical_agent".to_string(),
            name: "Clinical Reviewer".to_string(),
            description: "Reviews clinical data and conclusions.".to_string(),
            model: "gemini-3-pro-preview".to_string(),
            temperature: 0.1,
            max_tokens: 8000,
            system_prompt: "Critically review the clinical data provided. Are the conclusions \
                supported by the data? Identify gaps."
                .to_string(),
            provider: Provider::Gemini,
        },
    ]
}
