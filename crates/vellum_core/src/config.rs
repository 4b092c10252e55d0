//! Configuration loading.
//!
//! Sources in order of precedence (later sources override earlier):
//! 1. Bundled defaults (`vellum.toml` shipped with the library)
//! 2. `~/.config/vellum/vellum.toml`
//! 3. `./vellum.toml`
//! 4. An explicitly supplied file

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};
use vellum_error::{ConfigError, VellumError, VellumResult};

use crate::GAUGE_MAX;

/// How a failed invocation settles the resource gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Failures leave gauges and usage counters untouched
    #[default]
    Unpenalized,
    /// Failures still cost mana, but earn no XP and add no stress
    ChargeMana,
}

/// Action gate tuning.
///
/// ```toml
/// [gate]
/// mana_cost = 5
/// min_mana = 5
/// xp_reward = 15
/// stress_increment = 2
/// timeout_secs = 120
/// failure_policy = "unpenalized"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateSettings {
    /// Mana deducted per successful invocation
    pub mana_cost: u32,
    /// Mana required before dispatch
    pub min_mana: u32,
    /// XP earned per successful invocation
    pub xp_reward: u32,
    /// Stress added per successful invocation
    pub stress_increment: u32,
    /// Invocation timeout; zero disables it
    pub timeout_secs: u64,
    /// Settlement rule for failed invocations
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

impl Default for GateSettings {
    fn default() -> Self {
        Self {
            mana_cost: 5,
            min_mana: 5,
            xp_reward: 15,
            stress_increment: 2,
            timeout_secs: 120,
            failure_policy: FailurePolicy::Unpenalized,
        }
    }
}

impl GateSettings {
    /// Invocation timeout, if enabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// Text-generation endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Endpoint root, without the `/v1beta` path
    pub base_url: String,
    /// Model used when nothing else is selected
    pub default_model: String,
    /// Sampling temperature for built-in actions
    pub temperature: f32,
    /// Output token cap for built-in actions
    pub max_output_tokens: u32,
    /// TCP connect timeout
    pub connect_timeout_secs: u64,
    /// Environment variable holding the process-wide key
    pub api_key_env: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            default_model: "gemini-2.5-flash".to_string(),
            temperature: crate::DEFAULT_TEMPERATURE,
            max_output_tokens: crate::DEFAULT_MAX_OUTPUT_TOKENS,
            connect_timeout_secs: 10,
            api_key_env: "GEMINI_API_KEY".to_string(),
        }
    }
}

/// Preference storage settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StorageSettings {
    /// Overrides `<config dir>/vellum/preferences.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences_path: Option<PathBuf>,
}

/// Top-level Vellum configuration.
///
/// # Example
///
/// ```no_run
/// use vellum_core::VellumConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = VellumConfig::load(None)?;
/// println!("Mana per call: {}", config.gate.mana_cost);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VellumConfig {
    /// Action gate tuning
    #[serde(default)]
    pub gate: GateSettings,
    /// Endpoint settings
    #[serde(default)]
    pub provider: ProviderSettings,
    /// Preference storage
    #[serde(default)]
    pub storage: StorageSettings,
}

impl VellumConfig {
    /// Load configuration from a specific file path only.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> VellumResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                VellumError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VellumError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: explicit > current dir > home dir > bundled.
    ///
    /// User config files are optional and silently skipped when missing; an
    /// explicit path must exist.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> VellumResult<Self> {
        debug!(
            "Loading configuration with precedence: explicit > current dir > home dir > bundled"
        );

        const DEFAULT_CONFIG: &str = include_str!("../../../vellum.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(config_dir) = dirs::config_dir() {
            let home_config = config_dir.join("vellum/vellum.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("vellum").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        let config: Self = builder
            .build()
            .map_err(|e| {
                VellumError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VellumError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the gate or client cannot honour.
    pub fn validate(&self) -> VellumResult<()> {
        if self.gate.min_mana > GAUGE_MAX || self.gate.mana_cost > GAUGE_MAX {
            return Err(ConfigError::new(format!(
                "gate.min_mana and gate.mana_cost must not exceed {}",
                GAUGE_MAX
            ))
            .into());
        }
        if !(0.0..=1.0).contains(&self.provider.temperature) {
            return Err(ConfigError::new(format!(
                "provider.temperature must be within [0, 1], got {}",
                self.provider.temperature
            ))
            .into());
        }
        if self.provider.max_output_tokens == 0 {
            return Err(ConfigError::new("provider.max_output_tokens must be positive").into());
        }
        if self.provider.default_model.trim().is_empty() {
            return Err(ConfigError::new("provider.default_model must not be empty").into());
        }
        Ok(())
    }
}
