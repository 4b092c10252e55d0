//! Vellum - regulatory document review assistant.
//!
//! Vellum sends regulatory submission text (510(k) summaries, review notes)
//! to a hosted text-generation endpoint with preset or custom instructions,
//! and tracks a small set of gamified session gauges as a side effect of
//! every call.
//!
//! # Features
//!
//! - **Action gate**: mana check, single-flight busy state, timeout and
//!   counter settlement around every invocation
//! - **Gemini client**: one `generateContent` round-trip per call, no retries
//! - **Review tasks and agents**: fixed prompts bound to models
//! - **Preferences**: file-backed API keys, model selection and theme
//!
//! # Quick Start
//!
//! ```no_run
//! use vellum::{Assistant, ReviewTask, VellumConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let assistant = Assistant::from_config(VellumConfig::load(None)?)?;
//! let request = assistant.prepare(ReviewTask::Summary.request("Device Name: SuperMed 2000"))?;
//! let markdown = assistant.run(&request, |_| {}).await?;
//!
//! println!("{}", markdown);
//! println!("{}", assistant.context().snapshot());
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `vellum_error` - Error types
//! - `vellum_core` - Gauges, usage metrics, requests, catalog, tasks, agents, config
//! - `vellum_interface` - `TextGenerator` trait
//! - `vellum_models` - Gemini client and provider registry
//! - `vellum_gate` - Action gate and session context
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assistant;
mod credentials;
mod input;
mod logging;
mod preferences;

pub use assistant::Assistant;
pub use credentials::CredentialSource;
pub use input::{BLOCK_TERMINATOR, BlockReader, InputBlock, read_document, read_input};
pub use logging::{LoggingConfig, init_logging};
pub use preferences::{PreferenceKey, PreferenceStore, Preferences, mask_secret};

pub use vellum_core::*;
pub use vellum_error::*;
pub use vellum_gate::*;
pub use vellum_interface::*;
pub use vellum_models::*;
