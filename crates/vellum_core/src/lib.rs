//! Core data types for the Vellum review assistant.
//!
//! This crate provides the value types shared by the provider clients and the
//! action gate: gauges and usage counters, invocation requests, the provider
//! catalog, review task presets, agents and configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod agent;
mod config;
mod metrics;
mod provider;
mod request;
mod resources;
mod task;

pub use agent::{Agent, AgentRoster};
pub use config::{FailurePolicy, GateSettings, ProviderSettings, StorageSettings, VellumConfig};
pub use metrics::{UsageMetrics, estimate_tokens};
pub use provider::{AVAILABLE_MODELS, ModelInfo, Provider, catalog};
pub use request::{
    DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_TEMPERATURE, InvocationRequest, InvocationRequestBuilder,
    InvocationRequestBuilderError,
};
pub use resources::{GAUGE_MAX, ResourceState};
pub use task::ReviewTask;
