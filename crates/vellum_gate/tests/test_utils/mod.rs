//! Shared test utilities for gate tests.

#![allow(dead_code)]

mod mock_generator;

pub use mock_generator::{MockBehavior, MockGenerator};

use vellum_core::{InvocationRequest, ResourceState};

/// Minimal valid request for the mock backend.
pub fn request() -> InvocationRequest {
    request_for("gemini-2.5-flash")
}

/// Minimal request naming `model`.
pub fn request_for(model: &str) -> InvocationRequest {
    InvocationRequest::builder()
        .instruction_prompt("Summarize this 510(k) document.")
        .user_content("Device Name: SuperMed 2000. Predicate: K123456.")
        .model_identifier(model)
        .build()
        .expect("valid request")
}

/// Gauges with the given mana and experience, other gauges at their defaults.
pub fn resources(mana: u32, xp: u32) -> ResourceState {
    ResourceState::new(100, mana, xp, 0)
}
