//! Google Gemini REST client.
//!
//! One `generateContent` round-trip per call: no retries, no caching, no
//! streaming.

mod client;
mod wire;

pub use client::{GENERIC_FAILURE_MESSAGE, GeminiClient, NO_RESPONSE_PLACEHOLDER};
