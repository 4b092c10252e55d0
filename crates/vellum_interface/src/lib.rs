//! Trait definitions for Vellum text-generation providers.
//!
//! The action gate only talks to providers through [`TextGenerator`], so new
//! provider clients can be added without touching the gate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::TextGenerator;
