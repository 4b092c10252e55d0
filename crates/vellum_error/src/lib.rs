//! Error types for the Vellum review assistant.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vellum_error::{ProviderError, ProviderErrorKind, VellumResult};
//!
//! fn call_out() -> VellumResult<String> {
//!     Err(ProviderError::new(ProviderErrorKind::MissingCredential))?
//! }
//!
//! assert!(call_out().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gate;
mod http;
mod json;
mod provider;
mod storage;

pub use config::ConfigError;
pub use error::{VellumError, VellumErrorKind, VellumResult};
pub use gate::{GateError, GateErrorKind};
pub use http::HttpError;
pub use json::JsonError;
pub use provider::{ProviderError, ProviderErrorKind};
pub use storage::{StorageError, StorageErrorKind};
