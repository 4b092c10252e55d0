//! Text-generation provider clients for Vellum.
//!
//! # Available Providers
//!
//! - **Gemini** (Google) - REST `generateContent` client
//! - **OpenAI**, **Anthropic**, **xAI** - declared in [`Provider`], no client yet
//!
//! # Example
//!
//! ```no_run
//! use vellum_core::{ProviderSettings, ReviewTask};
//! use vellum_interface::TextGenerator;
//! use vellum_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(&ProviderSettings::default())?;
//! let request = ReviewTask::Summary.request("Device Name: SuperMed 2000").build()?;
//! let markdown = client.generate_text(&request).await?;
//! println!("{}", markdown);
//! # Ok(())
//! # }
//! ```
//!
//! [`Provider`]: vellum_core::Provider

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod registry;

pub use gemini::{GENERIC_FAILURE_MESSAGE, GeminiClient, NO_RESPONSE_PLACEHOLDER};
pub use registry::ProviderRegistry;
