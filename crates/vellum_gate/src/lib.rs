//! Resource-gated, single-flight invocation of text generators.
//!
//! Every call to a provider goes through an [`ActionGate`], which checks the
//! session's mana, refuses to overlap invocations, bounds each call with a
//! timeout and settles the session counters once the call resolves.
//!
//! # Example
//!
//! ```no_run
//! use vellum_core::{GateSettings, ProviderSettings, ReviewTask};
//! use vellum_gate::{ActionGate, SessionContext};
//! use vellum_models::GeminiClient;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(&ProviderSettings::default())?;
//! let gate = ActionGate::new(client, SessionContext::default(), GateSettings::default());
//!
//! let request = ReviewTask::Summary.request("Device Name: SuperMed 2000").build()?;
//! let text = gate
//!     .run_gated_action(&request, |text| println!("{}", text))
//!     .await?;
//!
//! println!("{}", gate.context().snapshot());
//! # let _ = text;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod context;
mod gate;
mod phase;
mod snapshot;

pub use context::SessionContext;
pub use gate::ActionGate;
pub use phase::{GateEvent, GatePhase, TRANSITIONS};
pub use snapshot::SessionSnapshot;
