//! Shared helpers for provider client tests.

mod mock_server;

pub use mock_server::{CapturedRequest, MockServer};
