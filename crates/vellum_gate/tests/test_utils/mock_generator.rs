//! Mock text generator for gate tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;
use vellum_core::{InvocationRequest, Provider};
use vellum_error::{ProviderError, ProviderErrorKind, VellumResult};
use vellum_interface::TextGenerator;

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return the given text
    Success(String),
    /// Always fail with the given error
    Error(ProviderErrorKind),
    /// Return the text after a delay
    Delayed(Duration, String),
    /// Wait until released through [`MockGenerator::release`], then return the text
    Held(String),
    /// Never resolve
    Hang,
}

/// Mock backend that counts calls and follows a scripted behavior.
pub struct MockGenerator {
    behavior: MockBehavior,
    provider: Provider,
    rejection: Option<ProviderErrorKind>,
    call_count: Arc<Mutex<usize>>,
    started: Arc<Notify>,
    release: Arc<Notify>,
}

impl MockGenerator {
    /// Mock that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Mock that always fails with the given error.
    pub fn new_error(error: ProviderErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Mock with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            provider: Provider::Gemini,
            rejection: None,
            call_count: Arc::new(Mutex::new(0)),
            started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        }
    }

    /// Report a different provider family.
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    /// Refuse every request up front with the given error.
    pub fn rejecting(mut self, error: ProviderErrorKind) -> Self {
        self.rejection = Some(error);
        self
    }

    /// Number of times `generate_text` was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Resolves once a call has entered the mock.
    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    /// Let a [`MockBehavior::Held`] call return.
    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate_text(&self, _request: &InvocationRequest) -> VellumResult<String> {
        *self.call_count.lock().unwrap() += 1;
        self.started.notify_one();

        match &self.behavior {
            MockBehavior::Success(text) => Ok(text.clone()),
            MockBehavior::Error(kind) => Err(ProviderError::new(kind.clone()).into()),
            MockBehavior::Delayed(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(text.clone())
            }
            MockBehavior::Held(text) => {
                self.release.notified().await;
                Ok(text.clone())
            }
            MockBehavior::Hang => std::future::pending().await,
        }
    }

    fn check(&self, _request: &InvocationRequest) -> VellumResult<()> {
        match &self.rejection {
            Some(kind) => Err(ProviderError::new(kind.clone()).into()),
            None => Ok(()),
        }
    }

    fn provider(&self) -> Provider {
        self.provider
    }
}
