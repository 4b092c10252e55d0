//! Trait definitions for text-generation backends.

use async_trait::async_trait;
use std::sync::Arc;
use vellum_core::{InvocationRequest, Provider};
use vellum_error::VellumResult;

/// Core trait every text-generation backend implements.
///
/// Implementations are stateless per call and must tolerate concurrent use;
/// single-flight is the caller's concern.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Perform one round-trip and return the generated text.
    ///
    /// An empty endpoint payload is reported as a placeholder string, never
    /// as an empty string.
    async fn generate_text(&self, request: &InvocationRequest) -> VellumResult<String>;

    /// Reject a request this backend would refuse, without any I/O.
    ///
    /// Callers run this before committing resources to a call.
    fn check(&self, _request: &InvocationRequest) -> VellumResult<()> {
        Ok(())
    }

    /// Provider family this backend talks to.
    fn provider(&self) -> Provider;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    async fn generate_text(&self, request: &InvocationRequest) -> VellumResult<String> {
        (**self).generate_text(request).await
    }

    fn check(&self, request: &InvocationRequest) -> VellumResult<()> {
        (**self).check(request)
    }

    fn provider(&self) -> Provider {
        (**self).provider()
    }
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    async fn generate_text(&self, request: &InvocationRequest) -> VellumResult<String> {
        (**self).generate_text(request).await
    }

    fn check(&self, request: &InvocationRequest) -> VellumResult<()> {
        (**self).check(request)
    }

    fn provider(&self) -> Provider {
        (**self).provider()
    }
}
