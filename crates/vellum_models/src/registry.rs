//! Provider lookup by capability.

use std::sync::Arc;
use tracing::debug;
use vellum_core::Provider;
use vellum_error::{ProviderError, ProviderErrorKind, VellumResult};
use vellum_interface::TextGenerator;

use crate::GeminiClient;

/// Maps provider families to their clients.
///
/// Declared-but-unimplemented providers resolve to a `NotImplemented` error,
/// so callers never need to special-case them.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    gemini: Arc<GeminiClient>,
}

impl ProviderRegistry {
    /// Registry backed by the given Gemini client.
    pub fn new(gemini: GeminiClient) -> Self {
        Self {
            gemini: Arc::new(gemini),
        }
    }

    /// Client for a provider family.
    pub fn client_for(&self, provider: Provider) -> VellumResult<Arc<dyn TextGenerator>> {
        debug!(provider = %provider, "Resolving provider client");
        match provider {
            Provider::Gemini => Ok(self.gemini.clone()),
            Provider::OpenAi | Provider::Anthropic | Provider::Xai => Err(ProviderError::new(
                ProviderErrorKind::NotImplemented(provider.name().to_string()),
            )
            .into()),
        }
    }

    /// Client for the provider family a model belongs to.
    pub fn client_for_model(&self, model: &str) -> VellumResult<Arc<dyn TextGenerator>> {
        let provider = Provider::for_model(model).ok_or_else(|| {
            ProviderError::new(ProviderErrorKind::UnsupportedModel(model.to_string()))
        })?;
        self.client_for(provider)
    }

    /// The Gemini client.
    pub fn gemini(&self) -> &GeminiClient {
        &self.gemini
    }
}
