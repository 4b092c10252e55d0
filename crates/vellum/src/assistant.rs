//! Application wiring: configuration, provider clients, preferences and the
//! long-lived session.

use tracing::{debug, instrument};
use vellum_core::{InvocationRequest, InvocationRequestBuilder, VellumConfig};
use vellum_error::{ProviderError, ProviderErrorKind, VellumResult};
use vellum_gate::{ActionGate, SessionContext};
use vellum_models::{GeminiClient, ProviderRegistry};

use crate::{CredentialSource, PreferenceKey, PreferenceStore};

/// One user session against the configured providers.
///
/// Every invocation goes through an [`ActionGate`] bound to the same
/// [`SessionContext`], so gauges and the busy state carry across calls.
#[derive(Debug)]
pub struct Assistant {
    config: VellumConfig,
    registry: ProviderRegistry,
    preferences: PreferenceStore,
    context: SessionContext,
}

impl Assistant {
    /// Assemble an assistant from already constructed parts.
    pub fn new(
        config: VellumConfig,
        registry: ProviderRegistry,
        preferences: PreferenceStore,
        context: SessionContext,
    ) -> Self {
        Self {
            config,
            registry,
            preferences,
            context,
        }
    }

    /// Build the Gemini client, open the preference store and start a fresh session.
    #[instrument(skip(config))]
    pub fn from_config(config: VellumConfig) -> VellumResult<Self> {
        let registry = ProviderRegistry::new(GeminiClient::new(&config.provider)?);
        let preferences = PreferenceStore::from_settings(&config.storage)?;
        Ok(Self::new(config, registry, preferences, SessionContext::default()))
    }

    /// Loaded configuration.
    pub fn config(&self) -> &VellumConfig {
        &self.config
    }

    /// Session gauges, counters and busy state.
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// User preferences.
    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    /// Mutable access to preferences, for `set`.
    pub fn preferences_mut(&mut self) -> &mut PreferenceStore {
        &mut self.preferences
    }

    /// Where the next invocation's key comes from.
    pub fn credential_source(&self) -> CredentialSource {
        CredentialSource::resolve(
            self.registry.gemini().has_env_key(),
            self.preferences.get(PreferenceKey::GeminiApiKey),
        )
    }

    /// Model for free-form prompts: the selected model, else the configured default.
    pub fn selected_model(&self) -> &str {
        self.preferences
            .get(PreferenceKey::SelectedModel)
            .unwrap_or(&self.config.provider.default_model)
    }

    /// Finish a request: configured sampling parameters and the credential.
    ///
    /// Fails with `MissingCredential` when no key is available, so nothing is
    /// dispatched and no gauges move.
    pub fn prepare(
        &self,
        mut builder: InvocationRequestBuilder,
    ) -> VellumResult<InvocationRequest> {
        let credential = self.credential_source();
        if !credential.is_available() {
            return Err(ProviderError::new(ProviderErrorKind::MissingCredential).into());
        }

        builder.temperature(self.config.provider.temperature);
        if let Some(key) = credential.per_call_key() {
            builder.api_key(key);
        }
        debug!(credential = %credential, "Prepared request");

        builder.build().map_err(|e| {
            ProviderError::new(ProviderErrorKind::InvalidRequest(e.to_string())).into()
        })
    }

    /// Run one gated invocation with the client for the request's model.
    ///
    /// Models of unimplemented providers fail with `NotImplemented` before
    /// reaching the gate.
    pub async fn run<F>(&self, request: &InvocationRequest, on_success: F) -> VellumResult<String>
    where
        F: FnOnce(&str),
    {
        let client = self.registry.client_for_model(request.model_identifier())?;
        let gate = ActionGate::new(client, self.context.clone(), self.config.gate.clone());
        gate.run_gated_action(request, on_success).await
    }
}
