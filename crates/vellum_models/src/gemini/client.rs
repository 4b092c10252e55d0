//! Google Gemini API implementation.
//!
//! The client resolves an API key per call (explicit key first, then the
//! process-wide environment key), validates the request and performs one
//! `generateContent` round-trip.

use async_trait::async_trait;
use reqwest::Client;
use std::env;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use vellum_core::{InvocationRequest, Provider, ProviderSettings};
use vellum_error::{HttpError, ProviderError, ProviderErrorKind, VellumResult};
use vellum_interface::TextGenerator;

use super::wire::{
    Content, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    SystemInstruction, TextPart,
};

/// Returned instead of an empty string when the endpoint yields no text.
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response generated.";

/// Used when a failed call carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to call Gemini API";

/// Longest endpoint body echoed back in an error message.
const MAX_ERROR_BODY_CHARS: usize = 800;

/// Client for the Google Gemini `generateContent` REST endpoint.
///
/// Holds no per-call state, so one instance can serve concurrent callers.
pub struct GeminiClient {
    http: Client,
    base_url: String,
    env_api_key: Option<String>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("has_env_api_key", &self.env_api_key.is_some())
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client, reading the process-wide key from the environment
    /// variable named in the settings.
    #[instrument(name = "gemini_client_new", skip(settings))]
    pub fn new(settings: &ProviderSettings) -> VellumResult<Self> {
        let env_api_key = env::var(&settings.api_key_env).ok();
        Self::with_env_key(settings, env_api_key)
    }

    /// Create a client with an explicitly supplied process-wide key.
    ///
    /// Empty keys are treated as absent.
    pub fn with_env_key(
        settings: &ProviderSettings,
        env_api_key: Option<String>,
    ) -> VellumResult<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        let env_api_key = env_api_key.filter(|k| !k.trim().is_empty());
        debug!(has_env_key = env_api_key.is_some(), "Created Gemini client");

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            env_api_key,
        })
    }

    /// Whether a process-wide key was found at construction.
    pub fn has_env_key(&self) -> bool {
        self.env_api_key.is_some()
    }

    /// Key to use for a request: explicit per-call key, then the environment key.
    fn resolve_key<'a>(
        &'a self,
        request: &'a InvocationRequest,
    ) -> Result<&'a str, ProviderError> {
        request
            .api_key()
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .or(self.env_api_key.as_deref())
            .ok_or_else(|| ProviderError::new(ProviderErrorKind::MissingCredential))
    }

    /// Check the request against what the endpoint accepts.
    fn validate(request: &InvocationRequest) -> Result<(), ProviderError> {
        let model = request.model_identifier().trim();
        if model.is_empty() {
            return Err(ProviderError::new(ProviderErrorKind::InvalidRequest(
                "model identifier must not be empty".to_string(),
            )));
        }
        if Provider::for_model(model) != Some(Provider::Gemini) {
            return Err(ProviderError::new(ProviderErrorKind::UnsupportedModel(
                model.to_string(),
            )));
        }
        let temperature = *request.temperature();
        if !(0.0..=1.0).contains(&temperature) {
            return Err(ProviderError::new(ProviderErrorKind::InvalidRequest(format!(
                "temperature must be within [0, 1], got {}",
                temperature
            ))));
        }
        if request.max_output_tokens() == &Some(0) {
            return Err(ProviderError::new(ProviderErrorKind::InvalidRequest(
                "max output tokens must be positive".to_string(),
            )));
        }
        Ok(())
    }

    fn endpoint(&self, model: &str) -> String {
        let model = model.trim();
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    /// Message for a non-success response body.
    fn error_message(body: &str) -> String {
        let reported = serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .and_then(|envelope| envelope.error.message)
            .filter(|m| !m.trim().is_empty());
        if let Some(message) = reported {
            return message;
        }
        let body = body.trim();
        if body.is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else if body.chars().count() > MAX_ERROR_BODY_CHARS {
            format!(
                "{}...",
                body.chars().take(MAX_ERROR_BODY_CHARS).collect::<String>()
            )
        } else {
            body.to_string()
        }
    }

    /// Internal generate method that returns provider-specific errors.
    async fn generate_internal(
        &self,
        request: &InvocationRequest,
    ) -> Result<String, ProviderError> {
        Self::validate(request)?;
        let api_key = self.resolve_key(request)?;

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![TextPart {
                    text: request.user_content(),
                }],
            }],
            system_instruction: SystemInstruction {
                parts: vec![TextPart {
                    text: request.instruction_prompt(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: *request.temperature(),
                max_output_tokens: request.effective_max_output_tokens(),
            },
        };

        let response = self
            .http
            .post(self.endpoint(request.model_identifier()))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let message = e.to_string();
                ProviderError::new(ProviderErrorKind::Transport(if message.is_empty() {
                    GENERIC_FAILURE_MESSAGE.to_string()
                } else {
                    message
                }))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            ProviderError::new(ProviderErrorKind::Transport(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;

        if !status.is_success() {
            return Err(ProviderError::new(ProviderErrorKind::Endpoint {
                status_code: status.as_u16(),
                message: Self::error_message(&text),
            }));
        }

        let parsed: GenerateContentResponse = if text.trim().is_empty() {
            GenerateContentResponse::default()
        } else {
            serde_json::from_str(&text).map_err(|e| {
                ProviderError::new(ProviderErrorKind::Endpoint {
                    status_code: status.as_u16(),
                    message: format!("Malformed response from Gemini API: {}", e),
                })
            })?
        };

        let generated = parsed.text();
        if generated.is_empty() {
            debug!("Endpoint returned no text, using placeholder");
            Ok(NO_RESPONSE_PLACEHOLDER.to_string())
        } else {
            Ok(generated)
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(
        name = "gemini_generate_text",
        skip(self, request),
        fields(
            model = %request.model_identifier(),
            max_output_tokens = request.effective_max_output_tokens(),
        )
    )]
    async fn generate_text(&self, request: &InvocationRequest) -> VellumResult<String> {
        match self.generate_internal(request).await {
            Ok(text) => {
                debug!(chars = text.len(), "Gemini call succeeded");
                Ok(text)
            }
            Err(e) => {
                warn!(error = %e.kind, kind = e.kind.label(), "Gemini API error");
                Err(e.into())
            }
        }
    }

    fn check(&self, request: &InvocationRequest) -> VellumResult<()> {
        Self::validate(request)?;
        self.resolve_key(request)?;
        Ok(())
    }

    fn provider(&self) -> Provider {
        Provider::Gemini
    }
}
