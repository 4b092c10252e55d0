//! Invocation request type.

use std::fmt;

/// Sampling temperature used by every built-in action.
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Output token cap applied when a request leaves it unset.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 4000;

/// One immutable call against a text-generation endpoint.
///
/// Built fresh for every invocation. The API key, when present, overrides
/// the process-wide key and is redacted from `Debug` output.
///
/// # Examples
///
/// ```
/// use vellum_core::InvocationRequest;
///
/// let request = InvocationRequest::builder()
///     .instruction_prompt("Summarize the document.")
///     .user_content("SECTION 5. 510(k) SUMMARY")
///     .model_identifier("gemini-2.5-flash")
///     .api_key("secret-key")
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.temperature(), 0.5);
/// assert_eq!(request.effective_max_output_tokens(), 4000);
/// assert!(!format!("{:?}", request).contains("secret-key"));
/// ```
#[derive(Clone, PartialEq, derive_getters::Getters, derive_builder::Builder)]
pub struct InvocationRequest {
    /// System instruction sent ahead of the content
    #[builder(setter(into))]
    instruction_prompt: String,
    /// Text supplied by the user
    #[builder(setter(into))]
    user_content: String,
    /// Endpoint model identifier
    #[builder(setter(into))]
    model_identifier: String,
    /// Sampling temperature in [0, 1]
    #[builder(default = "DEFAULT_TEMPERATURE")]
    temperature: f32,
    /// Output token cap; `None` means the default
    #[builder(setter(strip_option), default)]
    max_output_tokens: Option<u32>,
    /// Per-call API key
    #[builder(setter(into, strip_option), default)]
    api_key: Option<String>,
}

impl InvocationRequest {
    /// Creates a new request builder.
    pub fn builder() -> InvocationRequestBuilder {
        InvocationRequestBuilder::default()
    }

    /// Output token cap with the default applied.
    pub fn effective_max_output_tokens(&self) -> u32 {
        self.max_output_tokens.unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS)
    }

    /// Copy of this request carrying the given per-call key.
    pub fn with_api_key(&self, api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..self.clone()
        }
    }
}

impl fmt::Debug for InvocationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationRequest")
            .field("instruction_prompt", &self.instruction_prompt)
            .field("user_content_len", &self.user_content.len())
            .field("model_identifier", &self.model_identifier)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
