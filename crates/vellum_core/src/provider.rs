//! Provider families and the model catalog.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Model identifiers offered for selection.
pub const AVAILABLE_MODELS: &[&str] = &[
    "gemini-2.5-flash",
    "gemini-2.5-flash-lite",
    "gemini-3-flash-preview",
    "gemini-3-pro-preview",
    "gpt-4o-mini",
    "gpt-4.1-mini",
    "claude-3-5-sonnet",
    "grok-4-fast-reasoning",
    "grok-4-1-fast-non-reasoning",
];

/// External service family that performs text generation.
///
/// Only [`Provider::Gemini`] has a client; the others are declared so usage
/// counters and model selection can name them.
///
/// # Examples
///
/// ```
/// use vellum_core::Provider;
///
/// assert_eq!(Provider::for_model("gemini-2.5-flash"), Some(Provider::Gemini));
/// assert_eq!(Provider::for_model("claude-3-5-sonnet"), Some(Provider::Anthropic));
/// assert_eq!(Provider::OpenAi.name(), "openai");
/// assert!(!Provider::Xai.is_implemented());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Provider {
    /// Google Gemini hosted generative-text endpoint
    Gemini,
    /// OpenAI
    OpenAi,
    /// Anthropic
    Anthropic,
    /// xAI
    Xai,
}

impl Provider {
    /// Name used as the usage-counter key.
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
            Provider::Xai => "xai",
        }
    }

    /// Whether a client exists for this provider.
    pub fn is_implemented(&self) -> bool {
        matches!(self, Provider::Gemini)
    }

    /// Infer the provider family from a model identifier.
    pub fn for_model(model: &str) -> Option<Provider> {
        let model = model.trim();
        let model = model.strip_prefix("models/").unwrap_or(model);
        if model.starts_with("gemini") {
            Some(Provider::Gemini)
        } else if model.starts_with("gpt")
            || model.starts_with("o1")
            || model.starts_with("o3")
            || model.starts_with("o4")
        {
            Some(Provider::OpenAi)
        } else if model.starts_with("claude") {
            Some(Provider::Anthropic)
        } else if model.starts_with("grok") {
            Some(Provider::Xai)
        } else {
            None
        }
    }

    /// All provider families in declaration order.
    pub fn all() -> impl Iterator<Item = Provider> {
        Provider::iter()
    }
}

/// A catalog entry: model identifier plus its provider family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    id: &'static str,
    provider: Provider,
}

impl ModelInfo {
    /// Model identifier.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Provider family serving the model.
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Whether a request for this model can actually be dispatched.
    pub fn is_available(&self) -> bool {
        self.provider.is_implemented()
    }
}

/// The model catalog with provider families resolved.
pub fn catalog() -> Vec<ModelInfo> {
    AVAILABLE_MODELS
        .iter()
        .copied()
        .filter_map(|id| Provider::for_model(id).map(|provider| ModelInfo { id, provider }))
        .collect()
}
