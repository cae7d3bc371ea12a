//! AI provider abstractions and implementations.
//!
//! Handlers only see [`TextProvider`]; the Gemini adapter is the production
//! implementation and [`mock::MockTextProvider`] stands in for it in tests.

pub mod gemini;
pub mod mock;

use crate::models::ModelInfo;
use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// The provider answered but refused to produce usable output. A blocked
    /// candidate may still carry partial text, kept for server-side logs.
    #[error("Response blocked: {reason}")]
    Blocked {
        reason: String,
        diagnostic: Option<String>,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ProviderError {
    /// Text fragment the provider attached to the failure, if any.
    pub fn diagnostic_text(&self) -> Option<&str> {
        match self {
            ProviderError::Blocked {
                diagnostic: Some(text),
                ..
            } if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    /// Stable label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured(_) => "not_configured",
            ProviderError::NetworkError(_) => "network",
            ProviderError::RateLimited => "rate_limited",
            ProviderError::ApiError { .. } => "api",
            ProviderError::Blocked { .. } => "blocked",
            ProviderError::MalformedResponse(_) => "malformed_response",
        }
    }
}

/// Failure of the model listing call.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Failed to list models: {0}")]
pub struct ModelListError(#[from] pub ProviderError);

/// Result of a provider response.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    /// Text of the first candidate, as returned.
    pub text: String,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,

    /// Finish reason.
    pub finish_reason: FinishReason,
}

impl ProviderResponse {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            input_tokens: 0,
            output_tokens: 0,
            finish_reason: FinishReason::Complete,
        }
    }
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    Unspecified,
}

impl FinishReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinishReason::Complete => "complete",
            FinishReason::Length => "length",
            FinishReason::Unspecified => "unspecified",
        }
    }
}

/// Generation parameters for AI requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationParams {
    /// Temperature (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Top-p sampling.
    pub top_p: Option<f32>,

    /// Maximum output tokens.
    pub max_tokens: Option<i32>,
}

impl GenerationParams {
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.top_p.is_none() && self.max_tokens.is_none()
    }
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Provider name used in logs and metrics.
    fn name(&self) -> &str;

    /// Model the provider generates with.
    fn model(&self) -> &str;

    /// Generate a text response for a single prompt. One attempt, no retry.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;

    /// List models available to the configured account.
    async fn list_models(&self) -> Result<Vec<ModelInfo>, ModelListError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_blocked_errors_expose_diagnostics() {
        let blocked = ProviderError::Blocked {
            reason: "SAFETY".to_string(),
            diagnostic: Some("blocked".to_string()),
        };
        assert_eq!(blocked.diagnostic_text(), Some("blocked"));

        let api = ProviderError::ApiError {
            status: 500,
            message: "internal".to_string(),
        };
        assert_eq!(api.diagnostic_text(), None);
        assert_eq!(ProviderError::RateLimited.diagnostic_text(), None);
    }

    #[test]
    fn blocked_without_text_has_no_diagnostic() {
        let empty = ProviderError::Blocked {
            reason: "SAFETY".to_string(),
            diagnostic: Some(String::new()),
        };
        let none = ProviderError::Blocked {
            reason: "PROMPT_BLOCKED".to_string(),
            diagnostic: None,
        };

        assert_eq!(empty.diagnostic_text(), None);
        assert_eq!(none.diagnostic_text(), None);
    }

    #[test]
    fn model_list_error_wraps_provider_error() {
        let err = ModelListError::from(ProviderError::NetworkError("refused".to_string()));
        assert_eq!(
            err.to_string(),
            "Failed to list models: Network error: refused"
        );
    }

    #[test]
    fn empty_params_are_detected() {
        assert!(GenerationParams::default().is_empty());
        assert!(!GenerationParams {
            temperature: Some(0.2),
            ..Default::default()
        }
        .is_empty());
    }
}
