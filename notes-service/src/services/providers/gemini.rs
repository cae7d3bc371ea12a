//! Gemini AI provider implementation.
//!
//! Implements text generation and model listing against Google's Gemini REST
//! API. The API key travels in the `x-goog-api-key` header so it never shows
//! up in request URLs or transport error messages.

use super::{
    FinishReason, GenerationParams, ModelListError, ProviderError, ProviderResponse, TextProvider,
};
use crate::models::ModelInfo;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Models requested per listing page.
const MODEL_PAGE_SIZE: u32 = 100;

/// Upper bound on listing pages followed for one call.
const MAX_MODEL_PAGES: usize = 20;

/// Finish reasons for which the candidate is not usable output.
const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "RECITATION",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
    "LANGUAGE",
    "OTHER",
];

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Secret<String>,
    pub model: String,
    pub api_base: String,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextProvider {
    /// The HTTP client keeps reqwest's defaults; no request timeout is imposed.
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        if config.api_key.expose_secret().is_empty() {
            return Err(ProviderError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ));
        }

        let client = Client::builder().build().map_err(|e| {
            ProviderError::NotConfigured(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { config, client })
    }

    fn base_url(&self) -> &str {
        self.config.api_base.trim_end_matches('/')
    }

    /// Build the API URL for the configured model and method.
    fn model_url(&self, method: &str) -> String {
        let model = self
            .config
            .model
            .strip_prefix("models/")
            .unwrap_or(&self.config.model);
        format!("{}/models/{}:{}", self.base_url(), model, method)
    }

    fn models_url(&self) -> String {
        format!("{}/models", self.base_url())
    }

    /// Build generation config from parameters.
    fn build_generation_config(params: &GenerationParams) -> Option<GenerationConfig> {
        if params.is_empty() {
            return None;
        }

        Some(GenerationConfig {
            temperature: params.temperature,
            top_p: params.top_p,
            max_output_tokens: params.max_tokens,
        })
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: Self::build_generation_config(params),
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.model_url("generateContent"))
            .header(API_KEY_HEADER, self.config.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(network_error)?;

        let response = error_for_status(response).await?;

        let api_response: GenerateContentResponse = response.json().await.map_err(|e| {
            ProviderError::MalformedResponse(format!("Failed to parse response: {}", e))
        })?;

        api_response.into_provider_response()
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, ModelListError> {
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        for _ in 0..MAX_MODEL_PAGES {
            let mut query = vec![("pageSize", MODEL_PAGE_SIZE.to_string())];
            if let Some(token) = page_token.take() {
                query.push(("pageToken", token));
            }

            let response = self
                .client
                .get(self.models_url())
                .header(API_KEY_HEADER, self.config.api_key.expose_secret())
                .query(&query)
                .send()
                .await
                .map_err(network_error)?;

            let response = error_for_status(response).await?;

            let page: ListModelsResponse = response.json().await.map_err(|e| {
                ProviderError::MalformedResponse(format!("Failed to parse model list: {}", e))
            })?;

            models.extend(page.models);

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => return Ok(models),
            }
        }

        tracing::warn!(
            pages = MAX_MODEL_PAGES,
            count = models.len(),
            "Model listing truncated after page limit"
        );
        Ok(models)
    }
}

fn network_error(e: reqwest::Error) -> ProviderError {
    ProviderError::NetworkError(e.without_url().to_string())
}

/// Map non-2xx responses to provider errors, preferring Gemini's own message.
async fn error_for_status(response: Response) -> Result<Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ProviderError::RateLimited);
    }

    let error_text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorEnvelope>(&error_text)
        .map(|envelope| envelope.error.message)
        .unwrap_or(error_text);

    Err(ProviderError::ApiError {
        status: status.as_u16(),
        message,
    })
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

impl Candidate {
    fn first_text(&self) -> Option<&str> {
        self.content
            .as_ref()
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<i32>,
    candidates_token_count: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GenerateContentResponse {
    fn into_provider_response(self) -> Result<ProviderResponse, ProviderError> {
        let Some(candidate) = self.candidates.first() else {
            if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
                return Err(ProviderError::Blocked {
                    reason,
                    diagnostic: None,
                });
            }
            return Err(ProviderError::MalformedResponse(
                "Response contained no candidates".to_string(),
            ));
        };

        let text = candidate.first_text();

        let finish_reason = match candidate.finish_reason.as_deref() {
            Some("STOP") => FinishReason::Complete,
            Some("MAX_TOKENS") => FinishReason::Length,
            // Text on a blocked candidate is kept for diagnostics only and is
            // never returned as notes.
            Some(reason) if BLOCKING_FINISH_REASONS.contains(&reason) => {
                return Err(ProviderError::Blocked {
                    reason: reason.to_string(),
                    diagnostic: text.map(str::to_string),
                });
            }
            _ => FinishReason::Unspecified,
        };

        let text = text.ok_or_else(|| {
            ProviderError::MalformedResponse("First candidate has no text part".to_string())
        })?;

        let usage = self.usage_metadata.unwrap_or_default();

        Ok(ProviderResponse {
            text: text.to_string(),
            input_tokens: usage.prompt_token_count.unwrap_or(0),
            output_tokens: usage.candidates_token_count.unwrap_or(0),
            finish_reason,
        })
    }
}
