//! Mock provider for testing.
//!
//! Replies with a fixed outcome and counts calls, so tests can assert that a
//! request never reached the provider.

use super::{GenerationParams, ModelListError, ProviderError, ProviderResponse, TextProvider};
use crate::models::ModelInfo;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock text provider for testing.
pub struct MockTextProvider {
    reply: Result<String, ProviderError>,
    models: Result<Vec<ModelInfo>, ProviderError>,
    generate_calls: AtomicUsize,
    list_calls: AtomicUsize,
}

impl MockTextProvider {
    /// Provider whose every generation returns `text` verbatim.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            models: Ok(Vec::new()),
            generate_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
        }
    }

    /// Provider whose every generation fails with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            reply: Err(error),
            ..Self::replying("")
        }
    }

    pub fn with_models(mut self, models: Vec<ModelInfo>) -> Self {
        self.models = Ok(models);
        self
    }

    pub fn with_model_list_error(mut self, error: ProviderError) -> Self {
        self.models = Err(error);
        self
    }

    pub fn generate_calls(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);

        self.reply.clone().map(ProviderResponse::from_text)
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, ModelListError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        self.models.clone().map_err(ModelListError::from)
    }
}
