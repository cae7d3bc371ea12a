use crate::error::NotesError;
use crate::models::ModelListResponse;
use crate::services::metrics;
use crate::startup::AppState;
use axum::{extract::State, Json};
use std::time::Instant;

/// `GET /list-models`: best-effort listing of the provider's models.
#[tracing::instrument(name = "list_models", skip_all)]
pub async fn list_models(
    State(state): State<AppState>,
) -> Result<Json<ModelListResponse>, NotesError> {
    let provider = state.text_provider.as_ref();

    let started = Instant::now();
    let result = provider.list_models().await;
    metrics::record_provider_latency(
        provider.name(),
        "list_models",
        started.elapsed().as_secs_f64(),
    );

    match result {
        Ok(models) => {
            tracing::info!(count = models.len(), "Listed provider models");
            Ok(Json(ModelListResponse { models }))
        }
        Err(err) => {
            metrics::record_provider_error(provider.name(), "list_models", err.0.kind());
            tracing::error!(error = %err, "Error listing models");
            Err(err.into())
        }
    }
}
