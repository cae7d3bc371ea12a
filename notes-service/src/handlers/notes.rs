use crate::error::NotesError;
use crate::models::{NoteRequest, NoteResponse};
use crate::services::metrics;
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::time::Instant;

/// `POST /generate-notes`.
///
/// An unreadable body (absent, not JSON, wrong field types) is treated like a
/// body with no fields and fails validation.
#[tracing::instrument(name = "generate_notes", skip_all)]
pub async fn generate_notes(
    State(state): State<AppState>,
    payload: Result<Json<NoteRequest>, JsonRejection>,
) -> Result<Json<NoteResponse>, NotesError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable note request body");
            NoteRequest::default()
        }
    };

    let subject = request.into_subject().map_err(|errors| {
        tracing::debug!(errors = %errors, "Rejected note request");
        metrics::record_notes_request("invalid");
        NotesError::Validation
    })?;

    let prompt = subject.prompt();
    let provider = state.text_provider.as_ref();

    let started = Instant::now();
    let result = provider.generate(&prompt, &state.generation_params).await;
    metrics::record_provider_latency(provider.name(), "generate", started.elapsed().as_secs_f64());

    match result {
        Ok(response) => {
            metrics::record_tokens(provider.model(), response.input_tokens, response.output_tokens);
            metrics::record_notes_request("generated");
            tracing::info!(
                subject = %subject.subject,
                grade_level = %subject.grade_level,
                topic = %subject.topic,
                finish_reason = response.finish_reason.as_str(),
                output_tokens = response.output_tokens,
                "Generated notes"
            );

            Ok(Json(NoteResponse {
                notes: response.text.trim().to_string(),
            }))
        }
        Err(err) => {
            metrics::record_provider_error(provider.name(), "generate", err.kind());
            tracing::error!(error = %err, "Error generating notes");

            if let Some(text) = err.diagnostic_text() {
                tracing::error!(diagnostic = %text, "Gemini API error");
                metrics::record_notes_request("provider_diagnostic");
            } else {
                metrics::record_notes_request("provider_error");
            }

            Err(err.into())
        }
    }
}
