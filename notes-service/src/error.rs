//! Caller-facing error taxonomy.
//!
//! Every variant renders a fixed message; provider details are logged by the
//! handlers and never included in a response body.

use crate::models::ErrorBody;
use crate::services::providers::{ModelListError, ProviderError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotesError {
    #[error("Subject, grade level, and topic are required.")]
    Validation,

    /// The provider failed but attached a text fragment to the failure.
    #[error("Gemini API Error")]
    ProviderDiagnostic(#[source] ProviderError),

    #[error("Failed to generate notes.")]
    Generation(#[source] ProviderError),

    #[error("Failed to list models.")]
    ModelList(#[source] ModelListError),
}

impl NotesError {
    pub fn status(&self) -> StatusCode {
        match self {
            NotesError::Validation => StatusCode::BAD_REQUEST,
            NotesError::ProviderDiagnostic(_)
            | NotesError::Generation(_)
            | NotesError::ModelList(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ProviderError> for NotesError {
    fn from(err: ProviderError) -> Self {
        if err.diagnostic_text().is_some() {
            NotesError::ProviderDiagnostic(err)
        } else {
            NotesError::Generation(err)
        }
    }
}

impl From<ModelListError> for NotesError {
    fn from(err: ModelListError) -> Self {
        NotesError::ModelList(err)
    }
}

impl IntoResponse for NotesError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
