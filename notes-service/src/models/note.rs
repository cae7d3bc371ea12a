//! Note generation request/response bodies.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Inbound body of `POST /generate-notes`.
///
/// Fields are optional at the wire level so that a missing field and an empty
/// one fail the same validation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NoteRequest {
    #[validate(required, length(min = 1))]
    pub subject: Option<String>,

    #[validate(required, length(min = 1))]
    pub grade_level: Option<String>,

    #[validate(required, length(min = 1))]
    pub topic: Option<String>,
}

/// A request that passed validation; all three fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSubject {
    pub subject: String,
    pub grade_level: String,
    pub topic: String,
}

impl NoteRequest {
    /// Validate and unwrap into a [`NoteSubject`].
    pub fn into_subject(self) -> Result<NoteSubject, ValidationErrors> {
        self.validate()?;

        let (Some(subject), Some(grade_level), Some(topic)) =
            (self.subject, self.grade_level, self.topic)
        else {
            return Err(ValidationErrors::new());
        };

        Ok(NoteSubject {
            subject,
            grade_level,
            topic,
        })
    }
}

/// Body of a successful `POST /generate-notes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteResponse {
    pub notes: String,
}

/// Error body shared by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
