//! Prompt construction for note generation.

use crate::models::NoteSubject;

/// Build the instruction sent to the provider.
///
/// Values are substituted verbatim; callers validate beforehand.
pub fn build_note_prompt(subject: &str, grade_level: &str, topic: &str) -> String {
    format!("Generate detailed notes on {topic} for {grade_level} {subject} students.")
}

impl NoteSubject {
    pub fn prompt(&self) -> String {
        build_note_prompt(&self.subject, &self.grade_level, &self.topic)
    }
}
