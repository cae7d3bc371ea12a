//! Request and response shapes for the notes HTTP surface.

pub mod catalog;
pub mod note;

pub use catalog::{ModelInfo, ModelListResponse};
pub use note::{ErrorBody, NoteRequest, NoteResponse, NoteSubject};
