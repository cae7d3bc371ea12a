pub mod metrics;
pub mod prompt;
pub mod providers;

pub use prompt::build_note_prompt;
