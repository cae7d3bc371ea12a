//! HTTP handlers for the notes service.

pub mod catalog;
pub mod health;
pub mod metrics;
pub mod notes;

pub use catalog::list_models;
pub use health::health_check;
pub use notes::generate_notes;
