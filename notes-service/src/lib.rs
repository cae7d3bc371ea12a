//! notes-service: turns a subject/grade/topic triple into study notes via a
//! generative-text provider.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
