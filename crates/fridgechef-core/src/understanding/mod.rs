//! Speech and language understanding contracts.
//!
//! Transcription and intent extraction are performed by external services.
//! This module fixes the structured results they must return and the traits
//! the application layer calls them through.

mod model;
mod service;

pub use model::{ClassifiedIntent, CookingIntent, RecommendationConditions};
pub use service::{LanguageUnderstanding, Transcriber};
