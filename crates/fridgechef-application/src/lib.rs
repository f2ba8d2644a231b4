//! Application layer for Fridgechef.
//!
//! This crate holds the stateful part of the assistant: per-user cooking
//! sessions, the recommendation history, and the use cases that coordinate
//! them with the external collaborators defined in `fridgechef-core`.

pub mod assistant;
mod collaborator;
pub mod cooking;
pub mod inventory_advisor;
pub mod recommendation;
pub mod voice_usecase;

#[cfg(test)]
mod testing;

pub use assistant::{Collaborators, FridgeAssistant};
pub use cooking::{CookingSessionOrchestrator, InMemorySessionStore, SessionStore};
pub use inventory_advisor::{ExpiringReport, InventoryAdvisor};
pub use recommendation::{Recommendation, RecommendationBuilder, RecommendationRequest, RecommendationUseCase};
pub use voice_usecase::VoiceCommandUseCase;
