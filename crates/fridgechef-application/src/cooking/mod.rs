//! Cooking-mode services.
//!
//! - `store`: per-user session storage with atomic transitions
//! - `orchestrator`: the guided-cooking state machine
//! - `dispatcher`: intent routing into the orchestrator
//! - `messages`: spoken replies

mod dispatcher;
mod messages;
mod orchestrator;
mod store;

pub use orchestrator::CookingSessionOrchestrator;
pub use store::{
    InMemorySessionStore, SessionChange, SessionMutation, SessionStore, spawn_session_sweeper,
};

pub(crate) use messages::no_speech;
