//! Domain layer for Fridgechef.
//!
//! Holds the cooking-session and recipe models, the shared error type and the
//! traits through which the application layer reaches its external
//! collaborators (recipe catalog, inventory, speech and language services).

pub mod config;
pub mod cooking;
pub mod error;
pub mod inventory;
pub mod recipe;
pub mod understanding;

// Re-export common error type
pub use error::{FridgeError, Result};
