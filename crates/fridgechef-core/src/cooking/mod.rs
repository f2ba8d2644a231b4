//! Cooking session domain module.
//!
//! # Module Structure
//!
//! - `session`: the per-user guided-cooking state (`CookingSession`, `StepPosition`)
//! - `steps`: instruction text to step list (`split_into_steps`)
//! - `response`: what the orchestrator answers (`CookingResponse`, `ActionType`, `Rejection`)

mod response;
mod session;
mod steps;

pub use response::{ActionType, CookingResponse, Rejection, StatusClass};
pub use session::{Advance, CookingSession, StepPosition};
pub use steps::split_into_steps;
