//! Recommendation services.

mod builder;
mod history;
mod usecase;

pub use builder::{
    Recommendation, RecommendationBuilder, RecommendationRequest, SoftConstraints,
    apply_soft_constraints,
};
pub use history::{InMemoryRecommendationHistory, RecommendationHistory};
pub use usecase::RecommendationUseCase;
