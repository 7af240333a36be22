//! Provider Recommender - ranks care providers for a client
//!
//! Providers are scored by blending an attribute-match content score with a
//! collaborative score drawn from clients whose ratings correlate (Pearson)
//! with the target client's.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{Recommender, pearson_correlation, content_score, combined_score};
pub use models::{Provider, Client, Rating, ScoredProvider, ScoringWeights, RecommendationsResponse};
pub use services::{SqliteStore, StoreError, RecommendError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let empty = core::RatingVector::new();
        assert_eq!(pearson_correlation(&empty, &empty), 0.0);
        assert_eq!(Recommender::default().limit(), 5);
    }
}
