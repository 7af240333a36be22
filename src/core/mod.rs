// Core algorithm exports
pub mod recommender;
pub mod scoring;
pub mod similarity;

pub use recommender::{Recommender, DEFAULT_LIMIT};
pub use scoring::{content_score, combined_score, Neighborhood};
pub use similarity::{pearson_correlation, RatingMatrix, RatingVector};
