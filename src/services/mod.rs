// Service exports
pub mod recommendations;
pub mod seed;
pub mod sqlite;

pub use recommendations::{recommend_for_client, RecommendError};
pub use seed::{dummy_dataset, SeedData, SeedRating};
pub use sqlite::{SqliteStore, StoreError, SeedSummary};
