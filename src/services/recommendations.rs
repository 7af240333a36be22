use thiserror::Error;

use crate::core::Recommender;
use crate::models::ScoredProvider;
use crate::services::sqlite::{SqliteStore, StoreError};

/// Errors that can occur while recommending providers
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("Client {0} not found")]
    ClientNotFound(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Rank providers for a stored client
///
/// The client is looked up before anything is scored; an unknown id fails
/// with `ClientNotFound`. Providers and ratings are read fresh on every call.
pub async fn recommend_for_client(
    store: &SqliteStore,
    recommender: &Recommender,
    client_id: i64,
) -> Result<Vec<ScoredProvider>, RecommendError> {
    let client = store
        .get_client(client_id)
        .await?
        .ok_or(RecommendError::ClientNotFound(client_id))?;

    let providers = store.list_providers().await?;
    let ratings = store.list_ratings().await?;

    tracing::debug!(
        "Scoring {} providers for client {} against {} mappings",
        providers.len(),
        client_id,
        ratings.len()
    );

    Ok(recommender.recommend(&client, providers, &ratings))
}
