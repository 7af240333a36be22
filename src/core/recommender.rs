use crate::models::{Client, Provider, Rating, ScoredProvider, ScoringWeights};
use crate::core::{
    scoring::{combined_score, Neighborhood},
    similarity::RatingMatrix,
};

/// Number of providers returned when no limit is configured
pub const DEFAULT_LIMIT: usize = 5;

/// Ranks providers for a client
///
/// # Pipeline Stages
/// 1. Build the rating matrix from stored mappings
/// 2. Find positively correlated neighbours of the client
/// 3. Score every provider (content + collaborative blend)
/// 4. Stable sort by score and truncate
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
    limit: usize,
}

impl Recommender {
    pub fn new(weights: ScoringWeights, limit: usize) -> Self {
        Self { weights, limit }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), DEFAULT_LIMIT)
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Score and rank `providers` for `client`
    ///
    /// # Arguments
    /// * `client` - The client being matched
    /// * `providers` - Every candidate provider, in enumeration order
    /// * `ratings` - All stored client-provider mappings
    ///
    /// # Returns
    /// At most `limit` providers, highest score first. Providers with equal
    /// scores keep their enumeration order.
    pub fn recommend(
        &self,
        client: &Client,
        providers: Vec<Provider>,
        ratings: &[Rating],
    ) -> Vec<ScoredProvider> {
        let matrix = RatingMatrix::from_ratings(ratings);
        let neighborhood = Neighborhood::build(client.id, &matrix);

        tracing::debug!(
            "Client {} has {} positively correlated neighbours among {} raters",
            client.id,
            neighborhood.len(),
            matrix.client_count()
        );

        let mut scored: Vec<ScoredProvider> = providers
            .into_iter()
            .map(|provider| {
                let score = combined_score(client, &provider, &neighborhood, &self.weights);
                ScoredProvider::new(provider, score)
            })
            .collect();

        // sort_by is stable, so ties keep provider order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(self.limit);

        scored
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
