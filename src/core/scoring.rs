use crate::core::similarity::{pearson_correlation, RatingMatrix, RatingVector};
use crate::models::{Client, CollaborativeNormalization, Provider, ScoringWeights};

/// Calculate the content score (0-100) of a provider for a client
///
/// Scoring formula:
/// score = (
///     location match              * 50 +
///     gender == preferred gender  * 30 +
///     background == preferred     * 20
/// )
///
/// Comparisons are exact. Two absent values match unless `strict_absent` is set.
pub fn content_score(client: &Client, provider: &Provider, weights: &ScoringWeights) -> f64 {
    let mut score = 0.0;

    if provider.location == client.location {
        score += weights.location;
    }
    if attribute_matches(
        provider.gender.as_deref(),
        client.preferred_gender.as_deref(),
        weights.strict_absent,
    ) {
        score += weights.gender;
    }
    if attribute_matches(
        provider.cultural_background.as_deref(),
        client.preferred_cultural_background.as_deref(),
        weights.strict_absent,
    ) {
        score += weights.cultural_background;
    }

    score
}

#[inline]
fn attribute_matches(offered: Option<&str>, preferred: Option<&str>, strict_absent: bool) -> bool {
    match (offered, preferred) {
        (None, None) => !strict_absent,
        (offered, preferred) => offered == preferred,
    }
}

/// Other clients positively correlated with the target client
///
/// Similarities depend only on the target client, so one neighbourhood serves
/// every candidate provider of a recommendation run.
#[derive(Debug, Clone, Default)]
pub struct Neighborhood {
    neighbors: Vec<(f64, RatingVector)>,
}

impl Neighborhood {
    /// Correlate `client_id` against every other client in `matrix`
    pub fn build(client_id: i64, matrix: &RatingMatrix) -> Self {
        let target = matrix.ratings_of(client_id);

        let neighbors = matrix
            .iter()
            .filter(|(other_id, _)| *other_id != client_id)
            .filter_map(|(_, ratings)| {
                let similarity = pearson_correlation(&target, ratings);
                (similarity > 0.0).then(|| (similarity, ratings.clone()))
            })
            .collect();

        Self { neighbors }
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Similarity-weighted neighbour rating of a provider, on the rating scale
    ///
    /// Neighbours who never rated the provider contribute 0 but still count
    /// towards the divisor.
    pub fn collaborative_score(
        &self,
        provider_id: i64,
        normalization: CollaborativeNormalization,
    ) -> f64 {
        if self.neighbors.is_empty() {
            return 0.0;
        }

        let weighted: f64 = self
            .neighbors
            .iter()
            .map(|(similarity, ratings)| {
                similarity * ratings.get(&provider_id).copied().unwrap_or(0.0)
            })
            .sum();

        let divisor = match normalization {
            CollaborativeNormalization::NeighborCount => self.neighbors.len() as f64,
            CollaborativeNormalization::SimilaritySum => {
                self.neighbors.iter().map(|(similarity, _)| similarity).sum()
            }
        };

        if divisor > 0.0 {
            weighted / divisor
        } else {
            0.0
        }
    }
}

/// Blend content and collaborative scores into a score capped at 100
pub fn combined_score(
    client: &Client,
    provider: &Provider,
    neighborhood: &Neighborhood,
    weights: &ScoringWeights,
) -> f64 {
    let content = content_score(client, provider, weights);
    let collaborative = neighborhood.collaborative_score(provider.id, weights.normalization);

    // Rating scale -> 0-100
    let collaborative_normalized = if weights.max_rating > 0.0 {
        collaborative / weights.max_rating * 100.0
    } else {
        0.0
    };

    let total = content * weights.content + collaborative_normalized * weights.collaborative;

    total.min(100.0)
}
