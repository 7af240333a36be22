use serde::{Deserialize, Serialize};

/// Care provider offering a service in a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub location: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub cultural_background: Option<String>,
}

/// Client looking for a provider
///
/// `preferred_gender` and `preferred_cultural_background` feed content matching;
/// the client's own demographic fields are informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub need: String,
    pub location: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub cultural_background: Option<String>,
    #[serde(default)]
    pub preferred_gender: Option<String>,
    #[serde(default)]
    pub preferred_cultural_background: Option<String>,
}

/// Client-provider mapping, optionally carrying a 1-5 rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: i64,
    pub client_id: i64,
    pub provider_id: i64,
    pub rating: Option<i64>,
}

/// Fields for a provider that has not been stored yet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProvider {
    pub name: String,
    pub specialization: String,
    pub location: String,
    pub gender: Option<String>,
    pub language: Option<String>,
    pub cultural_background: Option<String>,
}

/// Fields for a client that has not been stored yet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub need: String,
    pub location: String,
    pub gender: Option<String>,
    pub language: Option<String>,
    pub cultural_background: Option<String>,
    pub preferred_gender: Option<String>,
    pub preferred_cultural_background: Option<String>,
}

/// Fields for a mapping that has not been stored yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRating {
    pub client_id: i64,
    pub provider_id: i64,
    pub rating: Option<i64>,
}

/// Provider ranked for a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProvider {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub location: String,
    pub gender: Option<String>,
    pub language: Option<String>,
    pub cultural_background: Option<String>,
    pub score: f64,
}

impl ScoredProvider {
    pub fn new(provider: Provider, score: f64) -> Self {
        Self {
            id: provider.id,
            name: provider.name,
            specialization: provider.specialization,
            location: provider.location,
            gender: provider.gender,
            language: provider.language,
            cultural_background: provider.cultural_background,
            score,
        }
    }
}

/// How the accumulated neighbour score is divided
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollaborativeNormalization {
    /// Divide by the number of positively correlated neighbours
    #[default]
    NeighborCount,
    /// Divide by the sum of positive similarities
    SimilaritySum,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Points for an exact location match
    pub location: f64,
    /// Points for provider gender matching the client's preference
    pub gender: f64,
    /// Points for provider background matching the client's preference
    pub cultural_background: f64,
    /// Share of the content score in the blend
    pub content: f64,
    /// Share of the normalized collaborative score in the blend
    pub collaborative: f64,
    /// Top of the rating scale, used to normalize collaborative scores to 0-100
    pub max_rating: f64,
    pub normalization: CollaborativeNormalization,
    /// Treat two absent attributes as a non-match
    pub strict_absent: bool,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            location: 50.0,
            gender: 30.0,
            cultural_background: 20.0,
            content: 0.6,
            collaborative: 0.4,
            max_rating: 5.0,
            normalization: CollaborativeNormalization::NeighborCount,
            strict_absent: false,
        }
    }
}
