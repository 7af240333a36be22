// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Provider, Client, Rating, NewProvider, NewClient, NewRating, ScoredProvider, ScoringWeights, CollaborativeNormalization};
pub use requests::{CreateProviderRequest, CreateClientRequest, CreateMappingRequest};
pub use responses::{RecommendationsResponse, MessageResponse, HealthResponse, ErrorResponse};
