use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{NewClient, NewProvider, NewRating};

/// Request to register a provider
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProviderRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    #[serde(alias = "service")]
    pub specialization: String,
    #[validate(length(min = 1, max = 100))]
    pub location: String,
    #[validate(length(min = 1, max = 10))]
    #[serde(default)]
    pub gender: Option<String>,
    #[validate(length(min = 1, max = 50))]
    #[serde(default)]
    pub language: Option<String>,
    #[validate(length(min = 1, max = 100))]
    #[serde(default)]
    pub cultural_background: Option<String>,
}

impl From<CreateProviderRequest> for NewProvider {
    fn from(req: CreateProviderRequest) -> Self {
        Self {
            name: req.name,
            specialization: req.specialization,
            location: req.location,
            gender: req.gender,
            language: req.language,
            cultural_background: req.cultural_background,
        }
    }
}

/// Request to register a client
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub need: String,
    #[validate(length(min = 1, max = 100))]
    pub location: String,
    #[validate(length(min = 1, max = 10))]
    #[serde(default)]
    pub gender: Option<String>,
    #[validate(length(min = 1, max = 50))]
    #[serde(default)]
    pub language: Option<String>,
    #[validate(length(min = 1, max = 100))]
    #[serde(default)]
    pub cultural_background: Option<String>,
    #[validate(length(min = 1, max = 10))]
    #[serde(default)]
    pub preferred_gender: Option<String>,
    #[validate(length(min = 1, max = 100))]
    #[serde(default)]
    pub preferred_cultural_background: Option<String>,
}

impl From<CreateClientRequest> for NewClient {
    fn from(req: CreateClientRequest) -> Self {
        Self {
            name: req.name,
            need: req.need,
            location: req.location,
            gender: req.gender,
            language: req.language,
            cultural_background: req.cultural_background,
            preferred_gender: req.preferred_gender,
            preferred_cultural_background: req.preferred_cultural_background,
        }
    }
}

/// Request to link a client to a provider, optionally with a rating
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct CreateMappingRequest {
    #[validate(range(min = 1))]
    pub client_id: i64,
    #[validate(range(min = 1))]
    pub provider_id: i64,
    #[validate(range(min = 1, max = 5))]
    #[serde(default)]
    pub rating: Option<i64>,
}

impl From<CreateMappingRequest> for NewRating {
    fn from(req: CreateMappingRequest) -> Self {
        Self {
            client_id: req.client_id,
            provider_id: req.provider_id,
            rating: req.rating,
        }
    }
}
