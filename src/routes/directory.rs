use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::models::{
    CreateClientRequest, CreateMappingRequest, CreateProviderRequest, NewClient, NewProvider,
    NewRating,
};
use crate::routes::{errors::ApiError, AppState};

/// Configure provider, client and mapping routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/providers/", web::post().to(create_provider))
        .route("/providers/", web::get().to(list_providers))
        .route("/providers/{id}", web::get().to(get_provider))
        .route("/clients/", web::post().to(create_client))
        .route("/clients/", web::get().to(list_clients))
        .route("/clients/{id}", web::get().to(get_client))
        .route("/client-provider-mapping/", web::post().to(create_mapping))
        .route("/client-provider-mapping/", web::get().to(list_mappings));
}

/// Register a provider
///
/// POST /providers/
///
/// Request body:
/// ```json
/// {
///   "name": "Dr. Alice",
///   "specialization": "Psychologist",
///   "location": "New York",
///   "gender": "Female",
///   "language": "English",
///   "cultural_background": "American"
/// }
/// ```
async fn create_provider(
    state: web::Data<AppState>,
    req: web::Json<CreateProviderRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_provider request: {:?}", errors);
        return Err(errors.into());
    }

    let provider = state.store.create_provider(&NewProvider::from(req)).await?;
    tracing::info!("Created provider {} ({})", provider.id, provider.name);

    Ok(HttpResponse::Ok().json(provider))
}

async fn list_providers(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let providers = state.store.list_providers().await?;
    Ok(HttpResponse::Ok().json(providers))
}

async fn get_provider(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    match state.store.get_provider(id).await? {
        Some(provider) => Ok(HttpResponse::Ok().json(provider)),
        None => Err(ApiError::NotFound(format!("Provider {} not found", id))),
    }
}

/// Register a client
///
/// POST /clients/
///
/// Request body:
/// ```json
/// {
///   "name": "John Doe",
///   "need": "Anxiety",
///   "location": "New York",
///   "preferred_gender": "Female",
///   "preferred_cultural_background": "American"
/// }
/// ```
async fn create_client(
    state: web::Data<AppState>,
    req: web::Json<CreateClientRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_client request: {:?}", errors);
        return Err(errors.into());
    }

    let client = state.store.create_client(&NewClient::from(req)).await?;
    tracing::info!("Created client {} ({})", client.id, client.name);

    Ok(HttpResponse::Ok().json(client))
}

async fn list_clients(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let clients = state.store.list_clients().await?;
    Ok(HttpResponse::Ok().json(clients))
}

async fn get_client(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    match state.store.get_client(id).await? {
        Some(client) => Ok(HttpResponse::Ok().json(client)),
        None => Err(ApiError::NotFound(format!("Client {} not found", id))),
    }
}

/// Link a client to a provider
///
/// POST /client-provider-mapping/
///
/// Request body:
/// ```json
/// {
///   "client_id": 1,
///   "provider_id": 2,
///   "rating": 4
/// }
/// ```
///
/// Fails with 404 when either id is unknown; nothing is written in that case.
async fn create_mapping(
    state: web::Data<AppState>,
    req: web::Json<CreateMappingRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_mapping request: {:?}", errors);
        return Err(errors.into());
    }

    let mapping = state.store.create_rating(&NewRating::from(req)).await.map_err(|e| {
        tracing::warn!(
            "Rejected mapping client {} -> provider {}: {}",
            req.client_id,
            req.provider_id,
            e
        );
        e
    })?;

    Ok(HttpResponse::Ok().json(mapping))
}

async fn list_mappings(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let mappings = state.store.list_ratings().await?;
    Ok(HttpResponse::Ok().json(mappings))
}
