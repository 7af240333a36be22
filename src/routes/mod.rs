// Route exports
pub mod directory;
pub mod errors;
pub mod recommendations;

use actix_web::web;

use crate::core::Recommender;
use crate::services::SqliteStore;

pub use errors::{handle_json_payload_error, handle_path_error, ApiError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: SqliteStore,
    pub recommender: Recommender,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::PathConfig::default().error_handler(handle_path_error))
        .configure(recommendations::configure)
        .configure(directory::configure);
}
