use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::nik::handlers;
use crate::features::nik::services::NikService;

/// Create routes for the NIK feature
pub fn routes(service: Arc<NikService>) -> Router {
    Router::new()
        .route("/api/nik/validate", get(handlers::validate_nik_get))
        .route("/api/validate/nik", post(handlers::validate_nik_post))
        .route("/api/nik/generate", post(handlers::generate_nik))
        .with_state(service)
}
