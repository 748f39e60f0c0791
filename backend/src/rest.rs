use std::path::Path;

use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use shared::{DbCheckResponse, HealthResponse};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{error, info};

use crate::db::DbConnection;

/// Application state shared by the handlers
#[derive(Clone)]
pub struct AppState {
    pub db: DbConnection,
}

impl AppState {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

/// CORS for any origin, or only `origin` when configured
pub fn cors_layer(origin: Option<&str>) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match origin {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS_ORIGIN: {}", origin))?;
            Ok(layer.allow_origin(origin))
        }
        None => Ok(layer.allow_origin(Any)),
    }
}

/// Create the Axum router. Unmatched paths are served from `frontend_dir`
/// when given.
pub fn create_router(app_state: AppState, cors: CorsLayer, frontend_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .route("/db", get(db_check));

    let router = match frontend_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.layer(cors).with_state(app_state)
}

/// Axum handler function for GET /health
async fn health() -> impl IntoResponse {
    info!("GET /health");
    Json(HealthResponse { ok: true })
}

/// Axum handler function for GET /db
async fn db_check(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /db");

    match state.db.ping().await {
        Ok(result) => (StatusCode::OK, Json(DbCheckResponse::success(result))).into_response(),
        Err(e) => {
            error!("Database check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DbCheckResponse::failure(e.to_string())),
            )
                .into_response()
        }
    }
}
