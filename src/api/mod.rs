pub mod analyze_product;

use axum::{
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::clients::AiClient;
use crate::types::HealthResponse;

#[derive(Clone)]
pub struct AppState {
    /// `None` when no upstream credential is configured.
    pub ai_client: Option<Arc<dyn AiClient>>,
}

pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analyze", post(analyze_product::handler))
        .route("/health", get(health_check))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
