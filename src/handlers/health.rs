//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::model::{self, EngineStats};
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
    model: ModelInfo,
    engine: EngineStats,
}

#[derive(Serialize)]
pub struct ModelInfo {
    features: usize,
    classes: usize,
    trees: usize,
    loaded_at: chrono::DateTime<chrono::Utc>,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
        model: ModelInfo {
            features: state.artifact.features.len(),
            classes: state.artifact.encoder.classes.len(),
            trees: state.artifact.model.trees.len(),
            loaded_at: state.artifact.loaded_at,
        },
        engine: model::engine_stats(),
    })
}
