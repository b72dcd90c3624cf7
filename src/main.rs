//! EthShield Dashboard Server
//!
//! Single-page dashboard for a pre-trained Ethereum transaction fraud
//! classifier. The server loads the model bundle once at startup, then
//! answers three questions per page: what widgets to render, what the
//! fraud probability is for a submitted input record, and whether the
//! process is alive.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   ETHSHIELD DASHBOARD                    │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌──────────┐   ┌───────────┐   ┌─────────────────────┐  │
//! │  │  Page    │   │  Widget   │   │  Prediction         │  │
//! │  │  (HTML)  │   │  Schema   │   │  (assemble→predict  │  │
//! │  │          │   │           │   │   →risk band)       │  │
//! │  └────┬─────┘   └─────┬─────┘   └──────────┬──────────┘  │
//! │       └───────────────┼────────────────────┘             │
//! │                       ▼                                  │
//! │              ┌─────────────────┐                         │
//! │              │  FraudArtifact  │  (immutable after load) │
//! │              └─────────────────┘                         │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod artifact;
mod config;
mod error;
mod handlers;
mod model;
mod risk;
mod schema;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "ethshield=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("EthShield dashboard server starting...");
    tracing::info!("Artifact: {}", config.artifact_path.display());

    // Startup precondition: no artifact, no process
    let artifact = match artifact::FraudArtifact::load(&config.artifact_path) {
        Ok(artifact) => artifact,
        Err(err) => {
            tracing::error!("Failed to load model artifact: {}", err);
            std::process::exit(1);
        }
    };

    // Build application state
    let state = AppState {
        artifact: Arc::new(artifact),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Dashboard listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server port");
    axum::serve(listener, app).await.expect("Server error");
}

/// Shared application state. The artifact is read-only after load, so
/// no locking is needed around inference.
#[derive(Clone)]
pub struct AppState {
    pub artifact: Arc<artifact::FraudArtifact>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard::page))
        .route("/health", get(handlers::health::check))
        .route("/api/v1/schema", get(handlers::widgets::get_schema))
        .route("/api/v1/predict", post(handlers::predict::predict))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::util::ServiceExt;

    use crate::artifact::FraudArtifact;
    use crate::model::{GbtModel, LabelEncoder};
    use crate::schema::CATEGORICAL_FEATURE;

    fn test_router() -> Router {
        let artifact = FraudArtifact {
            model: GbtModel::constant(0.1),
            encoder: LabelEncoder {
                classes: vec!["ERC20".to_string(), "None".to_string()],
            },
            features: vec!["amount".to_string(), CATEGORICAL_FEATURE.to_string()],
            train_min: HashMap::from([("amount".to_string(), 0.0)]),
            train_max: HashMap::from([("amount".to_string(), 100.0)]),
            loaded_at: chrono::Utc::now(),
        };
        create_router(AppState {
            artifact: Arc::new(artifact),
            config: config::Config::from_env(),
        })
    }

    #[tokio::test]
    async fn test_page_and_health_routes() {
        let app = test_router();

        let res = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let res = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_predict_route() {
        let app = test_router();

        let body = serde_json::json!({
            "features": {"amount": 12.0},
            "token_type": "None"
        });
        let res = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/predict")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_predict_rejects_unknown_token() {
        let app = test_router();

        let body = serde_json::json!({
            "features": {"amount": 12.0},
            "token_type": "DOGE"
        });
        let res = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/predict")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
