//! Prediction handler
//!
//! One request per widget change: the page posts the full input record
//! and renders the returned result. No batching, no caching.

use std::collections::HashMap;
use std::time::Instant;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::risk::{self, RiskBand};
use crate::{model, schema, AppResult, AppState};

/// One submitted input record
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// Numeric feature values, keyed by feature name
    pub features: HashMap<String, f64>,
    /// Selected categorical value, must be one of the encoder's classes
    pub token_type: String,
}

/// One prediction result
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Positive-class (fraud) probability in [0, 1]
    pub probability: f64,
    pub label: String,
    pub message: String,
    pub color: String,
    /// Progress bar value, clamped to 1.0
    pub progress: f64,
}

pub async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> AppResult<Json<PredictResponse>> {
    let started = Instant::now();

    let row = schema::assemble(&state.artifact, &req.features, &req.token_type)?;
    let probability = state.artifact.model.predict_proba(row.view());

    model::record_inference(started.elapsed().as_micros() as u64);

    let band = RiskBand::from_probability(probability);
    tracing::debug!(probability, band = band.label(), "prediction served");

    Ok(Json(PredictResponse {
        probability,
        label: band.label().to_string(),
        message: band.message().to_string(),
        color: band.color().to_string(),
        progress: risk::progress(probability),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::artifact::FraudArtifact;
    use crate::config::Config;
    use crate::model::{GbtModel, LabelEncoder};
    use crate::schema::CATEGORICAL_FEATURE;

    /// Artifact from the end-to-end scenario: two numeric features, two
    /// token classes, a stub model scoring 0.92 for any input.
    fn stub_state() -> AppState {
        let artifact = FraudArtifact {
            model: GbtModel::constant(0.92),
            encoder: LabelEncoder {
                classes: vec!["ERC20".to_string(), "None".to_string()],
            },
            features: vec![
                "amount".to_string(),
                "avg_gas".to_string(),
                CATEGORICAL_FEATURE.to_string(),
            ],
            train_min: HashMap::from([("amount".to_string(), 0.0), ("avg_gas".to_string(), 10.0)]),
            train_max: HashMap::from([("amount".to_string(), 100.0), ("avg_gas".to_string(), 50.0)]),
            loaded_at: chrono::Utc::now(),
        };

        AppState {
            artifact: Arc::new(artifact),
            config: Config::from_env(),
        }
    }

    fn request() -> PredictRequest {
        PredictRequest {
            features: HashMap::from([
                ("amount".to_string(), 50.0),
                ("avg_gas".to_string(), 30.0),
            ]),
            token_type: "ERC20".to_string(),
        }
    }

    #[test]
    fn test_end_to_end_prediction() {
        let state = stub_state();

        let Json(resp) = tokio_test::block_on(predict(State(state), Json(request()))).unwrap();

        assert!((resp.probability - 0.92).abs() < 1e-9);
        assert_eq!(format!("{:.2}%", resp.probability * 100.0), "92.00%");
        assert_eq!(resp.label, "Very High Risk");
        assert_eq!(resp.color, "#ff5252");
        assert!((resp.progress - 0.92).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_token_type_fails_request() {
        let state = stub_state();
        let mut req = request();
        req.token_type = "DOGE".to_string();

        let err = tokio_test::block_on(predict(State(state), Json(req))).unwrap_err();
        assert!(matches!(err, crate::AppError::UnknownCategory(_)));
    }

    #[test]
    fn test_missing_numeric_value_fails_request() {
        let state = stub_state();
        let mut req = request();
        req.features.remove("avg_gas");

        let err = tokio_test::block_on(predict(State(state), Json(req))).unwrap_err();
        assert!(matches!(err, crate::AppError::MissingFeature(_)));
    }
}
