//! Model bundle loading
//!
//! The bundle is a single JSON file produced at training time with five
//! keys: `model`, `encoder`, `features`, `train_min`, `train_max`. Key
//! names are a compatibility contract with the training pipeline; there
//! is no version field and no migration path. Loading happens once at
//! startup and any failure is fatal.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::model::{GbtModel, LabelEncoder};
use crate::schema::CATEGORICAL_FEATURE;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed artifact bundle: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid artifact: {0}")]
    Invalid(String),
}

/// Everything the dashboard needs, loaded once and immutable for the
/// process lifetime. Shared behind `Arc` in application state.
#[derive(Debug, Clone, Deserialize)]
pub struct FraudArtifact {
    pub model: GbtModel,
    pub encoder: LabelEncoder,
    /// Training-time feature order. Inference input must match it exactly.
    pub features: Vec<String>,
    /// Per-numeric-feature training minimum, UI bounds only
    pub train_min: HashMap<String, f64>,
    /// Per-numeric-feature training maximum, UI bounds only
    pub train_max: HashMap<String, f64>,

    #[serde(skip, default = "chrono::Utc::now")]
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

impl FraudArtifact {
    /// Load and validate the bundle from disk.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        if !path.exists() {
            return Err(ArtifactError::NotFound(path.to_path_buf()));
        }

        let raw = fs::read_to_string(path)?;
        let artifact: FraudArtifact = serde_json::from_str(&raw)?;
        artifact.validate()?;

        tracing::info!(
            features = artifact.features.len(),
            classes = artifact.encoder.classes.len(),
            trees = artifact.model.trees.len(),
            "Model artifact loaded from {}",
            path.display()
        );

        Ok(artifact)
    }

    /// Numeric features: the schema minus the categorical one.
    pub fn numeric_features(&self) -> impl Iterator<Item = &String> {
        self.features.iter().filter(|f| f.as_str() != CATEGORICAL_FEATURE)
    }

    fn validate(&self) -> Result<(), ArtifactError> {
        if self.features.is_empty() {
            return Err(ArtifactError::Invalid("feature schema is empty".to_string()));
        }

        if !self.features.iter().any(|f| f == CATEGORICAL_FEATURE) {
            return Err(ArtifactError::Invalid(format!(
                "schema is missing categorical feature '{}'",
                CATEGORICAL_FEATURE
            )));
        }

        if self.encoder.is_empty() {
            return Err(ArtifactError::Invalid("encoder has no classes".to_string()));
        }

        for feature in self.numeric_features() {
            let min = self.train_min.get(feature).ok_or_else(|| {
                ArtifactError::Invalid(format!("train_min missing feature '{}'", feature))
            })?;
            let max = self.train_max.get(feature).ok_or_else(|| {
                ArtifactError::Invalid(format!("train_max missing feature '{}'", feature))
            })?;

            if !min.is_finite() || !max.is_finite() || min > max {
                return Err(ArtifactError::Invalid(format!(
                    "bad training stats for '{}': min={}, max={}",
                    feature, min, max
                )));
            }
        }

        self.model
            .validate(self.features.len())
            .map_err(ArtifactError::Invalid)
    }
}
