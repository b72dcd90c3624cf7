//! Widget schema derivation and feature row assembly
//!
//! The input collector turns training statistics into slider bounds and
//! the encoder's classes into dropdown options. The assembler packs
//! submitted values into one row in the exact training-time feature
//! order; the model only knows positions, so a reordered row would
//! silently corrupt predictions.

use std::collections::HashMap;

use ndarray::Array1;
use serde::Serialize;

use crate::artifact::FraudArtifact;
use crate::error::{AppError, AppResult};

/// The one categorical feature in the transaction schema
pub const CATEGORICAL_FEATURE: &str = "erc20_most_rec_token_type";

/// Sliders extend past the training maximum by this factor, bounding
/// inference to a plausible-extrapolation region.
pub const SLIDER_HEADROOM: f64 = 1.2;

/// One numeric input widget
#[derive(Debug, Clone, Serialize)]
pub struct SliderSpec {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

/// One categorical input widget, options closed over the encoder's classes
#[derive(Debug, Clone, Serialize)]
pub struct DropdownSpec {
    pub name: String,
    pub options: Vec<String>,
}

/// Everything the page needs to render its input widgets
#[derive(Debug, Clone, Serialize)]
pub struct WidgetSchema {
    pub sliders: Vec<SliderSpec>,
    pub dropdown: DropdownSpec,
}

impl WidgetSchema {
    /// Derive widget specs from the loaded artifact. Slider order
    /// follows the feature schema.
    pub fn derive(artifact: &FraudArtifact) -> Self {
        let sliders = artifact
            .numeric_features()
            .map(|name| {
                // Stats are validated present at load time
                let min = artifact.train_min.get(name).copied().unwrap_or(0.0);
                let max = artifact.train_max.get(name).copied().unwrap_or(min) * SLIDER_HEADROOM;
                SliderSpec {
                    name: name.clone(),
                    min,
                    max,
                    default: (min + max) / 2.0,
                    step: (max - min) / 100.0,
                }
            })
            .collect();

        WidgetSchema {
            sliders,
            dropdown: DropdownSpec {
                name: CATEGORICAL_FEATURE.to_string(),
                options: artifact.encoder.classes.clone(),
            },
        }
    }
}

/// Pack submitted values into a feature row matching the schema order.
/// The categorical value goes through the loaded encoder; numeric
/// values are copied as-is.
pub fn assemble(
    artifact: &FraudArtifact,
    values: &HashMap<String, f64>,
    token_type: &str,
) -> AppResult<Array1<f64>> {
    let mut row = Vec::with_capacity(artifact.features.len());

    for feature in &artifact.features {
        if feature == CATEGORICAL_FEATURE {
            let code = artifact.encoder.transform(token_type)?;
            row.push(code as f64);
        } else {
            let value = values
                .get(feature)
                .copied()
                .ok_or_else(|| AppError::MissingFeature(feature.clone()))?;
            if !value.is_finite() {
                return Err(AppError::InvalidValue(format!(
                    "Value for '{}' must be finite",
                    feature
                )));
            }
            row.push(value);
        }
    }

    Ok(Array1::from_vec(row))
}
