//! Fitted price pipeline: per-column standard scaling plus one-hot encoding,
//! composed with linear regression weights.
//!
//! The artifact is produced offline by the training job; this module only
//! evaluates it. The engine never sees this type directly, only the
//! `PricePredictor` trait.

use std::fs;
use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::domain::{FeatureRecord, PredictorError, PricePredictor};
use crate::util::{assets, paths};

/// Environment override for the model artifact location.
pub const MODEL_PATH_VAR: &str = "CAR_MODEL_PATH";

/// One standard-scaled numeric column with its regression weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumericFeature {
    pub column: String,
    pub mean: f64,
    pub std: f64,
    pub weight: f64,
}

/// One one-hot-encoded categorical column. `categories` is the vocabulary
/// seen at training time; `weights` holds one regression weight per entry.
/// A value outside the vocabulary encodes to all zeros, so it contributes
/// nothing rather than failing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoricalFeature {
    pub column: String,
    pub categories: Vec<String>,
    pub weights: Vec<f64>,
}

/// The serialized form of the fitted pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineArtifact {
    pub numeric: Vec<NumericFeature>,
    pub categorical: Vec<CategoricalFeature>,
    pub intercept: f64,
}

/// The shipped `PricePredictor` implementation.
#[derive(Clone, Debug)]
pub struct LinearPipeline {
    artifact: PipelineArtifact,
}

impl LinearPipeline {
    pub fn from_artifact(artifact: PipelineArtifact) -> Self {
        Self { artifact }
    }

    /// Load a fitted pipeline from a JSON artifact file.
    pub fn load_from_path(path: &Path) -> Result<Self, PredictorError> {
        let data = fs::read(path).map_err(|source| PredictorError::PredictorUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let pipeline = Self::from_json(&data, path)?;
        println!(
            "[model] Loaded pipeline ({} numeric + {} categorical columns) from {}",
            pipeline.artifact.numeric.len(),
            pipeline.artifact.categorical.len(),
            path.display()
        );
        Ok(pipeline)
    }

    /// Load from the default location chain: `CAR_MODEL_PATH` override, then
    /// the platform data directory, then the embedded artifact.
    pub fn load_default() -> Result<Self, PredictorError> {
        if let Some(path) = paths::env_override(MODEL_PATH_VAR) {
            return Self::load_from_path(&path);
        }
        if let Some(path) = paths::data_file(assets::MODEL_ASSET) {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }
        let pipeline = Self::from_json(
            assets::embedded_model().as_ref(),
            Path::new("embedded:model_pipeline.json"),
        )?;
        println!("[model] Loaded pipeline (embedded)");
        Ok(pipeline)
    }

    pub fn artifact(&self) -> &PipelineArtifact {
        &self.artifact
    }

    fn from_json(data: &[u8], path: &Path) -> Result<Self, PredictorError> {
        let artifact: PipelineArtifact =
            serde_json::from_slice(data).map_err(|source| PredictorError::MalformedArtifact {
                path: path.to_path_buf(),
                source,
            })?;
        for feature in &artifact.categorical {
            if feature.categories.len() != feature.weights.len() {
                return Err(PredictorError::MalformedArtifact {
                    path: path.to_path_buf(),
                    source: serde_json::Error::custom(format!(
                        "column \"{}\" has {} categories but {} weights",
                        feature.column,
                        feature.categories.len(),
                        feature.weights.len()
                    )),
                });
            }
        }
        Ok(Self::from_artifact(artifact))
    }

    fn score_row(&self, index: usize, row: &FeatureRecord) -> Result<f64, PredictorError> {
        let mut price = self.artifact.intercept;

        for feature in &self.artifact.numeric {
            let value =
                row.numeric(&feature.column)
                    .ok_or_else(|| PredictorError::MalformedInput {
                        row: index,
                        column: feature.column.clone(),
                    })?;
            // Degenerate columns (zero spread at fit time) contribute nothing.
            if feature.std > 0.0 {
                price += feature.weight * (value - feature.mean) / feature.std;
            }
        }

        for feature in &self.artifact.categorical {
            let value =
                row.categorical(&feature.column)
                    .ok_or_else(|| PredictorError::MalformedInput {
                        row: index,
                        column: feature.column.clone(),
                    })?;
            // Unknown category: every indicator stays zero, no contribution.
            if let Some(position) = feature.categories.iter().position(|c| c == value) {
                price += feature.weights[position];
            }
        }

        Ok(price)
    }
}

impl PricePredictor for LinearPipeline {
    fn predict(&self, rows: &[FeatureRecord]) -> Result<Vec<f64>, PredictorError> {
        rows.iter()
            .enumerate()
            .map(|(index, row)| self.score_row(index, row))
            .collect()
    }
}
