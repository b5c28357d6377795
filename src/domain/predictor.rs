//! The seam between the engine and whatever model technology backs it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::entities::FeatureRecord;

/// An opaque, pre-fitted price model: feature rows in, USD estimates out.
///
/// Contract:
/// - one output per input row, in input order;
/// - deterministic and side-effect-free;
/// - categorical values never seen at training time must still produce an
///   estimate (possibly degraded), never an error.
///
/// Callers scoring several rows must pass them in one call rather than loop:
/// a batch is the unit any cross-row behavior of the model is defined over.
pub trait PricePredictor {
    fn predict(&self, rows: &[FeatureRecord]) -> Result<Vec<f64>, PredictorError>;
}

#[derive(Debug, Error)]
pub enum PredictorError {
    /// Model artifact missing or unreadable.
    #[error("model artifact unavailable at {path}: {source}")]
    PredictorUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Model artifact exists but does not parse.
    #[error("model artifact at {path} is malformed: {source}")]
    MalformedArtifact {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// An input row cannot supply a feature column the model requires.
    /// Per-call: other calls against the same predictor are unaffected.
    #[error("input row {row} is missing required feature column \"{column}\"")]
    MalformedInput { row: usize, column: String },
}
