//! Domain logic for vehicle valuation and recommendation lives here.

pub mod entities;
pub mod predictor;
pub mod recommend;

pub use entities::{FeatureRecord, FilterSpec, ScoredRecord, VehicleRecord};
pub use predictor::{PredictorError, PricePredictor};
pub use recommend::{estimate, recommend};
