//! Budget-based used-car recommender.
//!
//! Estimates a used car's market price from its tabular attributes via a
//! pre-fitted regression pipeline and recommends catalog vehicles whose
//! *predicted* price fits a user budget, filtered by categorical and numeric
//! criteria.
//!
//! The typical entry point is [`Session::shared`], which loads the catalog
//! and pipeline once per process:
//!
//! ```no_run
//! use car_value_recommender::{FilterSpec, Session};
//!
//! let session = Session::shared()?;
//! let filters = FilterSpec {
//!     brand: Some("Toyota".to_string()),
//!     year_min: Some(2015),
//!     ..FilterSpec::default()
//! };
//! for hit in session.recommend(15_000.0, 30, &filters)? {
//!     println!(
//!         "{} {} ({}) — est. {:.0} USD",
//!         hit.record.features.brand,
//!         hit.record.features.model,
//!         hit.record.features.year,
//!         hit.pred_price_usd,
//!     );
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Hosts that manage their own artifacts can load them explicitly and use
//! [`Session::open`], or call [`recommend`]/[`estimate`] directly with any
//! [`PricePredictor`] implementation.

pub mod domain;
pub mod infra;
pub mod util;

pub use domain::{
    estimate, recommend, FeatureRecord, FilterSpec, PredictorError, PricePredictor, ScoredRecord,
    VehicleRecord,
};
pub use infra::{
    Catalog, CatalogError, CategoricalFeature, LinearPipeline, NumericFeature, PipelineArtifact,
    Session, SessionError,
};
