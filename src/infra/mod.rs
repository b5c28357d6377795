pub mod catalog;
pub mod model;
pub mod session;

pub use catalog::{Catalog, CatalogError};
pub use model::{CategoricalFeature, LinearPipeline, NumericFeature, PipelineArtifact};
pub use session::{Session, SessionError};
