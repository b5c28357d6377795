//! Process-wide handle over the loaded catalog and fitted pipeline.
//!
//! Both artifacts are loaded once, on first access, and shared read-only for
//! the rest of the process lifetime. Nothing mutates after load, so handing
//! the same `&'static Session` to concurrent readers is safe.

use std::sync::OnceLock;

use thiserror::Error;

use crate::domain::{
    estimate, recommend, FeatureRecord, FilterSpec, PredictorError, ScoredRecord,
};
use crate::infra::catalog::{Catalog, CatalogError};
use crate::infra::model::LinearPipeline;

static SHARED: OnceLock<Session> = OnceLock::new();

/// Either artifact failing to load fails the whole session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Predictor(#[from] PredictorError),
}

pub struct Session {
    catalog: Catalog,
    predictor: LinearPipeline,
}

impl Session {
    /// Build a session around artifacts the caller manages itself.
    pub fn open(catalog: Catalog, predictor: LinearPipeline) -> Self {
        Self { catalog, predictor }
    }

    /// Load catalog and pipeline from their default location chains.
    pub fn load_default() -> Result<Self, SessionError> {
        let catalog = Catalog::load_default()?;
        let predictor = LinearPipeline::load_default()?;
        Ok(Self::open(catalog, predictor))
    }

    /// The process-wide session, initialized on first call. A failed load is
    /// not cached: the next call retries, a success is kept forever.
    pub fn shared() -> Result<&'static Session, SessionError> {
        if let Some(session) = SHARED.get() {
            return Ok(session);
        }
        let session = Self::load_default()?;
        println!("[session] Initialized ({} vehicles)", session.catalog.len());
        Ok(SHARED.get_or_init(|| session))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn predictor(&self) -> &LinearPipeline {
        &self.predictor
    }

    /// Recommend vehicles from this session's catalog. See
    /// [`crate::domain::recommend`].
    pub fn recommend(
        &self,
        budget_usd: f64,
        top_n: usize,
        filters: &FilterSpec,
    ) -> Result<Vec<ScoredRecord>, PredictorError> {
        recommend(
            self.catalog.records(),
            &self.predictor,
            budget_usd,
            top_n,
            filters,
        )
    }

    /// Estimate the price of one ad-hoc vehicle description. See
    /// [`crate::domain::estimate`].
    pub fn estimate(&self, sample: &FeatureRecord) -> Result<f64, PredictorError> {
        estimate(&self.predictor, sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_returns_the_same_instance() {
        let first = Session::shared().unwrap();
        let second = Session::shared().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(!first.catalog().is_empty());
    }
}
