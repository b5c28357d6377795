//! Budget-gated recommendation over the vehicle catalog.

use std::cmp::Ordering;

use super::entities::{FeatureRecord, FilterSpec, ScoredRecord, VehicleRecord};
use super::predictor::{PredictorError, PricePredictor};

/// Recommend vehicles affordable within `budget_usd`.
///
/// Filters the catalog with the AND of all set constraints in `filters`,
/// scores every survivor with the predictor in a single batch, keeps only
/// rows whose *predicted* price fits the budget, sorts cheapest-first with
/// newest-year tie-break, and truncates to `top_n`.
///
/// An empty result is a normal outcome, not an error: it means no catalog
/// row passed both the filter and the budget gate.
pub fn recommend(
    catalog: &[VehicleRecord],
    predictor: &dyn PricePredictor,
    budget_usd: f64,
    top_n: usize,
    filters: &FilterSpec,
) -> Result<Vec<ScoredRecord>, PredictorError> {
    let survivors: Vec<&VehicleRecord> = catalog
        .iter()
        .filter(|record| filters.matches(record))
        .collect();

    if survivors.is_empty() {
        return Ok(Vec::new());
    }

    // One batched call across all survivors. The pipeline's preprocessing
    // was fitted per-column at training time; the batch is the unit its
    // behavior is defined over, so we never predict row-by-row.
    let rows: Vec<FeatureRecord> = survivors
        .iter()
        .map(|record| record.features.clone())
        .collect();
    let estimates = predictor.predict(&rows)?;

    let mut scored: Vec<ScoredRecord> = survivors
        .into_iter()
        .zip(estimates)
        .filter(|(_, pred)| *pred <= budget_usd)
        .map(|(record, pred)| ScoredRecord {
            record: record.clone(),
            pred_price_usd: pred,
        })
        .collect();

    // Cheapest first; among equal estimates the newest model year wins.
    // The sort is stable and the catalog order is fixed, so identical
    // queries always yield identical output.
    scored.sort_by(|a, b| {
        a.pred_price_usd
            .partial_cmp(&b.pred_price_usd)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.record.year().cmp(&a.record.year()))
    });
    scored.truncate(top_n);

    Ok(scored)
}

/// Estimate the market price of a single ad-hoc vehicle description.
/// No catalog access, no filtering: a one-row wrapper over the predictor.
pub fn estimate(
    predictor: &dyn PricePredictor,
    sample: &FeatureRecord,
) -> Result<f64, PredictorError> {
    let prices = predictor.predict(std::slice::from_ref(sample))?;
    // The predictor contract guarantees one output per input row.
    Ok(prices.first().copied().unwrap_or(f64::NAN))
}
