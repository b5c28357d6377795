use serde::{Deserialize, Serialize};

/// Model input for one vehicle: every catalog attribute except the listing
/// price. This is exactly what the fitted pipeline was trained on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub mileage_km: u32,
    /// Market condition label (e.g. "Usado", "Nuevo").
    pub condition: String,
    pub body_type: String,
    pub transmission: String,
    pub fuel: String,
    pub engine_cc: u32,
    pub city: String,
}

impl FeatureRecord {
    /// Look up a numeric feature column by name, as the artifact refers to it.
    pub fn numeric(&self, column: &str) -> Option<f64> {
        match column {
            "year" => Some(f64::from(self.year)),
            "mileage_km" => Some(f64::from(self.mileage_km)),
            "engine_cc" => Some(f64::from(self.engine_cc)),
            _ => None,
        }
    }

    /// Look up a categorical feature column by name.
    pub fn categorical(&self, column: &str) -> Option<&str> {
        match column {
            "brand" => Some(&self.brand),
            "model" => Some(&self.model),
            "condition" => Some(&self.condition),
            "body_type" => Some(&self.body_type),
            "transmission" => Some(&self.transmission),
            "fuel" => Some(&self.fuel),
            "city" => Some(&self.city),
            _ => None,
        }
    }
}

/// One row of the catalog: the model features plus the ground-truth listing
/// price. `price_usd` is never fed to the predictor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    #[serde(flatten)]
    pub features: FeatureRecord,
    pub price_usd: f64,
}

impl VehicleRecord {
    pub fn features(&self) -> &FeatureRecord {
        &self.features
    }

    pub fn year(&self) -> i32 {
        self.features.year
    }
}

/// User search intent. `None` on any field means "no restriction".
///
/// `year_min <= year_max` is the caller's responsibility; a violated bound is
/// not rejected, it just matches nothing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub brand: Option<String>,
    pub city: Option<String>,
    pub condition: Option<String>,
    pub body_type: Option<String>,
    pub fuel: Option<String>,
    pub transmission: Option<String>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub mileage_max: Option<u32>,
}

impl FilterSpec {
    /// AND of all set constraints: exact equality on categorical fields,
    /// inclusive bounds on year and mileage.
    pub fn matches(&self, record: &VehicleRecord) -> bool {
        let f = &record.features;

        if let Some(ref brand) = self.brand {
            if &f.brand != brand { return false; }
        }
        if let Some(ref city) = self.city {
            if &f.city != city { return false; }
        }
        if let Some(ref condition) = self.condition {
            if &f.condition != condition { return false; }
        }
        if let Some(ref body_type) = self.body_type {
            if &f.body_type != body_type { return false; }
        }
        if let Some(ref fuel) = self.fuel {
            if &f.fuel != fuel { return false; }
        }
        if let Some(ref transmission) = self.transmission {
            if &f.transmission != transmission { return false; }
        }
        if let Some(year_min) = self.year_min {
            if f.year < year_min { return false; }
        }
        if let Some(year_max) = self.year_max {
            if f.year > year_max { return false; }
        }
        if let Some(mileage_max) = self.mileage_max {
            if f.mileage_km > mileage_max { return false; }
        }

        true
    }
}

/// A catalog row together with the model's price estimate for it.
/// Built per query, never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub record: VehicleRecord,
    pub pred_price_usd: f64,
}
