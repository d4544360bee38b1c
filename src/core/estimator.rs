use crate::core::schema::{SchemaStore, BATH_SLOT, BHK_SLOT, SQFT_SLOT};
use crate::domain::model::{MissingLocationPolicy, RankedLocation};
use crate::domain::ports::PriceModel;
use crate::utils::error::{PriceError, Result};
use std::cmp::Ordering;

/// Reference request used when ranking locations against each other.
pub const REFERENCE_SQFT: f64 = 1000.0;
pub const REFERENCE_BHK: u32 = 2;
pub const REFERENCE_BATH: u32 = 2;

/// Prices estimate requests against a loaded schema and model.
///
/// Construction requires an already-loaded `SchemaStore` and model, so
/// nothing can ask for an estimate before initialization completed. All
/// state is immutable after construction and safe to share.
#[derive(Debug)]
pub struct PriceEstimator<M: PriceModel> {
    schema: SchemaStore,
    model: M,
    policy: MissingLocationPolicy,
}

impl<M: PriceModel> PriceEstimator<M> {
    pub fn new(schema: SchemaStore, model: M) -> Self {
        Self {
            schema,
            model,
            policy: MissingLocationPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MissingLocationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn schema(&self) -> &SchemaStore {
        &self.schema
    }

    /// Known location names in schema order.
    pub fn location_names(&self) -> &[String] {
        self.schema.locations()
    }

    /// Estimate the price for one home, rounded to 2 decimals.
    ///
    /// The location is matched case-insensitively against the schema. An
    /// unmatched location is declined or priced without a location signal,
    /// depending on the configured `MissingLocationPolicy`.
    pub fn estimate(&self, location: &str, total_sqft: f64, bhk: u32, bath: u32) -> Result<f64> {
        let slot = self.schema.location_slot(location);
        if slot.is_none() && self.policy == MissingLocationPolicy::Error {
            return Err(PriceError::LocationNotFound {
                location: location.to_string(),
            });
        }

        // Fresh vector per request; slot order mirrors the training columns.
        let mut features = vec![0.0; self.schema.width()];
        features[SQFT_SLOT] = total_sqft;
        features[BATH_SLOT] = f64::from(bath);
        features[BHK_SLOT] = f64::from(bhk);
        if let Some(i) = slot {
            features[i] = 1.0;
        }

        let predictions = self.model.predict(&[features])?;
        let raw = predictions
            .first()
            .copied()
            .ok_or_else(|| PriceError::PredictionError {
                message: "model returned no prediction for a single-row batch".to_string(),
            })?;

        Ok(round2(raw))
    }

    /// Every known location priced at the reference request, most
    /// expensive first. The sort is stable, so ties keep schema order.
    pub fn rank_locations_by_expensiveness(&self) -> Result<Vec<RankedLocation>> {
        let locations = self.schema.locations();
        let mut ranked = Vec::with_capacity(locations.len());

        for location in locations {
            let price = self.estimate(location, REFERENCE_SQFT, REFERENCE_BHK, REFERENCE_BATH)?;
            ranked.push(RankedLocation {
                location: location.clone(),
                estimated_price: price,
            });
        }

        ranked.sort_by(|a, b| {
            b.estimated_price
                .partial_cmp(&a.estimated_price)
                .unwrap_or(Ordering::Equal)
        });

        Ok(ranked)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
