use crate::domain::ports::PriceModel;
use crate::utils::error::{PriceError, Result};
use serde::Deserialize;

pub const LINEAR_REGRESSION: &str = "linear_regression";

/// Regression weights exported from training.
///
/// The estimator only sees this through the `PriceModel` trait; the
/// concrete shape matters to the loader alone.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModel {
    pub model_type: String,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    pub fn from_json_slice(raw: &[u8]) -> Result<Self> {
        let model: LinearModel = serde_json::from_slice(raw)?;

        if model.model_type != LINEAR_REGRESSION {
            return Err(PriceError::ArtifactLoadError {
                message: format!("unsupported model_type: '{}'", model.model_type),
            });
        }
        if model.coefficients.is_empty() {
            return Err(PriceError::ArtifactLoadError {
                message: "model has no coefficients".to_string(),
            });
        }

        Ok(model)
    }

    /// Feature-vector width this model was trained on.
    pub fn width(&self) -> usize {
        self.coefficients.len()
    }
}

impl PriceModel for LinearModel {
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>> {
        rows.iter()
            .map(|row| {
                if row.len() != self.coefficients.len() {
                    return Err(PriceError::PredictionError {
                        message: format!(
                            "feature vector has {} slots, model expects {}",
                            row.len(),
                            self.coefficients.len()
                        ),
                    });
                }

                let weighted: f64 = row
                    .iter()
                    .zip(&self.coefficients)
                    .map(|(x, w)| x * w)
                    .sum();
                Ok(self.intercept + weighted)
            })
            .collect()
    }
}
