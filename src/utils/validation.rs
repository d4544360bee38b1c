use crate::domain::model::EstimateRequest;
use crate::utils::error::{PriceError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PriceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PriceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PriceError::ValidationError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_positive_float(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PriceError::ValidationError {
            message: format!("{} must be a positive finite number, got {}", field_name, value),
        });
    }
    Ok(())
}

pub fn validate_positive_count(field_name: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(PriceError::ValidationError {
            message: format!("{} must be at least 1", field_name),
        });
    }
    Ok(())
}

/// Input validation lives at the caller boundary: an embedding layer runs
/// this before handing the request to the estimator.
impl Validate for EstimateRequest {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("location", &self.location)?;
        validate_positive_float("total_sqft", self.total_sqft)?;
        validate_positive_count("bhk", self.bhk)?;
        validate_positive_count("bath", self.bath)?;
        Ok(())
    }
}
