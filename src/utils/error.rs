use thiserror::Error;

#[derive(Error, Debug)]
pub enum PriceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Artifact load failed: {message}")]
    ArtifactLoadError { message: String },

    #[error("Location not found: {location}")]
    LocationNotFound { location: String },

    #[error("Model prediction failed: {message}")]
    PredictionError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl PriceError {
    /// Fatal errors abort startup; the rest are request-level and can be
    /// mapped to a client-facing response by the embedding layer.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            PriceError::IoError(_)
                | PriceError::SerializationError(_)
                | PriceError::ArtifactLoadError { .. }
                | PriceError::ConfigError { .. }
                | PriceError::InvalidConfigValueError { .. }
                | PriceError::MissingConfigError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PriceError>;
