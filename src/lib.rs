pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalArtifacts;
pub use core::{
    estimator::PriceEstimator, loader::ArtifactLoader, model::LinearModel, schema::SchemaStore,
};
pub use domain::model::{EstimateRequest, MissingLocationPolicy, RankedLocation};
pub use utils::error::{PriceError, Result};
