pub mod estimator;
pub mod loader;
pub mod model;
pub mod schema;

pub use crate::domain::model::{EstimateRequest, MissingLocationPolicy, RankedLocation};
pub use crate::domain::ports::{ArtifactSource, ConfigProvider, PriceModel};
pub use crate::utils::error::Result;
