use crate::domain::model::MissingLocationPolicy;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only access to named artifact resources (column schema, model blob).
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

/// Batch prediction contract: given N feature vectors, return N scalars.
///
/// The estimator treats the implementation as a black box and only relies
/// on this call shape, so tests can swap in a deterministic stub.
pub trait PriceModel: Send + Sync {
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>>;
}

pub trait ConfigProvider: Send + Sync {
    fn columns_path(&self) -> &str;
    fn model_path(&self) -> &str;
    fn missing_location_policy(&self) -> MissingLocationPolicy;
}
