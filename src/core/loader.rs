use crate::core::estimator::PriceEstimator;
use crate::core::model::LinearModel;
use crate::core::schema::SchemaStore;
use crate::domain::model::MissingLocationPolicy;
use crate::domain::ports::{ArtifactSource, ConfigProvider};
use crate::utils::error::{PriceError, Result};

/// One-time artifact initialization step.
///
/// Reads the column schema and the serialized model through an
/// `ArtifactSource`, cross-checks their widths, and hands back a ready
/// estimator. Nothing can serve estimates before this succeeds; loading
/// again simply builds a fresh estimator.
pub struct ArtifactLoader<S: ArtifactSource> {
    source: S,
    columns_path: String,
    model_path: String,
    policy: MissingLocationPolicy,
}

impl<S: ArtifactSource> ArtifactLoader<S> {
    pub fn new(source: S, config: &impl ConfigProvider) -> Self {
        Self {
            source,
            columns_path: config.columns_path().to_string(),
            model_path: config.model_path().to_string(),
            policy: config.missing_location_policy(),
        }
    }

    pub async fn load(&self) -> Result<PriceEstimator<LinearModel>> {
        tracing::info!("Loading saved artifacts");

        let schema = SchemaStore::load(&self.source, &self.columns_path).await?;
        tracing::debug!(
            columns = schema.width(),
            locations = schema.locations().len(),
            "Column schema loaded from {}",
            self.columns_path
        );

        let raw = self.source.read_file(&self.model_path).await?;
        let model = LinearModel::from_json_slice(&raw)?;
        tracing::debug!(features = model.width(), "Model loaded from {}", self.model_path);

        // A width mismatch would silently corrupt every prediction, and the
        // model cannot detect it once requests start flowing.
        if model.width() != schema.width() {
            return Err(PriceError::ArtifactLoadError {
                message: format!(
                    "model expects {} features but schema has {} columns",
                    model.width(),
                    schema.width()
                ),
            });
        }

        tracing::info!("Artifacts loaded");
        Ok(PriceEstimator::new(schema, model).with_policy(self.policy))
    }
}
