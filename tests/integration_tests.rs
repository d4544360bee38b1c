use homeprice::domain::ports::ConfigProvider;
use homeprice::{
    ArtifactLoader, LocalArtifacts, MissingLocationPolicy, PriceError,
};
use tempfile::TempDir;

struct TestConfig {
    columns_file: String,
    model_file: String,
    policy: MissingLocationPolicy,
}

impl TestConfig {
    fn new() -> Self {
        Self {
            columns_file: "columns.json".to_string(),
            model_file: "model.json".to_string(),
            policy: MissingLocationPolicy::Error,
        }
    }
}

impl ConfigProvider for TestConfig {
    fn columns_path(&self) -> &str {
        &self.columns_file
    }

    fn model_path(&self) -> &str {
        &self.model_file
    }

    fn missing_location_policy(&self) -> MissingLocationPolicy {
        self.policy
    }
}

const COLUMNS_JSON: &str = r#"{
    "data_columns": ["total_sqft", "bath", "bhk", "1st phase jp nagar", "kalhalli"]
}"#;

const MODEL_JSON: &str = r#"{
    "model_type": "linear_regression",
    "coefficients": [2.0, 10.0, 5.0, 100.0, 50.0],
    "intercept": 0.0
}"#;

fn artifact_dir(columns: Option<&str>, model: Option<&str>) -> TempDir {
    let dir = TempDir::new().unwrap();
    if let Some(content) = columns {
        std::fs::write(dir.path().join("columns.json"), content).unwrap();
    }
    if let Some(content) = model {
        std::fs::write(dir.path().join("model.json"), content).unwrap();
    }
    dir
}

fn local_source(dir: &TempDir) -> LocalArtifacts {
    LocalArtifacts::new(dir.path().to_str().unwrap().to_string())
}

#[tokio::test]
async fn test_end_to_end_load_and_estimate() {
    let dir = artifact_dir(Some(COLUMNS_JSON), Some(MODEL_JSON));
    let loader = ArtifactLoader::new(local_source(&dir), &TestConfig::new());

    let estimator = loader.load().await.unwrap();

    assert_eq!(
        estimator.location_names(),
        &["1st phase jp nagar", "kalhalli"]
    );

    // [1000, 2, 2, 1, 0] -> 2000 + 20 + 10 + 100
    let price = estimator
        .estimate("1st Phase JP Nagar", 1000.0, 2, 2)
        .unwrap();
    assert_eq!(price, 2130.0);

    let unknown = estimator.estimate("Unknown Place", 1000.0, 2, 2);
    assert!(matches!(
        unknown,
        Err(PriceError::LocationNotFound { .. })
    ));
}

#[tokio::test]
async fn test_end_to_end_ranking() {
    let dir = artifact_dir(Some(COLUMNS_JSON), Some(MODEL_JSON));
    let loader = ArtifactLoader::new(local_source(&dir), &TestConfig::new());

    let estimator = loader.load().await.unwrap();
    let ranked = estimator.rank_locations_by_expensiveness().unwrap();

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].location, "1st phase jp nagar");
    assert_eq!(ranked[0].estimated_price, 2130.0);
    assert_eq!(ranked[1].location, "kalhalli");
    assert_eq!(ranked[1].estimated_price, 2080.0);
}

#[tokio::test]
async fn test_configured_fallback_policy_is_applied() {
    let dir = artifact_dir(Some(COLUMNS_JSON), Some(MODEL_JSON));
    let config = TestConfig {
        policy: MissingLocationPolicy::FallbackNoLocation,
        ..TestConfig::new()
    };
    let loader = ArtifactLoader::new(local_source(&dir), &config);

    let estimator = loader.load().await.unwrap();
    let price = estimator.estimate("Unknown Place", 1000.0, 2, 2).unwrap();
    assert_eq!(price, 2030.0);
}

#[tokio::test]
async fn test_missing_columns_artifact_fails_load() {
    let dir = artifact_dir(None, Some(MODEL_JSON));
    let loader = ArtifactLoader::new(local_source(&dir), &TestConfig::new());

    let err = loader.load().await.unwrap_err();
    assert!(matches!(err, PriceError::IoError(_)));
    assert!(err.is_fatal());
}

#[tokio::test]
async fn test_missing_model_artifact_fails_load() {
    let dir = artifact_dir(Some(COLUMNS_JSON), None);
    let loader = ArtifactLoader::new(local_source(&dir), &TestConfig::new());

    let result = loader.load().await;
    assert!(matches!(result, Err(PriceError::IoError(_))));
}

#[tokio::test]
async fn test_malformed_columns_artifact_fails_load() {
    let dir = artifact_dir(Some("not json"), Some(MODEL_JSON));
    let loader = ArtifactLoader::new(local_source(&dir), &TestConfig::new());

    let result = loader.load().await;
    assert!(matches!(result, Err(PriceError::SerializationError(_))));
}

#[tokio::test]
async fn test_columns_artifact_without_data_columns_key_fails_load() {
    let dir = artifact_dir(Some(r#"{"columns": ["a", "b", "c"]}"#), Some(MODEL_JSON));
    let loader = ArtifactLoader::new(local_source(&dir), &TestConfig::new());

    let result = loader.load().await;
    assert!(matches!(result, Err(PriceError::SerializationError(_))));
}

#[tokio::test]
async fn test_schema_model_width_mismatch_fails_load() {
    let narrow_model = r#"{
        "model_type": "linear_regression",
        "coefficients": [2.0, 10.0, 5.0],
        "intercept": 0.0
    }"#;
    let dir = artifact_dir(Some(COLUMNS_JSON), Some(narrow_model));
    let loader = ArtifactLoader::new(local_source(&dir), &TestConfig::new());

    let result = loader.load().await;
    assert!(matches!(
        result,
        Err(PriceError::ArtifactLoadError { .. })
    ));
}

#[tokio::test]
async fn test_reloading_replaces_state_cleanly() {
    let dir = artifact_dir(Some(COLUMNS_JSON), Some(MODEL_JSON));
    let loader = ArtifactLoader::new(local_source(&dir), &TestConfig::new());

    let first = loader.load().await.unwrap();
    let second = loader.load().await.unwrap();

    assert_eq!(first.location_names(), second.location_names());
    assert_eq!(
        first.estimate("kalhalli", 1000.0, 2, 2).unwrap(),
        second.estimate("kalhalli", 1000.0, 2, 2).unwrap()
    );
}

#[tokio::test]
async fn test_bundled_sample_artifacts_are_consistent() {
    // The artifacts shipped for the CLI must load and price cleanly.
    let source = LocalArtifacts::new("./artifacts".to_string());
    let loader = ArtifactLoader::new(source, &TestConfig::new());

    let estimator = loader.load().await.unwrap();
    assert!(!estimator.location_names().is_empty());

    let ranked = estimator.rank_locations_by_expensiveness().unwrap();
    assert_eq!(ranked.len(), estimator.location_names().len());
    for entry in &ranked {
        assert!(entry.estimated_price.is_finite());
        assert!(entry.estimated_price >= 0.0);
    }
}
