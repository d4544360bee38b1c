use crate::core::ConfigProvider;
use crate::domain::model::MissingLocationPolicy;
use crate::utils::error::{PriceError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ARTIFACTS_DIR: &str = "./artifacts";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub service: ServiceSection,
    pub artifacts: ArtifactsSection,
    pub estimator: Option<EstimatorSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactsSection {
    pub dir: Option<String>,
    pub columns_file: String,
    pub model_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorSection {
    pub missing_location_policy: Option<MissingLocationPolicy>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PriceError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PriceError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Substitute `${VAR}` references with environment values. Unset
    /// variables are left as-is so validation can point at them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("static pattern");

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn artifacts_dir(&self) -> &str {
        self.artifacts
            .dir
            .as_deref()
            .unwrap_or(DEFAULT_ARTIFACTS_DIR)
    }
}

impl ConfigProvider for FileConfig {
    fn columns_path(&self) -> &str {
        &self.artifacts.columns_file
    }

    fn model_path(&self) -> &str {
        &self.artifacts.model_file
    }

    fn missing_location_policy(&self) -> MissingLocationPolicy {
        self.estimator
            .as_ref()
            .and_then(|e| e.missing_location_policy)
            .unwrap_or_default()
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("service.name", &self.service.name)?;
        validation::validate_path("artifacts.dir", self.artifacts_dir())?;
        validation::validate_non_empty_string("artifacts.columns_file", &self.artifacts.columns_file)?;
        validation::validate_non_empty_string("artifacts.model_file", &self.artifacts.model_file)?;
        Ok(())
    }
}
