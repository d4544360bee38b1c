use crate::core::ConfigProvider;
use crate::domain::model::MissingLocationPolicy;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "homeprice")]
#[command(about = "Home price estimation over saved regression artifacts")]
pub struct CliConfig {
    /// Optional TOML configuration file; overrides the artifact flags below
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, default_value = "./artifacts")]
    pub artifacts_dir: String,

    #[arg(long, default_value = "columns.json")]
    pub columns_file: String,

    #[arg(long, default_value = "model.json")]
    pub model_file: String,

    /// How to price a location missing from the schema
    #[arg(long, value_enum, default_value = "error")]
    pub missing_location_policy: MissingLocationPolicy,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List known locations in schema order
    Locations,
    /// Estimate the price for one home
    Estimate {
        #[arg(long)]
        location: String,

        #[arg(long)]
        total_sqft: f64,

        /// Bedroom count
        #[arg(long)]
        bhk: u32,

        /// Bathroom count
        #[arg(long)]
        bath: u32,
    },
    /// Rank all known locations by estimated price
    Rank,
}

impl ConfigProvider for CliConfig {
    fn columns_path(&self) -> &str {
        &self.columns_file
    }

    fn model_path(&self) -> &str {
        &self.model_file
    }

    fn missing_location_policy(&self) -> MissingLocationPolicy {
        self.missing_location_policy
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("artifacts_dir", &self.artifacts_dir)?;
        validation::validate_non_empty_string("columns_file", &self.columns_file)?;
        validation::validate_non_empty_string("model_file", &self.model_file)?;
        if let Some(config) = &self.config {
            validation::validate_path("config", config)?;
        }
        Ok(())
    }
}
