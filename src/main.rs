use clap::Parser;
use homeprice::config::{file::FileConfig, CliConfig, Command};
use homeprice::utils::{logger, validation::Validate};
use homeprice::{ArtifactLoader, EstimateRequest, LinearModel, LocalArtifacts, PriceEstimator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting homeprice CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&config).await {
        tracing::error!("❌ Command failed: {}", e);
        eprintln!("❌ {}", e);

        // 啟動錯誤與請求錯誤使用不同的退出碼
        let exit_code = if e.is_fatal() { 1 } else { 2 };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(config: &CliConfig) -> homeprice::Result<()> {
    let estimator = load_estimator(config).await?;

    match &config.command {
        Command::Locations => {
            tracing::info!("📍 {} known locations", estimator.location_names().len());
            for location in estimator.location_names() {
                println!("{}", location);
            }
        }
        Command::Estimate {
            location,
            total_sqft,
            bhk,
            bath,
        } => {
            let request = EstimateRequest {
                location: location.clone(),
                total_sqft: *total_sqft,
                bhk: *bhk,
                bath: *bath,
            };
            request.validate()?;

            let price = estimator.estimate(
                &request.location,
                request.total_sqft,
                request.bhk,
                request.bath,
            )?;
            tracing::info!("✅ Estimate complete");
            println!("{} -> {:.2} lakh", request.location, price);
        }
        Command::Rank => {
            let ranked = estimator.rank_locations_by_expensiveness()?;
            tracing::info!("✅ Ranked {} locations", ranked.len());
            for entry in &ranked {
                println!("{:<40} {:>10.2}", entry.location, entry.estimated_price);
            }
        }
    }

    Ok(())
}

/// Artifacts load exactly once, before any command runs. A TOML config
/// file takes precedence over the individual artifact flags.
async fn load_estimator(config: &CliConfig) -> homeprice::Result<PriceEstimator<LinearModel>> {
    match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file_config = FileConfig::from_file(path)?;
            file_config.validate()?;

            let source = LocalArtifacts::new(file_config.artifacts_dir().to_string());
            ArtifactLoader::new(source, &file_config).load().await
        }
        None => {
            let source = LocalArtifacts::new(config.artifacts_dir.clone());
            ArtifactLoader::new(source, config).load().await
        }
    }
}
