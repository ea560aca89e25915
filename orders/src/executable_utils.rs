use clap::Parser;
use common::config::Config;
use std::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "orders/config/dev.yaml")]
    pub config: String,
}

/// Parse arguments, load config and install the tracing subscriber.
pub fn initialize_executable() -> Result<Config, Box<dyn Error + Send + Sync>> {
    let args = Args::parse();

    // A missing .env file is fine
    let dotenv_path = dotenvy::dotenv().ok();

    let config = Config::load(&args.config)?.with_env_overrides();
    init_tracing(&config.schema_tool.log_level)?;

    tracing::info!(
        config = %args.config,
        dotenv = ?dotenv_path,
        project = %config.common.project_name,
        "Executable initialized"
    );
    Ok(config)
}

/// `RUST_LOG` wins over the configured level when set.
pub fn init_tracing(log_level: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).try_init()?;
    Ok(())
}
