//! Spendwise CLI
//!
//! Command-line interface for Spendwise operations:
//! - Run the API server
//! - Seed the mock spending data
//! - Generate a default config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spendwise::advisor::{self, AdvisorClient, SummaryEngine};
use spendwise::api::{serve, ApiConfig, AppState};
use spendwise::config::{generate_default_config, Config, LoggingConfig};
use spendwise::store::SpendStore;

#[derive(Parser)]
#[command(name = "spendwise")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Personal finance tracker")]
#[command(
    long_about = "Spendwise tracks your spending by category and generates\nAI summaries of where the money went."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path (default: standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the API server
    Serve {
        /// Override the host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Override the port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Insert the mock spending rows if the table is empty
    Seed,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    match cli.command {
        Commands::Serve { host, port } => {
            init_tracing(&config.logging);

            tracing::info!("Starting Spendwise v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Database: {}", config.store.db_path);

            let store = Arc::new(SpendStore::open(config.store.db_path.as_ref())?);

            if config.api.seed_demo_data {
                let seeded = store.seed_spending().await?;
                if seeded > 0 {
                    tracing::info!("Inserted {} mock spending rows", seeded);
                }
            }

            let advisor = Arc::new(build_engine(&config).await?);

            let api_config = ApiConfig {
                host: host.unwrap_or(config.api.host),
                port: port.unwrap_or(config.api.port),
                seed_demo_data: config.api.seed_demo_data,
            };

            let state = AppState::new(store, advisor, api_config.clone());
            serve(state, &api_config).await?;

            tracing::info!("Spendwise stopped");
        }

        Commands::Seed => {
            init_tracing(&config.logging);

            let store = SpendStore::open(config.store.db_path.as_ref())?;
            let seeded = store.seed_spending().await?;

            if seeded > 0 {
                tracing::info!("Inserted {} mock spending rows", seeded);
            } else {
                tracing::info!("Spending table already has data, nothing to do");
            }
        }

        Commands::Config { output } => match output {
            Some(path) => {
                std::fs::write(&path, generate_default_config())?;
                println!("Wrote default config to {}", path.display());
            }
            None => print!("{}", generate_default_config()),
        },
    }

    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("spendwise={},tower_http=warn", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Build the summary engine, verifying the advisor service when enabled
async fn build_engine(config: &Config) -> anyhow::Result<SummaryEngine> {
    if !config.advisor.enabled {
        tracing::info!("Advisor service disabled, summaries use the local digest");
        return Ok(SummaryEngine::local_only());
    }

    let client = AdvisorClient::new(advisor::AdvisorConfig {
        base_url: config.advisor.url.clone(),
        request_timeout_ms: config.advisor.request_timeout_ms,
    })?;

    match client.health_check().await {
        Ok(_) => tracing::info!("Advisor service verified at {}", config.advisor.url),
        Err(e) => tracing::warn!(
            "Advisor service not available: {} (summaries will use the local digest)",
            e
        ),
    }

    Ok(SummaryEngine::with_client(Arc::new(client)))
}
