//! shop - e-commerce REST backend

use anyhow::Context;
use clap::Parser;
use shop_backend::{Config, server};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shop", version, about = "E-commerce REST backend")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "SHOP_CONFIG", default_value = "config/shop.yaml")]
    config: PathBuf,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Initialize logging system
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);
    if args.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = if args.config.exists() {
        Config::from_file(&args.config)
            .await
            .with_context(|| format!("loading {}", args.config.display()))?
    } else {
        warn!(
            "Configuration file {} not found, using defaults and SHOP_* environment variables",
            args.config.display()
        );
        Config::from_env().context("loading configuration from environment")?
    };

    server::run_server(config).await.context("server stopped with an error")?;
    Ok(())
}
