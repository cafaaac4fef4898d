mod run;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "revfeed")]
#[command(about = "Export review feeds to JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Export shop reviews left after completed orders
    Orders(RunArgs),
    /// Export product reviews, dropping duplicates within each product
    Products(RunArgs),
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub(crate) struct RunArgs {
    /// Write to this file instead of the configured output path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Fetch and process the feed but do not write the output file
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = revfeed_core::load_app_config()?;

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Orders(args) => run::run_orders(&config, &args).await,
        Commands::Products(args) => run::run_products(&config, &args).await,
    }
}
