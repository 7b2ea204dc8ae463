use clap::Parser;
use scaffold_api::cli::{self, Cli};
use scaffold_api::config::Settings;
use scaffold_api::error::AppResult;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise DEBUG picks the default level
    let default_level = if Settings::from_env().debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level.to_string())),
        )
        .init();

    cli::run(cli).await
}
