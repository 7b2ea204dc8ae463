//! Command-line interface.
//!
//! Only `serve` resolves the full configuration; `export-openapi` reads no
//! server settings, so a bad `PORT` cannot block a schema export.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::AppResult;
use crate::{openapi, server};

/// scaffold-api - health check and ping service
#[derive(Parser, Debug)]
#[command(name = "scaffold-api")]
#[command(version = "0.1.0")]
#[command(about = "A minimal HTTP service scaffold", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to (overrides HOST env var)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides PORT env var)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Write the OpenAPI schema to a file
    ExportOpenapi {
        /// Output path
        #[arg(short, long, default_value = "openapi.json")]
        output: PathBuf,
    },
}

/// Dispatch a parsed command.
pub async fn run(cli: Cli) -> AppResult<()> {
    match cli.command {
        Commands::Serve { host, port } => {
            let mut config = Config::from_env()?;

            // Override config with CLI args if provided
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            server::run_server(config).await
        }
        Commands::ExportOpenapi { output } => {
            openapi::export_openapi(&output)?;
            println!("Exported OpenAPI schema to {}", output.display());
            Ok(())
        }
    }
}
