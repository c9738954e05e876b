use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{predict, serve};

#[derive(Parser)]
#[command(name = "gdp-predictor")]
#[command(about = "Sri Lanka GDP growth predictor: web server and command line client")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    ///
    /// Serves the compiled frontend, proxies `/api/*` to the prediction
    /// backend and exposes the OpenAPI docs under `/swagger-ui`.
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS")]
        bind_address: Option<String>,

        /// Base URL of the prediction backend (e.g., http://localhost:5000)
        #[arg(long, env = "BACKEND_URL")]
        backend_url: Option<String>,

        /// Directory holding the compiled frontend bundle
        #[arg(short, long, env = "STATIC_DIR")]
        static_dir: Option<PathBuf>,

        /// Timeout for backend requests, in seconds
        #[arg(long, env = "REQUEST_TIMEOUT_SECS")]
        request_timeout_secs: Option<u64>,
    },
    /// Request a single prediction and print it
    ///
    /// Fetches the historical series, validates the inputs, asks the backend
    /// for a prediction and prints the predictions, the outlook and the chart
    /// series.
    Predict {
        /// Target year (2025-2050)
        #[arg(short, long)]
        year: String,

        /// Expected inflation rate in percent (0-50)
        #[arg(short, long)]
        inflation: String,

        /// Base URL of the prediction backend
        #[arg(long, env = "BACKEND_URL")]
        backend_url: Option<String>,

        /// Print the chart series as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                bind_address,
                backend_url,
                static_dir,
                request_timeout_secs,
            } => {
                serve(bind_address, backend_url, static_dir, request_timeout_secs).await?;
            }
            Commands::Predict {
                year,
                inflation,
                backend_url,
                json,
            } => {
                predict(&year, &inflation, backend_url, json).await?;
            }
        }
        Ok(())
    }
}
