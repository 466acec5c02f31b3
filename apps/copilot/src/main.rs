//! Clinical copilot CLI.
//!
//! Submits free-text clinical queries to a copilot backend and renders the
//! returned analysis, evidence citations, and response metadata.

use anyhow::Result;
use clap::{Parser, Subcommand};
use copilot_async::types::answer::DEFAULT_RESULT_COUNT;
use copilot_async::{Client, CopilotConfig};

mod commands;
mod render;
mod state;

#[derive(Parser)]
#[command(name = "copilot")]
#[command(about = "Query patient data with AI-powered clinical insights")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the copilot backend
    #[arg(long, global = true, env = "COPILOT_BASE_URL")]
    base_url: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a single query and render the analysis
    Ask {
        /// The clinical query to analyze
        query: String,

        /// Result-count hint forwarded to the backend
        #[arg(long, default_value_t = DEFAULT_RESULT_COUNT)]
        results: u32,

        /// Print the raw response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive query session
    Session,

    /// Print the quick-start example queries
    Examples,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    let mut config = CopilotConfig::new();
    if let Some(base) = cli.base_url {
        config = config.with_api_base(base);
    }
    let client = Client::with_config(config);

    match cli.command {
        Commands::Ask {
            query,
            results,
            json,
        } => commands::ask::execute(&client, query, results, json).await,
        Commands::Session => commands::session::execute(&client).await,
        Commands::Examples => {
            commands::examples::execute();
            Ok(())
        }
    }
}
