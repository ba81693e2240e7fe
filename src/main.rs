//! falconet - Main Entry Point
//!
//! Bootstraps configuration and injected dependencies, then hands control to
//! the HTTP adapter or the interactive loop.

use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use falconet::agent::orchestrator::Orchestrator;
use falconet::config::AgentConfig;
use falconet::error::AgentResult;
use falconet::llm::inference_api::InferenceApiClient;
use falconet::llm::provider::TextGenerator;
use falconet::tools::SearchProvider;
use falconet::{logging, repl, server};
use tracing::{error, info};

/// Minimal tool-using conversational agent
#[derive(Parser)]
#[command(name = "falconet")]
#[command(about = "Tool-using conversational agent over a hosted text-generation model")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the agent over HTTP
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = 8787)]
        port: u16,
    },
    /// Ask questions interactively
    Repl,
}

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment, logging config included.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init_default_logging();

    info!("Starting falconet v{}", env!("CARGO_PKG_VERSION"));

    let orchestrator = match build_orchestrator() {
        Ok(orchestrator) => Arc::new(orchestrator),
        Err(e) => {
            error!("Failed to initialize agent: {e}");
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Serve { port } => server::serve(orchestrator, port).await,
        Commands::Repl => repl::run(orchestrator).await,
    };

    if let Err(e) = result {
        error!("Command failed: {e}");
        process::exit(1);
    }
}

/// Bootstrap factory - loads configuration and creates the orchestrator with
/// injected dependencies.
fn build_orchestrator() -> AgentResult<Orchestrator> {
    let config = AgentConfig::from_env()?;

    let generator: Arc<dyn TextGenerator> = Arc::new(InferenceApiClient::new(config.model)?);
    let search = SearchProvider::new(config.search)?;

    Ok(Orchestrator::new(generator, search))
}
