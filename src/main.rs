use std::time::Duration;

use clap::Parser;
use idiom_master::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use idiom_master::{ClientConfig, IdiomMaster};

/// Learn English idioms with Vietnamese meanings in the terminal.
///
/// Logs go to stderr; set RUST_LOG and redirect stderr to keep them, e.g.
/// `RUST_LOG=debug idiom-master 2>idiom.log`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// API key for the AI explanation service
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model used for explanations
    #[arg(long, env = "IDIOM_MASTER_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Base URL of the explanation service
    #[arg(long, env = "IDIOM_MASTER_ENDPOINT", default_value = DEFAULT_BASE_URL)]
    endpoint: String,

    /// Seconds to wait for an explanation before giving up
    #[arg(
        long,
        env = "IDIOM_MASTER_TIMEOUT_SECS",
        default_value_t = 20,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,

    /// Seed for question selection, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    let args = Args::parse();
    let config = args
        .api_key
        .filter(|key| !key.trim().is_empty())
        .map(|api_key| ClientConfig {
            api_key,
            model: args.model,
            base_url: args.endpoint,
            timeout: Duration::from_secs(args.timeout_secs),
        });

    let quiz = match IdiomMaster::from_bundled(config, args.seed) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Error starting quiz: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
