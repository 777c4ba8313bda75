// Tern - conversational assistant with rule-based query routing
// Main entry point

use anyhow::Result;
use clap::Parser;

use tern::agent::{Agent, CuratedAnswers};
use tern::cli::Repl;
use tern::config::load_config;
use tern::logging::ConversationLogger;
use tern::providers::{GeminiClient, SerperClient, WeatherApiClient};
use tern::router::{PolicyKind, Router, RoutingPolicy};

#[derive(Parser)]
#[command(name = "tern", version, about = "Routes queries to weather, web search, or LLM chat")]
struct Cli {
    /// Run a single query and print the result envelope as JSON
    #[arg(long)]
    query: Option<String>,

    /// Routing policy variant: strict or broad
    #[arg(long)]
    policy: Option<PolicyKind>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Load configuration; CLI flag overrides the configured policy
    let mut config = load_config()?;
    if let Some(policy) = cli.policy {
        config.policy = policy;
    }

    let router = Router::new(RoutingPolicy::new(config.policy));
    let completion = GeminiClient::new(config.gemini_api_key.clone())?;
    let search = SerperClient::new(config.serper_api_key.clone())?;
    let weather = WeatherApiClient::new(config.weather_api_key.clone())?;

    let agent = Agent::new(
        router,
        Box::new(completion),
        Box::new(search),
        Box::new(weather),
        CuratedAnswers::new(),
    );

    // One-shot mode: print the envelope JSON and exit
    if let Some(query) = cli.query {
        let envelope = agent.run_turn(&query).await;
        println!("{}", envelope.to_json());
        return Ok(());
    }

    let logger = ConversationLogger::new(config.log_dir.clone())?;

    let mut repl = Repl::new(agent, logger);
    repl.run().await?;

    Ok(())
}
