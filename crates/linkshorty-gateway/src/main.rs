use clap::Parser;
use linkshorty_gateway::app::App;
use linkshorty_gateway::cli::CLI;
use linkshorty_gateway::state::AppState;
use linkshorty_generator::{RandomGenerator, RandomGeneratorSettings};
use linkshorty_shortener::ShortenerService;
use linkshorty_storage::InMemoryRepository;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = CLI::try_parse()?;

    let settings = RandomGeneratorSettings::builder()
        .length(config.code_length)
        .build();
    let generator = RandomGenerator::new(settings)?;
    let repository = InMemoryRepository::new();
    let shortener =
        ShortenerService::with_max_attempts(repository, generator, config.max_attempts);

    let state = AppState::new(Arc::new(shortener), config.public_base_url.clone());

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        public_base_url = %config.public_base_url,
        code_length = config.code_length,
        max_attempts = config.max_attempts,
        "starting gateway server"
    );

    axum::serve(listener, App::router(state)).await?;

    Ok(())
}
