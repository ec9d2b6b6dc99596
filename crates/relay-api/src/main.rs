//! Relay server entry point.
//!
//! Start the server with:
//! ```bash
//! OPENAI_API_KEY=xxx ELEVENLABS_API_KEY=yyy cargo run -p relay-api
//! ```

use std::sync::Arc;

use clap::Parser;
use relay_adapters::ProviderConfig;
use relay_api::{serve, AppState, Cli};
use relay_persistence::FilePromptStore;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env.local, then .env, before clap reads env fallbacks
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));
    fmt().with_env_filter(filter).with_target(false).init();

    let providers = ProviderConfig::from_env();
    if providers.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; chat, dialogue and transcription will return errors");
    }
    if providers.elevenlabs_api_key.is_none() {
        warn!("ELEVENLABS_API_KEY is not set; text-to-speech will return errors");
    }

    let config = cli.api_config();
    let store = Arc::new(FilePromptStore::new(&cli.prompt_file));
    info!(
        prompt_file = %cli.prompt_file.display(),
        agent_model = %cli.agent_model,
        cors_origins = ?config.cors_origins,
        "Starting relay server"
    );

    let state = AppState::from_providers(
        config.clone(),
        &providers,
        store,
        Some(cli.agent_model.as_str()),
    );
    serve(config, state).await?;
    Ok(())
}
