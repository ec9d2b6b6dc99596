//! Command-line interface for the relay server.

use std::path::PathBuf;

use clap::Parser;
use relay_orchestrator::DEFAULT_AGENT_MODEL;
use relay_persistence::DEFAULT_PROMPT_FILE;

use crate::config::ApiConfig;

/// Relay server - chat, agent dialogue, prompt self-improvement and speech over HTTP
#[derive(Parser, Debug)]
#[command(name = "relay-server")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Host to bind to
    #[arg(long, env = "RELAY_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "RELAY_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Allowed CORS origin (repeatable, or comma separated; `*` allows any)
    #[arg(long = "cors-origin", env = "RELAY_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// File holding the worker prompt rewritten by self-improvement
    #[arg(long, env = "RELAY_PROMPT_FILE", default_value = DEFAULT_PROMPT_FILE)]
    pub prompt_file: PathBuf,

    /// Model used by the agent dialogue and self-improvement loops
    #[arg(long, env = "RELAY_AGENT_MODEL", default_value = DEFAULT_AGENT_MODEL)]
    pub agent_model: String,

    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    /// Builds the server configuration from the parsed flags.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.host.clone(), self.port).with_cors_origins(self.cors_origins.clone())
    }
}
