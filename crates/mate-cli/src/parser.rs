//! Command-line parser.
//!
//! Every option has an environment fallback so the server can be configured
//! from a `.env` file or container environment alone.

use std::time::Duration;

use clap::Parser;
use mate_axum::ServerConfig;
use mate_axum::bootstrap::{DEFAULT_HOST, DEFAULT_PORT};
use mate_core::DEFAULT_MODEL;
use mate_openai::{DEFAULT_BASE_URL, OpenAiClientConfig};

/// Backend for the Startup Mate business-planning assistant.
#[derive(Parser)]
#[command(name = "startup-mate")]
#[command(about = "Serve the Startup Mate AI mentoring API")]
#[command(version)]
pub struct Cli {
    /// Host/interface to bind
    #[arg(long, env = "MATE_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "MATE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// API key for the completion service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    /// API root of the completion service
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub openai_base_url: String,

    /// Model identifier sent with every completion
    #[arg(long, env = "MATE_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Per-request timeout for completion calls, in seconds
    #[arg(long, env = "MATE_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,

    /// Allowed CORS origin; repeat or comma-separate. Omit to allow all.
    #[arg(long = "allowed-origin", env = "MATE_ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Build the server configuration from parsed arguments.
    pub fn server_config(&self) -> ServerConfig {
        let openai = OpenAiClientConfig::new()
            .with_api_key(self.openai_api_key.clone())
            .with_base_url(self.openai_base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs));

        let mut config = ServerConfig::with_defaults()
            .with_openai(openai)
            .with_model(self.model.clone());
        config.host.clone_from(&self.host);
        config.port = self.port;

        let origins: Vec<String> = self
            .allowed_origins
            .iter()
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();
        if !origins.is_empty() {
            config = config.with_allowed_origins(origins);
        }

        config
    }

    /// Default log directive when `RUST_LOG` is unset.
    pub const fn default_log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
