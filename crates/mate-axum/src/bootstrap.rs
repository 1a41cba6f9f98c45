//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. The concrete completion client is instantiated here
//! and injected into `MentorService`.

use std::sync::Arc;

use anyhow::{Context, Result};
use mate_core::{CompletionPort, DEFAULT_MODEL, MentorService};
use mate_openai::{DefaultOpenAiClient, OpenAiClientConfig};

/// Name reported by the liveness endpoint.
pub const SERVICE_NAME: &str = "Startup Mate AI API";

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8000;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host/interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Model identifier sent with every completion.
    pub model: String,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Completion client configuration (credential, base URL, timeout).
    pub openai: OpenAiClientConfig,
}

impl ServerConfig {
    /// Create config with default bind address and model.
    pub fn with_defaults() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            model: DEFAULT_MODEL.to_string(),
            cors: CorsConfig::default(),
            openai: OpenAiClientConfig::default(),
        }
    }

    /// Set the completion client configuration.
    #[must_use]
    pub fn with_openai(mut self, openai: OpenAiClientConfig) -> Self {
        self.openai = openai;
        self
    }

    /// Set the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// `host:port` string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
///
/// Holds the services needed by API handlers.
pub struct AxumContext {
    /// The mentoring adapter.
    pub mentor: Arc<MentorService>,
}

impl AxumContext {
    /// Build a context around any completion port.
    ///
    /// Tests use this to inject a fake upstream.
    pub fn new(completion: Arc<dyn CompletionPort>, model: impl Into<String>) -> Self {
        Self {
            mentor: Arc::new(MentorService::new(completion, model)),
        }
    }
}

/// Bootstrap the Axum server with all services.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "startup_mate.config",
        model = %config.model,
        base_url = %config.openai.base_url(),
        timeout_secs = config.openai.timeout().as_secs(),
        "Axum bootstrap resolved configuration"
    );

    let client = DefaultOpenAiClient::new(&config.openai)
        .context("Failed to create completion client")?;
    let completion: Arc<dyn CompletionPort> = Arc::new(client);

    Ok(AxumContext::new(completion, config.model.clone()))
}

/// Start the web server on the configured address.
///
/// Runs until SIGINT or SIGTERM.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config)?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("{} listening on http://{}", SERVICE_NAME, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

/// Resolves on SIGINT (Ctrl-C) or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::with_defaults();
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(matches!(config.cors, CorsConfig::AllowAll));
    }

    #[test]
    fn test_builder_methods() {
        let config = ServerConfig::with_defaults()
            .with_model("gpt-4o-mini")
            .with_allowed_origins(vec!["http://localhost:5173".to_string()]);
        assert_eq!(config.model, "gpt-4o-mini");
        assert!(matches!(config.cors, CorsConfig::AllowOrigins(ref o) if o.len() == 1));
    }

    #[test]
    fn test_bootstrap_fails_without_api_key() {
        let result = bootstrap(&ServerConfig::with_defaults());
        assert!(result.is_err());
    }

    #[test]
    fn test_bootstrap_with_api_key() {
        let config = ServerConfig::with_defaults()
            .with_openai(OpenAiClientConfig::new().with_api_key("sk-test"))
            .with_model("test-model");
        let ctx = bootstrap(&config).unwrap();
        assert_eq!(ctx.mentor.model(), "test-model");
    }
}
