//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. The provider client is instantiated here.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chatrelay_core::ports::CompletionPort;
use chatrelay_core::{ProviderSettings, RelayService, SettingsError, SystemPrompt};
use chatrelay_groq::{GroqClient, GroqClientConfig, GroqError};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Default bind address: all interfaces.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default bind port.
pub const DEFAULT_PORT: u16 = 5001;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins.
    #[default]
    AllowAll,
    /// Allow specific origins.
    AllowOrigins(Vec<String>),
}

impl CorsConfig {
    /// Build from a comma-separated origin list; empty means allow all.
    pub fn from_origin_list(list: &str) -> Self {
        let origins: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();

        if origins.is_empty() {
            Self::AllowAll
        } else {
            Self::AllowOrigins(origins)
        }
    }
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Development mode: verbose logging. Never enable in production.
    pub debug: bool,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Replace the built-in persona with this file's contents.
    pub system_prompt_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: false,
            cors: CorsConfig::default(),
            system_prompt_file: None,
        }
    }
}

impl ServerConfig {
    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Errors that stop the server from starting.
///
/// All of these happen before any port is bound.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Failed to initialize Groq client: {0}")]
    Provider(#[from] GroqError),

    #[error("Failed to read system prompt from {path}: {source}")]
    SystemPrompt {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Application context for the Axum adapter.
///
/// Built once at startup and shared by every handler.
#[derive(Debug, Clone)]
pub struct AxumContext {
    /// The relay service handling `/chat`.
    pub relay: RelayService,
}

impl AxumContext {
    pub const fn new(relay: RelayService) -> Self {
        Self { relay }
    }

    /// Build a context around any completion provider.
    pub fn with_provider(
        provider: Arc<dyn CompletionPort>,
        system_prompt: SystemPrompt,
        model: impl Into<String>,
    ) -> Self {
        Self::new(RelayService::new(provider, system_prompt, model))
    }
}

/// Resolve the persona: the configured file if any, else the built-in text.
fn load_system_prompt(config: &ServerConfig) -> Result<SystemPrompt, BootstrapError> {
    match &config.system_prompt_file {
        Some(path) => {
            SystemPrompt::from_file(path).map_err(|source| BootstrapError::SystemPrompt {
                path: path.clone(),
                source,
            })
        }
        None => Ok(SystemPrompt::default()),
    }
}

/// Bootstrap the relay with the Groq provider.
pub fn bootstrap(
    config: &ServerConfig,
    settings: ProviderSettings,
) -> Result<AxumContext, BootstrapError> {
    let system_prompt = load_system_prompt(config)?;

    let client_config = GroqClientConfig::with_secret(settings.api_key.clone())
        .with_optional_base_url(settings.base_url.clone());
    let client = GroqClient::new(client_config)?;

    tracing::info!(
        target: "chatrelay.bootstrap",
        model = %settings.model,
        endpoint = %client.endpoint(),
        system_prompt_file = ?config.system_prompt_file,
        "Relay bootstrap complete"
    );

    Ok(AxumContext::with_provider(
        Arc::new(client),
        system_prompt,
        settings.model,
    ))
}

/// Serve on a pre-bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, ctx: AxumContext, cors: &CorsConfig) -> Result<()> {
    let addr: SocketAddr = listener.local_addr()?;
    let app = crate::routes::create_router(ctx, cors);

    info!("chatrelay listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("chatrelay shut down");
    Ok(())
}

/// Bind the configured address and serve.
pub async fn start_server(config: &ServerConfig, ctx: AxumContext) -> Result<()> {
    if config.debug {
        warn!("Debug mode is enabled. Do not run with --debug in production.");
    }

    let listener = TcpListener::bind(config.bind_addr()).await?;
    serve(listener, ctx, &config.cors).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatrelay_core::API_KEY_VAR;
    use std::io::Write;

    fn settings(key: &str) -> ProviderSettings {
        ProviderSettings::from_lookup(|k| (k == API_KEY_VAR).then(|| key.to_string())).unwrap()
    }

    #[test]
    fn test_cors_from_origin_list() {
        assert_eq!(CorsConfig::from_origin_list(""), CorsConfig::AllowAll);
        assert_eq!(CorsConfig::from_origin_list(" , "), CorsConfig::AllowAll);
        assert_eq!(
            CorsConfig::from_origin_list("https://gtholidays.in, http://localhost:3000"),
            CorsConfig::AllowOrigins(vec![
                "https://gtholidays.in".to_string(),
                "http://localhost:3000".to_string()
            ])
        );
    }

    #[test]
    fn test_default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:5001");
        assert!(!config.debug);
        assert_eq!(config.cors, CorsConfig::AllowAll);
    }

    #[test]
    fn test_bootstrap_uses_default_persona() {
        let ctx = bootstrap(&ServerConfig::default(), settings("gsk_test")).unwrap();
        assert_eq!(ctx.relay.system_prompt(), &SystemPrompt::default());
        assert_eq!(ctx.relay.model(), chatrelay_core::DEFAULT_MODEL);
    }

    #[test]
    fn test_bootstrap_reads_prompt_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Only talk about Goa.").unwrap();

        let config = ServerConfig {
            system_prompt_file: Some(file.path().to_path_buf()),
            ..ServerConfig::default()
        };
        let ctx = bootstrap(&config, settings("gsk_test")).unwrap();
        assert_eq!(ctx.relay.system_prompt().as_str(), "Only talk about Goa.");
    }

    #[test]
    fn test_bootstrap_missing_prompt_file() {
        let config = ServerConfig {
            system_prompt_file: Some(PathBuf::from("/nonexistent/chatrelay/prompt.txt")),
            ..ServerConfig::default()
        };
        let err = bootstrap(&config, settings("gsk_test")).unwrap_err();
        assert!(matches!(err, BootstrapError::SystemPrompt { .. }));
        assert!(err.to_string().contains("/nonexistent/chatrelay/prompt.txt"));
    }

    #[test]
    fn test_bootstrap_rejects_bad_base_url() {
        let settings = ProviderSettings {
            base_url: Some("not a url".to_string()),
            ..settings("gsk_test")
        };
        let err = bootstrap(&ServerConfig::default(), settings).unwrap_err();
        assert!(matches!(err, BootstrapError::Provider(_)));
        assert!(err.to_string().starts_with("Failed to initialize Groq client"));
    }
}
