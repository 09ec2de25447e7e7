//! Command-line arguments for the `chatrelay` binary.
//!
//! Every flag has an environment variable fallback so the server can be
//! configured entirely from a `.env` file.

use std::path::PathBuf;

use chatrelay_axum::bootstrap::{DEFAULT_HOST, DEFAULT_PORT};
use chatrelay_axum::{CorsConfig, ServerConfig};
use clap::Parser;

/// Travel assistant chat relay.
#[derive(Debug, Parser)]
#[command(name = "chatrelay")]
#[command(about = "HTTP relay between a travel chat widget and the Groq chat API")]
#[command(version)]
pub struct Cli {
    /// Interface to bind
    #[arg(long, env = "CHATRELAY_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "CHATRELAY_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Development mode: verbose logging. Never use in production.
    #[arg(long, env = "CHATRELAY_DEBUG")]
    pub debug: bool,

    /// Read the assistant persona from this file instead of the built-in one
    #[arg(long, env = "SYSTEM_PROMPT_FILE")]
    pub system_prompt_file: Option<PathBuf>,

    /// Comma-separated list of allowed CORS origins (empty allows any)
    #[arg(long, env = "CHATRELAY_CORS_ORIGINS", default_value = "")]
    pub cors_origins: String,
}

impl Cli {
    /// Translate arguments into the web adapter's configuration.
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            debug: self.debug,
            cors: CorsConfig::from_origin_list(&self.cors_origins),
            system_prompt_file: self.system_prompt_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_map_to_server_config() {
        let cli = Cli::try_parse_from([
            "chatrelay",
            "--host",
            "127.0.0.1",
            "-p",
            "8080",
            "--debug",
            "--system-prompt-file",
            "/etc/chatrelay/persona.txt",
            "--cors-origins",
            "https://gtholidays.in",
        ])
        .unwrap();

        let config = cli.server_config();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert!(config.debug);
        assert_eq!(
            config.system_prompt_file,
            Some(PathBuf::from("/etc/chatrelay/persona.txt"))
        );
        assert_eq!(
            config.cors,
            CorsConfig::AllowOrigins(vec!["https://gtholidays.in".to_string()])
        );
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["chatrelay", "--port", "not-a-port"]).is_err());
        assert!(Cli::try_parse_from(["chatrelay", "--port", "70000"]).is_err());
    }
}
