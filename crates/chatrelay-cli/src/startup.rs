//! Startup sequence: logging, settings, composition, diagnostics.
//!
//! Everything here runs before the listener is bound, so a failure leaves
//! no port open.

use std::io::Write;

use chatrelay_axum::{AxumContext, BootstrapError, ServerConfig, bootstrap};
use chatrelay_core::{ProviderSettings, SettingsError};
use tracing_subscriber::EnvFilter;

use crate::parser::Cli;

const DEFAULT_FILTER: &str = "chatrelay=info,tower_http=info";
const DEBUG_FILTER: &str = "chatrelay=debug,tower_http=debug";

const MISSING_KEY_HINT: &str = "Please create a .env file with GROQ_API_KEY=your_key";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise debug mode picks the verbose filter.
pub fn init_tracing(debug: bool) {
    let fallback = if debug { DEBUG_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be installed (tests); keep that one.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Resolve settings and build the application context.
pub fn prepare<F>(cli: &Cli, lookup: F) -> Result<(ServerConfig, AxumContext), BootstrapError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = cli.server_config();
    let settings = ProviderSettings::from_lookup(lookup)?;
    let ctx = bootstrap(&config, settings)?;
    Ok((config, ctx))
}

/// Write startup diagnostics for `err` to `out`.
pub fn report_startup_error(err: &BootstrapError, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "ERROR: {err}")?;
    if matches!(
        err,
        BootstrapError::Settings(SettingsError::MissingApiKey | SettingsError::EmptyApiKey)
    ) {
        writeln!(out, "{MISSING_KEY_HINT}")?;
    }
    out.flush()
}
