//! `chatrelay` entry point.

use std::process::ExitCode;

use chatrelay_axum::start_server;
use chatrelay_cli::{Cli, CliError, init_tracing, prepare, report_startup_error};
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    // .env first so clap's env fallbacks see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.debug);

    let (config, ctx) = match prepare(&cli, |key| std::env::var(key).ok()) {
        Ok(ready) => ready,
        Err(err) => {
            let _ = report_startup_error(&err, &mut std::io::stderr());
            return ExitCode::from(CliError::from(err).exit_code());
        }
    };

    if let Err(err) = start_server(&config, ctx).await {
        let err = CliError::from(err);
        tracing::error!("{err}");
        eprintln!("ERROR: {err}");
        return ExitCode::from(err.exit_code());
    }

    ExitCode::SUCCESS
}
