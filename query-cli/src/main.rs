use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use query_cli::config::load_dotenv;
use query_cli::{run_interactive, run_once, Args, UreqTransport};
use query_core::Api;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // Must run before parsing so `QUERY_API_URL` from .env is visible to clap.
    let dotenv = load_dotenv();
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match dotenv {
        Ok(Some(path)) => debug!(path = %path.display(), "loaded .env"),
        Ok(None) => {}
        Err(e) => warn!(error = %e, "failed to read .env, continuing with the process environment"),
    }

    let api = Api::new(&args.base_url, UreqTransport::new());
    info!(base_url = %api.base_url(), "query frontend starting");

    if let Some(query) = args.query.as_deref() {
        let ok = run_once(&api, query, io::stdout().lock())?;
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    run_interactive(&api, io::stdin().lock(), io::stdout().lock())?;
    Ok(ExitCode::SUCCESS)
}
