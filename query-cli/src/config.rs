//! Command-line and environment configuration.

use std::path::{Path, PathBuf};

use clap::Parser;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Parser)]
#[command(name = "query-frontend")]
#[command(version, about = "Send queries to the backend and show its answers", long_about = None)]
pub struct Args {
    /// Base URL of the backend serving `POST /query`
    #[arg(long, env = "QUERY_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Send a single query, print the response and exit
    #[arg(short, long)]
    pub query: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Load `.env` from the working directory or its parents.
///
/// Returns the loaded path, or `None` when there is no such file. Parse
/// errors are returned to the caller.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    allow_missing(dotenvy::dotenv())
}

/// Like `load_dotenv`, for an explicit file. Returns whether it existed.
pub fn load_dotenv_from(path: &Path) -> Result<bool, dotenvy::Error> {
    allow_missing(dotenvy::from_path(path)).map(|loaded| loaded.is_some())
}

fn allow_missing<T>(result: Result<T, dotenvy::Error>) -> Result<Option<T>, dotenvy::Error> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
