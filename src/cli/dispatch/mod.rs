//! Maps validated CLI matches to the action the binary executes.

use crate::cli::actions::{Action, server::Args};
use crate::cli::commands::{ARG_DIST_DIR, ARG_PORT};
use crate::portal::RuntimeConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing or the frontend options are invalid.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8080);
    let dist_dir = matches
        .get_one::<String>(ARG_DIST_DIR)
        .map(PathBuf::from)
        .context("missing required argument: --dist-dir")?;

    let runtime = RuntimeConfig::parse(matches)?;

    Ok(Action::Server(Args {
        port,
        dist_dir,
        runtime,
    }))
}
