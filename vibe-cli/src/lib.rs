//! Command-line interface for ranking venues and building vibe queries.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod query;
mod rank;

pub use error::CliError;

use query::{QueryArgs, run_query};
use rank::{RankArgs, run_rank};

const ARG_RANK_REQUEST: &str = "request";
const ARG_RANK_LEXICON: &str = "lexicon";
const ENV_RANK_REQUEST: &str = "VIBE_CMDS_RANK_REQUEST_PATH";
const ARG_QUERY_LOCATION: &str = "location";
const ARG_QUERY_TERM: &str = "term";
const ARG_QUERY_NOISE_LEVEL: &str = "noise-level";
const ARG_QUERY_COZY_FACTOR: &str = "cozy-factor";
const ARG_QUERY_FOCUS_LEVEL: &str = "focus-level";
const ENV_QUERY_LOCATION: &str = "VIBE_CMDS_QUERY_LOCATION";

/// Run the vibe CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, inputs
/// cannot be read or decoded, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
        Command::Query(args) => run_query(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "vibe",
    about = "Score, match and rank venues by atmosphere",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank venues in a JSON request against the requested vibe.
    Rank(RankArgs),
    /// Print the search query for a location and vibe.
    Query(QueryArgs),
}

#[cfg(test)]
mod tests;
