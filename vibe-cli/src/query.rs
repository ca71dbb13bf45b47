//! Query command: print the search sentence for a term, location and vibe.

use std::io::Write;

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use vibe_core::{NEUTRAL_LEVEL, VibePreferences, VibeQuery};

use crate::{
    ARG_QUERY_COZY_FACTOR, ARG_QUERY_FOCUS_LEVEL, ARG_QUERY_LOCATION, ARG_QUERY_NOISE_LEVEL,
    ARG_QUERY_TERM, CliError, ENV_QUERY_LOCATION,
};

/// CLI arguments for the `query` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Build the natural-language search sentence sent to the \
                 venue search service. Levels run from 0 to 100; values \
                 below 30 or above 70 add descriptive phrases.",
    about = "Print the search query for a vibe"
)]
#[ortho_config(prefix = "VIBE")]
pub(crate) struct QueryArgs {
    /// Location to search in.
    #[arg(long = ARG_QUERY_LOCATION, value_name = "place")]
    #[serde(default)]
    pub(crate) location: Option<String>,
    /// Free-text search term.
    #[arg(long = ARG_QUERY_TERM, value_name = "text")]
    #[serde(default)]
    pub(crate) term: Option<String>,
    /// Desired noise level (0 silent, 100 lively).
    #[arg(long = ARG_QUERY_NOISE_LEVEL, value_name = "level")]
    #[serde(default)]
    pub(crate) noise_level: Option<u8>,
    /// Desired coziness (0 sterile, 100 warm).
    #[arg(long = ARG_QUERY_COZY_FACTOR, value_name = "level")]
    #[serde(default)]
    pub(crate) cozy_factor: Option<u8>,
    /// Desired focus (0 social, 100 work-friendly).
    #[arg(long = ARG_QUERY_FOCUS_LEVEL, value_name = "level")]
    #[serde(default)]
    pub(crate) focus_level: Option<u8>,
}

impl QueryArgs {
    pub(crate) fn into_query(self) -> Result<VibeQuery, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        VibeQuery::try_from(merged)
    }
}

impl TryFrom<QueryArgs> for VibeQuery {
    type Error = CliError;

    fn try_from(args: QueryArgs) -> Result<Self, Self::Error> {
        let location = args.location.ok_or(CliError::MissingArgument {
            field: ARG_QUERY_LOCATION,
            env: ENV_QUERY_LOCATION,
        })?;
        let preferences = VibePreferences::new(
            args.noise_level.unwrap_or(NEUTRAL_LEVEL),
            args.cozy_factor.unwrap_or(NEUTRAL_LEVEL),
            args.focus_level.unwrap_or(NEUTRAL_LEVEL),
        );
        Ok(Self::new(location)
            .with_term(args.term.unwrap_or_default())
            .with_preferences(preferences))
    }
}

pub(super) fn run_query(args: QueryArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_query_with(args, &mut stdout)
}

pub(super) fn run_query_with(args: QueryArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let query = args.into_query()?;
    writeln!(writer, "{}", query.build()).map_err(CliError::WriteOutput)
}

#[cfg(test)]
pub(crate) fn query_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<VibeQuery, CliError> {
    let merged = QueryArgs::merge_from_layers(layers).map_err(CliError::from)?;
    VibeQuery::try_from(merged)
}
