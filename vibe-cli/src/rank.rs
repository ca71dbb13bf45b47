//! Rank command implementation for the vibe CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use vibe_core::{DimensionScores, MatchResult, MatchTier, Venue, VenueRecord, VibePreferences};
use vibe_scorer::{KeywordVibeScorer, Lexicon, RankedVenue, rank_venues};

use crate::fs::{open_input, require_existing_file};
use crate::{ARG_RANK_LEXICON, ARG_RANK_REQUEST, CliError, ENV_RANK_REQUEST};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score each venue in a JSON request against the keyword \
                 lexicon and venue attributes, match the scores against the \
                 request's preferences, and print the venues best match first.",
    about = "Rank venues by how well they match a vibe"
)]
#[ortho_config(prefix = "VIBE")]
pub(crate) struct RankArgs {
    /// Path to a JSON file holding `preferences` and `venues`.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to a JSON lexicon replacing the built-in keyword tables.
    #[arg(long = ARG_RANK_LEXICON, value_name = "path")]
    #[serde(default)]
    pub(crate) lexicon: Option<Utf8PathBuf>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Optional path to a custom lexicon.
    pub(crate) lexicon: Option<Utf8PathBuf>,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing_file(&self.request_path, ARG_RANK_REQUEST)?;
        if let Some(lexicon) = &self.lexicon {
            require_existing_file(lexicon, ARG_RANK_LEXICON)?;
        }
        Ok(())
    }

    fn scorer(&self) -> Result<KeywordVibeScorer, CliError> {
        match &self.lexicon {
            Some(path) => load_lexicon(path).map(KeywordVibeScorer::with_lexicon),
            None => Ok(KeywordVibeScorer::default()),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_RANK_REQUEST,
            env: ENV_RANK_REQUEST,
        })?;
        Ok(Self {
            request_path,
            lexicon: args.lexicon,
        })
    }
}

/// Request payload: preferences plus the venues returned by search.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RankRequest {
    #[serde(default)]
    pub(crate) preferences: VibePreferences,
    #[serde(default)]
    pub(crate) venues: Vec<VenueRecord>,
}

/// Ranked venues as printed by the command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct RankReport {
    pub(crate) venues: Vec<RankedEntry>,
    pub(crate) total: usize,
}

/// One venue in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct RankedEntry {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) scores: ReportScores,
    #[serde(rename = "match")]
    pub(crate) vibe_match: ReportMatch,
    pub(crate) tier: MatchTier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ReportScores {
    pub(crate) noise: u8,
    pub(crate) cozy: u8,
    pub(crate) focus: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ReportMatch {
    pub(crate) overall: u8,
    pub(crate) breakdown: ReportScores,
}

impl From<DimensionScores> for ReportScores {
    fn from(scores: DimensionScores) -> Self {
        Self {
            noise: scores.noise(),
            cozy: scores.cozy(),
            focus: scores.focus(),
        }
    }
}

impl From<MatchResult> for ReportMatch {
    fn from(result: MatchResult) -> Self {
        let breakdown = result.breakdown();
        Self {
            overall: result.overall(),
            breakdown: ReportScores {
                noise: breakdown.noise(),
                cozy: breakdown.cozy(),
                focus: breakdown.focus(),
            },
        }
    }
}

impl From<RankedVenue> for RankedEntry {
    fn from(ranked: RankedVenue) -> Self {
        Self {
            id: ranked.venue.id,
            name: ranked.venue.name,
            scores: ranked.scores.into(),
            vibe_match: ranked.vibe_match.into(),
            tier: ranked.vibe_match.tier(),
        }
    }
}

impl RankReport {
    fn from_ranking(ranking: Vec<RankedVenue>) -> Self {
        let venues: Vec<RankedEntry> = ranking.into_iter().map(RankedEntry::from).collect();
        let total = venues.len();
        Self { venues, total }
    }
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let report = execute_rank(args)?;
    write_rank_report(writer, &report)
}

fn execute_rank(args: RankArgs) -> Result<RankReport, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let scorer = config.scorer()?;
    let request = load_rank_request(&config.request_path)?;
    info!(
        "ranking {} venues from {}",
        request.venues.len(),
        config.request_path
    );
    Ok(rank_request(&scorer, request))
}

pub(crate) fn rank_request(scorer: &KeywordVibeScorer, request: RankRequest) -> RankReport {
    let venues: Vec<Venue> = request.venues.into_iter().map(Venue::from).collect();
    RankReport::from_ranking(rank_venues(scorer, venues, &request.preferences))
}

/// Loads a JSON-encoded [`RankRequest`] from disk.
pub(crate) fn load_rank_request(path: &Utf8Path) -> Result<RankRequest, CliError> {
    let reader = open_input(path).map_err(|source| CliError::OpenRankRequest {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRankRequest {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a JSON lexicon from disk.
pub(crate) fn load_lexicon(path: &Utf8Path) -> Result<Lexicon, CliError> {
    let reader = open_input(path).map_err(|source| CliError::OpenLexicon {
        path: path.to_path_buf(),
        source,
    })?;
    Lexicon::from_reader(reader).map_err(|source| CliError::InvalidLexicon {
        path: path.to_path_buf(),
        source,
    })
}

fn write_rank_report(writer: &mut dyn Write, report: &RankReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseRankReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
