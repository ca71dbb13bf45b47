//! Error types emitted by the vibe CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use vibe_scorer::LexiconError;

/// Errors emitted by the vibe CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the rank request file failed.
    #[error("failed to open rank request at {path:?}: {source}")]
    OpenRankRequest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Rank request JSON could not be decoded.
    #[error("failed to parse rank request JSON at {path:?}: {source}")]
    ParseRankRequest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Opening the lexicon file failed.
    #[error("failed to open lexicon at {path:?}: {source}")]
    OpenLexicon {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The lexicon file was malformed or contained invalid phrases.
    #[error("invalid lexicon at {path:?}: {source}")]
    InvalidLexicon {
        path: Utf8PathBuf,
        #[source]
        source: LexiconError,
    },
    /// Serialising the ranking report failed.
    #[error("failed to serialise ranking report: {0}")]
    SerialiseRankReport(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
