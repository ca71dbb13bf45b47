//! Error types raised while configuring the keyword scorer.
#![forbid(unsafe_code)]

use thiserror::Error;
use vibe_core::Dimension;

use crate::lexicon::Bucket;

/// Errors raised while building or loading a [`Lexicon`](crate::Lexicon).
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The lexicon document was not valid JSON for the expected shape.
    #[error("failed to parse lexicon document")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A bucket contained an empty or whitespace-only phrase.
    #[error("{dimension} lexicon has an empty phrase in its {bucket} bucket")]
    EmptyPhrase {
        /// Dimension whose table is affected.
        dimension: Dimension,
        /// Bucket holding the empty phrase.
        bucket: Bucket,
    },
}

/// Errors raised when [`BlendWeights`](crate::BlendWeights) are unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BlendWeightsError {
    /// The attribute share of the noise blend was outside `0.0..=1.0`.
    #[error("attribute weight {value} must be finite and within 0.0..=1.0")]
    AttributeWeight {
        /// Rejected value.
        value: f64,
    },
    /// A score anchor or adjustment was outside `0.0..=100.0`.
    #[error("{field} value {value} must be finite and within 0.0..=100.0")]
    OutOfRange {
        /// Name of the offending setting.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
}
