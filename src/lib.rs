//! Facade crate for the vibe scoring engine.
//!
//! This crate re-exports the core domain types together with the keyword
//! scorer, matcher and ranker. The wire record used to decode search results
//! is available behind the `serde` feature.

#![forbid(unsafe_code)]

pub use vibe_core::{
    Ambience, Dimension, DimensionScores, MatchBreakdown, MatchResult, MatchTier, NoiseLevel,
    Venue, VenueAttributes, VenueText, VibePreferences, VibeQuery, VibeScorer, WifiAccess,
    build_vibe_query,
};

#[cfg(feature = "serde")]
pub use vibe_core::VenueRecord;

pub use vibe_scorer::{
    BlendWeights, BlendWeightsError, KeywordBuckets, KeywordVibeScorer, Lexicon, LexiconError,
    RankedVenue, analyze, match_vibes, rank_by_match, rank_venues,
};
