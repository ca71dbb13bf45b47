//! Core domain types for the vibe engine.
//!
//! The crate models venues, slider-style preferences and the per-venue
//! outputs of scoring and matching. It also owns the [`VibeScorer`] seam that
//! scoring strategies implement and the query builder that shapes requests
//! to the external search service.
//!
//! Nothing here performs I/O: every operation is a pure function of its
//! inputs.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod dimension;
pub mod preferences;
pub mod query;
#[cfg(feature = "serde")]
pub mod record;
pub mod scorer;
pub mod scores;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod venue;

pub use dimension::{Dimension, ParseDimensionError};
pub use preferences::{MAX_LEVEL, NEUTRAL_LEVEL, VibePreferences};
pub use query::{FALLBACK_DESCRIPTION, HIGH_THRESHOLD, LOW_THRESHOLD, VibeQuery, build_vibe_query};
#[cfg(feature = "serde")]
pub use record::{
    AmbienceRecord, AttributesRecord, ContextualInfoRecord, SummariesRecord, VenueRecord,
};
pub use scorer::VibeScorer;
pub use scores::{DimensionScores, MatchBreakdown, MatchResult, MatchTier};
pub use venue::{
    Ambience, FRAGMENT_SEPARATOR, NoiseLevel, ParseNoiseLevelError, ParseWifiAccessError, Venue,
    VenueAttributes, VenueText, WifiAccess,
};
