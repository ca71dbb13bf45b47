//! Test-only `VibeScorer` implementations used by unit, behaviour and
//! property tests across the workspace.

use std::collections::HashMap;

use crate::{DimensionScores, NEUTRAL_LEVEL, Venue, VibeScorer};

/// Scorer returning preset scores keyed by venue id.
///
/// Venues without an entry score neutral on every dimension.
#[derive(Debug, Clone, Default)]
pub struct FixedScorer {
    scores: HashMap<String, DimensionScores>,
}

impl FixedScorer {
    /// Create a scorer with no preset scores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset the scores for a venue id while returning `self` for chaining.
    #[must_use]
    pub fn with_scores(mut self, venue_id: impl Into<String>, scores: DimensionScores) -> Self {
        self.scores.insert(venue_id.into(), scores);
        self
    }
}

impl VibeScorer for FixedScorer {
    fn score(&self, venue: &Venue) -> DimensionScores {
        self.scores.get(&venue.id).copied().unwrap_or(DimensionScores::new(
            NEUTRAL_LEVEL,
            NEUTRAL_LEVEL,
            NEUTRAL_LEVEL,
        ))
    }
}
