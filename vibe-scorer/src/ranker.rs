//! Order venues by how well they fit a visitor's preferences.

use std::cmp::Reverse;

use log::debug;
use vibe_core::{DimensionScores, MatchResult, Venue, VibePreferences, VibeScorer};

use crate::match_vibes;

/// A venue together with its scores and match against the preferences used
/// to rank it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedVenue {
    /// The ranked venue.
    pub venue: Venue,
    /// Its dimension scores.
    pub scores: DimensionScores,
    /// Its fit against the preferences.
    pub vibe_match: MatchResult,
}

impl RankedVenue {
    /// Overall match percentage used for ordering.
    #[must_use]
    pub const fn overall(&self) -> u8 {
        self.vibe_match.overall()
    }
}

/// Sort venues by overall match, best first.
///
/// The sort is stable: venues with equal overall match keep their input
/// order.
#[must_use]
pub fn rank_by_match(mut ranked: Vec<RankedVenue>) -> Vec<RankedVenue> {
    ranked.sort_by_key(|entry| Reverse(entry.overall()));
    ranked
}

/// Score, match and order `venues` against `preferences`.
///
/// Each venue is scored independently, so the scorer sees venues in input
/// order but the result is ordered by descending overall match.
///
/// # Examples
/// ```
/// use vibe_core::{Venue, VibePreferences};
/// use vibe_scorer::{KeywordVibeScorer, rank_venues};
///
/// let venues = vec![
///     Venue::new("a", "Party Barn"),
///     Venue::new("b", "Reading Nook"),
/// ];
/// let ranked = rank_venues(&KeywordVibeScorer::default(), venues, &VibePreferences::default());
/// // Neutral venues tie on a perfect match and keep their input order.
/// assert_eq!(ranked[0].venue.id, "a");
/// assert_eq!(ranked[0].overall(), 100);
/// ```
#[must_use]
pub fn rank_venues<S>(
    scorer: &S,
    venues: Vec<Venue>,
    preferences: &VibePreferences,
) -> Vec<RankedVenue>
where
    S: VibeScorer + ?Sized,
{
    let ranked = venues
        .into_iter()
        .map(|venue| {
            let scores = scorer.score(&venue);
            let vibe_match = match_vibes(&scores, preferences);
            debug!(
                "venue {}: scores {scores:?}, overall match {}",
                venue.id,
                vibe_match.overall()
            );
            RankedVenue {
                venue,
                scores,
                vibe_match,
            }
        })
        .collect();
    rank_by_match(ranked)
}
