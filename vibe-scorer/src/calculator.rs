//! Keyword-driven implementation of [`VibeScorer`].

use log::trace;
use vibe_core::{Dimension, DimensionScores, Venue, VibeScorer};

use crate::analyzer::analyze_lowercase;
use crate::{BlendWeights, BlendWeightsError, Lexicon, VibeReading, blend};

/// Scorer combining keyword analysis of venue text with attribute blending.
///
/// The venue's text fragments are combined in priority order and analysed
/// once per dimension. The resulting readings are then adjusted by the
/// venue's structured attributes and rounded.
///
/// # Examples
/// ```
/// use vibe_core::{DimensionScores, NoiseLevel, Venue, VenueAttributes, VibeScorer, WifiAccess};
/// use vibe_scorer::KeywordVibeScorer;
///
/// let venue = Venue::new("v1", "Reading Room").with_attributes(VenueAttributes {
///     noise_level: Some(NoiseLevel::Quiet),
///     wifi: Some(WifiAccess::Free),
///     ..VenueAttributes::default()
/// });
/// let scorer = KeywordVibeScorer::default();
/// assert_eq!(scorer.score(&venue), DimensionScores::new(32, 50, 90));
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeywordVibeScorer {
    lexicon: Lexicon,
    weights: BlendWeights,
}

impl KeywordVibeScorer {
    /// Construct a scorer from a lexicon and blend weights.
    ///
    /// # Errors
    /// Returns [`BlendWeightsError`] when the weights fail
    /// [`BlendWeights::validate`].
    pub fn new(lexicon: Lexicon, weights: BlendWeights) -> Result<Self, BlendWeightsError> {
        Ok(Self {
            lexicon,
            weights: weights.validate()?,
        })
    }

    /// Construct a scorer using a custom lexicon and the default weights.
    #[must_use]
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            weights: BlendWeights::default(),
        }
    }

    /// Keyword tables in use.
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Blend weights in use.
    #[must_use]
    pub const fn weights(&self) -> &BlendWeights {
        &self.weights
    }

    /// Compute the unrounded readings for `venue`.
    #[must_use]
    pub fn reading(&self, venue: &Venue) -> VibeReading {
        let text = venue.text.combined();
        let baseline = VibeReading {
            noise: analyze_lowercase(&text, self.lexicon.buckets(Dimension::Noise)),
            cozy: analyze_lowercase(&text, self.lexicon.buckets(Dimension::Cozy)),
            focus: analyze_lowercase(&text, self.lexicon.buckets(Dimension::Focus)),
        };
        blend(baseline, &venue.attributes, &self.weights)
    }
}

impl VibeScorer for KeywordVibeScorer {
    fn score(&self, venue: &Venue) -> DimensionScores {
        let reading = self.reading(venue);
        trace!("venue {}: readings {reading:?}", venue.id);
        DimensionScores::new(
            <Self as VibeScorer>::sanitise(reading.noise),
            <Self as VibeScorer>::sanitise(reading.cozy),
            <Self as VibeScorer>::sanitise(reading.focus),
        )
    }
}
