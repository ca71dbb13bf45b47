//! Turn free text into a `0..=100` reading for one dimension.
//!
//! Matching is literal, case-insensitive substring containment: no
//! tokenisation and no stemming. Each lexicon entry is tested once, so a
//! phrase occurring several times in the text still counts once.

use crate::KeywordBuckets;

/// Reading for text that matches nothing.
pub const NEUTRAL_READING: f64 = 50.0;

/// Amount each leaning phrase moves the reading.
pub const KEYWORD_STEP: f64 = 15.0;

/// Share of the distance to the midpoint closed by each moderate phrase.
pub const MODERATE_PULL: f64 = 0.1;

/// Score `text` against one dimension's buckets.
///
/// Starts at [`NEUTRAL_READING`], adds [`KEYWORD_STEP`] per matching
/// leans-high phrase, subtracts it per matching leans-low phrase, then moves
/// [`MODERATE_PULL`] of the way back towards the midpoint per matching
/// moderate phrase. Buckets are visited high, low, moderate, each in
/// declaration order, and only the final value is clamped to `0..=100`.
///
/// # Examples
/// ```
/// use vibe_core::Dimension;
/// use vibe_scorer::{Lexicon, analyze};
///
/// let lexicon = Lexicon::default();
/// let noise = lexicon.buckets(Dimension::Noise);
/// assert_eq!(analyze("A Quiet, peaceful reading room", noise), 20.0);
/// assert_eq!(analyze("nothing to see", noise), 50.0);
/// ```
#[must_use]
pub fn analyze(text: &str, buckets: &KeywordBuckets) -> f64 {
    analyze_lowercase(&text.to_lowercase(), buckets)
}

/// [`analyze`] for text that is already lower-cased, such as
/// `VenueText::combined`.
#[expect(
    clippy::float_arithmetic,
    reason = "keyword analysis accumulates fractional adjustments"
)]
pub(crate) fn analyze_lowercase(haystack: &str, buckets: &KeywordBuckets) -> f64 {
    let mut reading = NEUTRAL_READING;

    for _ in matches(haystack, buckets.leans_high()) {
        reading += KEYWORD_STEP;
    }
    for _ in matches(haystack, buckets.leans_low()) {
        reading -= KEYWORD_STEP;
    }
    for _ in matches(haystack, buckets.moderate()) {
        reading += (NEUTRAL_READING - reading) * MODERATE_PULL;
    }

    reading.clamp(0.0, 100.0)
}

fn matches<'a>(haystack: &'a str, phrases: &'a [String]) -> impl Iterator<Item = &'a String> {
    phrases
        .iter()
        .filter(move |phrase| haystack.contains(phrase.as_str()))
}
