//! Compare dimension scores against a visitor's preferences.

use vibe_core::{
    Dimension, DimensionScores, MAX_LEVEL, MatchBreakdown, MatchResult, VibePreferences,
};

/// Compute how closely `scores` fit `preferences`.
///
/// Each dimension's match is `100 - |preference - score|`. The overall match
/// is the mean of the three unrounded per-dimension values, rounded with
/// halves away from zero. Breakdown values are rounded independently, so the
/// overall never inherits rounding from the breakdown.
///
/// # Examples
/// ```
/// use vibe_core::{DimensionScores, MatchBreakdown, VibePreferences};
/// use vibe_scorer::match_vibes;
///
/// let result = match_vibes(
///     &DimensionScores::new(32, 50, 90),
///     &VibePreferences::new(20, 50, 90),
/// );
/// assert_eq!(result.breakdown(), MatchBreakdown::new(88, 100, 100));
/// assert_eq!(result.overall(), 96);
/// ```
#[must_use]
pub fn match_vibes(scores: &DimensionScores, preferences: &VibePreferences) -> MatchResult {
    let [noise, cozy, focus] =
        Dimension::ALL.map(|dimension| closeness(scores.get(dimension), preferences.get(dimension)));
    let breakdown = MatchBreakdown::new(
        round_percentage(noise),
        round_percentage(cozy),
        round_percentage(focus),
    );
    MatchResult::new(round_percentage(mean(noise, cozy, focus)), breakdown)
}

#[expect(clippy::float_arithmetic, reason = "matching measures distance")]
fn closeness(score: u8, preference: u8) -> f64 {
    f64::from(MAX_LEVEL) - f64::from(score.abs_diff(preference))
}

#[expect(clippy::float_arithmetic, reason = "overall match is an average")]
const fn mean(noise: f64, cozy: f64, focus: f64) -> f64 {
    (noise + cozy + focus) / 3.0
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to 0..=100 before the cast"
)]
fn round_percentage(value: f64) -> u8 {
    value.clamp(0.0, f64::from(MAX_LEVEL)).round() as u8
}
