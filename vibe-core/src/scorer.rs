//! Score venues along the vibe dimensions.
//!
//! The `VibeScorer` trait turns a [`Venue`](crate::Venue) into
//! [`DimensionScores`](crate::DimensionScores).

use crate::{DimensionScores, MAX_LEVEL, Venue};

/// Derive dimension scores for a venue.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a batch of venues
/// can be scored in parallel. The method is infallible; implementers must
/// fall back to the neutral midpoint when a venue carries no signal, and must
/// return identical scores for identical venues.
///
/// Use [`VibeScorer::sanitise`] to turn a fractional intermediate into a
/// score.
///
/// # Examples
///
/// ```rust
/// use vibe_core::{DimensionScores, Venue, VibeScorer};
///
/// struct NeutralScorer;
///
/// impl VibeScorer for NeutralScorer {
///     fn score(&self, _venue: &Venue) -> DimensionScores {
///         DimensionScores::new(50, 50, 50)
///     }
/// }
///
/// let venue = Venue::new("v1", "Corner Café");
/// assert_eq!(NeutralScorer.score(&venue), DimensionScores::new(50, 50, 50));
/// ```
pub trait VibeScorer: Send + Sync {
    /// Return the dimension scores for `venue`.
    fn score(&self, venue: &Venue) -> DimensionScores;

    /// Clamp and round a raw score into `0..=100`.
    ///
    /// Non-finite values become `0`. Halves round away from zero.
    fn sanitise(raw: f64) -> u8
    where
        Self: Sized,
    {
        if !raw.is_finite() {
            return 0;
        }
        let bounded = raw.clamp(0.0, f64::from(MAX_LEVEL)).round();
        // In range after the clamp, so the cast cannot truncate.
        bounded as u8
    }
}
