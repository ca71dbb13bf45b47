//! Adjust text-derived readings with structured venue attributes.
//!
//! Blending is a fixed pipeline of pure steps. Each step takes a
//! [`VibeReading`], touches at most one dimension, clamps that dimension to
//! `0..=100` and hands the result on. Steps whose attribute is absent return
//! the reading untouched.
//!
//! Order: noise-level blend, ambience boost, Wi-Fi boost, noise-level focus
//! adjustment, television penalty.

use vibe_core::{Ambience, MAX_LEVEL, NoiseLevel, VenueAttributes, WifiAccess};

use crate::BlendWeightsError;
use crate::analyzer::NEUTRAL_READING;

/// Fractional scores flowing through the blend pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VibeReading {
    /// Noise reading.
    pub noise: f64,
    /// Cozy reading.
    pub cozy: f64,
    /// Focus reading.
    pub focus: f64,
}

impl VibeReading {
    /// Reading for a venue that carries no signal at all.
    pub const NEUTRAL: Self = Self {
        noise: NEUTRAL_READING,
        cozy: NEUTRAL_READING,
        focus: NEUTRAL_READING,
    };
}

/// Noise readings implied by each structured noise tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseAnchors {
    /// Reading for `quiet`.
    pub quiet: f64,
    /// Reading for `average`.
    pub average: f64,
    /// Reading for `loud`.
    pub loud: f64,
    /// Reading for `very_loud`.
    pub very_loud: f64,
}

impl NoiseAnchors {
    /// Return the anchor for a tag.
    #[must_use]
    pub const fn anchor(&self, level: NoiseLevel) -> f64 {
        match level {
            NoiseLevel::Quiet => self.quiet,
            NoiseLevel::Average => self.average,
            NoiseLevel::Loud => self.loud,
            NoiseLevel::VeryLoud => self.very_loud,
        }
    }
}

impl Default for NoiseAnchors {
    fn default() -> Self {
        Self {
            quiet: 20.0,
            average: 50.0,
            loud: 75.0,
            very_loud: 95.0,
        }
    }
}

/// Cozy boosts granted per ambience flag; set flags add up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbienceBoosts {
    /// Boost when the venue is flagged cozy.
    pub cozy: f64,
    /// Boost when the venue is flagged intimate.
    pub intimate: f64,
    /// Boost when the venue is flagged romantic.
    pub romantic: f64,
    /// Boost when the venue is flagged casual.
    pub casual: f64,
}

impl AmbienceBoosts {
    /// Sum the boosts for the flags set on `ambience`.
    #[must_use]
    pub fn total(&self, ambience: &Ambience) -> f64 {
        [
            (ambience.cozy, self.cozy),
            (ambience.intimate, self.intimate),
            (ambience.romantic, self.romantic),
            (ambience.casual, self.casual),
        ]
        .into_iter()
        .filter(|&(flag, _)| Ambience::is_set(flag))
        .map(|(_, boost)| boost)
        .sum()
    }
}

impl Default for AmbienceBoosts {
    fn default() -> Self {
        Self {
            cozy: 25.0,
            intimate: 20.0,
            romantic: 15.0,
            casual: 10.0,
        }
    }
}

/// Tunable constants for attribute blending.
///
/// [`BlendWeights::default`] reproduces the stock behaviour: the structured
/// noise tag outweighs text 60/40, and the focus adjustments are +25 for
/// free Wi-Fi, +15 for paid Wi-Fi, +15 for a quiet tag, -20 for a loud tag
/// and -10 for televisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    /// Share of the blended noise reading taken from the attribute anchor.
    pub attribute_weight: f64,
    /// Anchor readings for each noise tag.
    pub noise_anchors: NoiseAnchors,
    /// Cozy boosts per ambience flag.
    pub ambience_boosts: AmbienceBoosts,
    /// Focus boost for free Wi-Fi.
    pub free_wifi_boost: f64,
    /// Focus boost for paid Wi-Fi.
    pub paid_wifi_boost: f64,
    /// Focus boost for a `quiet` noise tag.
    pub quiet_focus_boost: f64,
    /// Focus penalty for a `loud` or `very_loud` noise tag.
    pub loud_focus_penalty: f64,
    /// Focus penalty when televisions are present.
    pub tv_focus_penalty: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            attribute_weight: 0.6,
            noise_anchors: NoiseAnchors::default(),
            ambience_boosts: AmbienceBoosts::default(),
            free_wifi_boost: 25.0,
            paid_wifi_boost: 15.0,
            quiet_focus_boost: 15.0,
            loud_focus_penalty: 20.0,
            tv_focus_penalty: 10.0,
        }
    }
}

impl BlendWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`BlendWeightsError::AttributeWeight`] when the attribute share
    /// is not finite or lies outside `0.0..=1.0`, and
    /// [`BlendWeightsError::OutOfRange`] when an anchor, boost or penalty is
    /// not finite or lies outside `0.0..=100.0`.
    pub fn validate(self) -> Result<Self, BlendWeightsError> {
        if !(self.attribute_weight.is_finite() && (0.0..=1.0).contains(&self.attribute_weight)) {
            return Err(BlendWeightsError::AttributeWeight {
                value: self.attribute_weight,
            });
        }
        for (field, value) in self.bounded_fields() {
            if !(value.is_finite() && (0.0..=f64::from(MAX_LEVEL)).contains(&value)) {
                return Err(BlendWeightsError::OutOfRange { field, value });
            }
        }
        Ok(self)
    }

    const fn bounded_fields(&self) -> [(&'static str, f64); 13] {
        [
            ("noise_anchors.quiet", self.noise_anchors.quiet),
            ("noise_anchors.average", self.noise_anchors.average),
            ("noise_anchors.loud", self.noise_anchors.loud),
            ("noise_anchors.very_loud", self.noise_anchors.very_loud),
            ("ambience_boosts.cozy", self.ambience_boosts.cozy),
            ("ambience_boosts.intimate", self.ambience_boosts.intimate),
            ("ambience_boosts.romantic", self.ambience_boosts.romantic),
            ("ambience_boosts.casual", self.ambience_boosts.casual),
            ("free_wifi_boost", self.free_wifi_boost),
            ("paid_wifi_boost", self.paid_wifi_boost),
            ("quiet_focus_boost", self.quiet_focus_boost),
            ("loud_focus_penalty", self.loud_focus_penalty),
            ("tv_focus_penalty", self.tv_focus_penalty),
        ]
    }
}

/// A single blending step.
pub type BlendStep = fn(VibeReading, &VenueAttributes, &BlendWeights) -> VibeReading;

/// The blending steps in application order.
pub const BLEND_STEPS: [BlendStep; 5] = [
    blend_noise_level,
    apply_ambience,
    apply_wifi,
    apply_noise_focus,
    apply_tv,
];

/// Run every step of [`BLEND_STEPS`] over `reading`.
///
/// # Examples
/// ```
/// use vibe_core::{NoiseLevel, VenueAttributes, WifiAccess};
/// use vibe_scorer::{BlendWeights, VibeReading, blend};
///
/// let attributes = VenueAttributes {
///     noise_level: Some(NoiseLevel::Quiet),
///     wifi: Some(WifiAccess::Free),
///     ..VenueAttributes::default()
/// };
/// let blended = blend(VibeReading::NEUTRAL, &attributes, &BlendWeights::default());
/// assert!((blended.noise - 32.0).abs() < 1e-9);
/// assert_eq!((blended.cozy, blended.focus), (50.0, 90.0));
/// ```
#[must_use]
pub fn blend(
    reading: VibeReading,
    attributes: &VenueAttributes,
    weights: &BlendWeights,
) -> VibeReading {
    BLEND_STEPS
        .iter()
        .fold(reading, |current, step| step(current, attributes, weights))
}

/// Mix the noise reading with the anchor for the venue's noise tag.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "noise blending is a weighted average"
)]
pub fn blend_noise_level(
    reading: VibeReading,
    attributes: &VenueAttributes,
    weights: &BlendWeights,
) -> VibeReading {
    let Some(level) = attributes.noise_level else {
        return reading;
    };
    let anchor = weights.noise_anchors.anchor(level);
    let text_weight = 1.0 - weights.attribute_weight;
    VibeReading {
        noise: clamp(reading.noise * text_weight + anchor * weights.attribute_weight),
        ..reading
    }
}

/// Add the ambience boosts to the cozy reading.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "cozy boosts are additive")]
pub fn apply_ambience(
    reading: VibeReading,
    attributes: &VenueAttributes,
    weights: &BlendWeights,
) -> VibeReading {
    let Some(ambience) = attributes.ambience else {
        return reading;
    };
    VibeReading {
        cozy: clamp(reading.cozy + weights.ambience_boosts.total(&ambience)),
        ..reading
    }
}

/// Boost focus for venues offering Wi-Fi.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "focus boosts are additive")]
pub fn apply_wifi(
    reading: VibeReading,
    attributes: &VenueAttributes,
    weights: &BlendWeights,
) -> VibeReading {
    let boost = match attributes.wifi {
        Some(WifiAccess::Free) => weights.free_wifi_boost,
        Some(WifiAccess::Paid) => weights.paid_wifi_boost,
        Some(WifiAccess::None) | None => return reading,
    };
    VibeReading {
        focus: clamp(reading.focus + boost),
        ..reading
    }
}

/// Raise focus for quiet venues and lower it for loud ones.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "focus adjustments are additive")]
pub fn apply_noise_focus(
    reading: VibeReading,
    attributes: &VenueAttributes,
    weights: &BlendWeights,
) -> VibeReading {
    let adjustment = match attributes.noise_level {
        Some(NoiseLevel::Quiet) => weights.quiet_focus_boost,
        Some(level) if level.is_loud() => -weights.loud_focus_penalty,
        Some(_) | None => return reading,
    };
    VibeReading {
        focus: clamp(reading.focus + adjustment),
        ..reading
    }
}

/// Lower focus where televisions are present.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "focus penalties are subtractive")]
pub fn apply_tv(
    reading: VibeReading,
    attributes: &VenueAttributes,
    weights: &BlendWeights,
) -> VibeReading {
    if attributes.has_tv != Some(true) {
        return reading;
    }
    VibeReading {
        focus: clamp(reading.focus - weights.tv_focus_penalty),
        ..reading
    }
}

fn clamp(value: f64) -> f64 {
    value.clamp(0.0, f64::from(MAX_LEVEL))
}
