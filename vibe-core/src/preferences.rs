//! Slider-style vibe preferences: the caller's desired position on each axis.
//!
//! Levels share the polarity of [`DimensionScores`](crate::DimensionScores)
//! and live in `0..=100`. Every constructor clamps, so a preference is always
//! comparable with a score.

use crate::Dimension;

/// Upper bound of every level and score.
pub const MAX_LEVEL: u8 = 100;

/// Level used when a caller expresses no preference for an axis.
pub const NEUTRAL_LEVEL: u8 = 50;

/// Desired position on each vibe dimension.
///
/// # Examples
/// ```
/// use vibe_core::{Dimension, VibePreferences};
///
/// let preferences = VibePreferences::new(20, 80, 90);
/// assert_eq!(preferences.get(Dimension::Cozy), 80);
///
/// let clamped = VibePreferences::default().with_level(Dimension::Focus, 250);
/// assert_eq!(clamped.focus_level(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", from = "PreferenceLevels")
)]
pub struct VibePreferences {
    noise_level: u8,
    cozy_factor: u8,
    focus_level: u8,
}

impl VibePreferences {
    /// Build preferences from three levels, clamping each to `0..=100`.
    pub const fn new(noise_level: u8, cozy_factor: u8, focus_level: u8) -> Self {
        Self {
            noise_level: clamp_level(noise_level),
            cozy_factor: clamp_level(cozy_factor),
            focus_level: clamp_level(focus_level),
        }
    }

    /// Build preferences from unbounded integers, clamping into `0..=100`.
    ///
    /// # Examples
    /// ```
    /// use vibe_core::VibePreferences;
    ///
    /// let preferences = VibePreferences::from_raw(-5, 50, 140);
    /// assert_eq!(preferences, VibePreferences::new(0, 50, 100));
    /// ```
    pub fn from_raw(noise_level: i64, cozy_factor: i64, focus_level: i64) -> Self {
        Self {
            noise_level: level_from_raw(noise_level),
            cozy_factor: level_from_raw(cozy_factor),
            focus_level: level_from_raw(focus_level),
        }
    }

    /// Preferred noise: `0` quiet, `100` lively.
    pub const fn noise_level(&self) -> u8 {
        self.noise_level
    }

    /// Preferred coziness: `0` minimal, `100` very cozy.
    pub const fn cozy_factor(&self) -> u8 {
        self.cozy_factor
    }

    /// Preferred focus: `0` casual, `100` work-friendly.
    pub const fn focus_level(&self) -> u8 {
        self.focus_level
    }

    /// Return the level for a dimension.
    pub const fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Noise => self.noise_level,
            Dimension::Cozy => self.cozy_factor,
            Dimension::Focus => self.focus_level,
        }
    }

    /// Update the level for a dimension. Values above `100` are clamped.
    pub fn set_level(&mut self, dimension: Dimension, level: u8) {
        let clamped = clamp_level(level);
        match dimension {
            Dimension::Noise => self.noise_level = clamped,
            Dimension::Cozy => self.cozy_factor = clamped,
            Dimension::Focus => self.focus_level = clamped,
        }
    }

    /// Set a level while returning `self` for chaining.
    #[must_use]
    pub fn with_level(mut self, dimension: Dimension, level: u8) -> Self {
        self.set_level(dimension, level);
        self
    }
}

impl Default for VibePreferences {
    fn default() -> Self {
        Self::new(NEUTRAL_LEVEL, NEUTRAL_LEVEL, NEUTRAL_LEVEL)
    }
}

const fn clamp_level(level: u8) -> u8 {
    if level > MAX_LEVEL { MAX_LEVEL } else { level }
}

fn level_from_raw(raw: i64) -> u8 {
    u8::try_from(raw.clamp(0, i64::from(MAX_LEVEL))).unwrap_or(MAX_LEVEL)
}

/// Wire shape for preferences: any integer, absent fields neutral.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct PreferenceLevels {
    #[serde(default = "neutral_raw")]
    noise_level: i64,
    #[serde(default = "neutral_raw")]
    cozy_factor: i64,
    #[serde(default = "neutral_raw")]
    focus_level: i64,
}

#[cfg(feature = "serde")]
const fn neutral_raw() -> i64 {
    NEUTRAL_LEVEL as i64
}

#[cfg(feature = "serde")]
impl From<PreferenceLevels> for VibePreferences {
    fn from(raw: PreferenceLevels) -> Self {
        Self::from_raw(raw.noise_level, raw.cozy_factor, raw.focus_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_is_neutral_on_every_axis() {
        let preferences = VibePreferences::default();
        for dimension in Dimension::ALL {
            assert_eq!(preferences.get(dimension), NEUTRAL_LEVEL);
        }
    }

    #[rstest]
    #[case(0, 0)]
    #[case(100, 100)]
    #[case(101, 100)]
    #[case(u8::MAX, 100)]
    fn new_clamps_levels(#[case] raw: u8, #[case] expected: u8) {
        let preferences = VibePreferences::new(raw, raw, raw);
        assert_eq!(preferences.noise_level(), expected);
        assert_eq!(preferences.cozy_factor(), expected);
        assert_eq!(preferences.focus_level(), expected);
    }

    #[rstest]
    #[case(i64::MIN, 0)]
    #[case(-1, 0)]
    #[case(42, 42)]
    #[case(1_000, 100)]
    fn from_raw_clamps(#[case] raw: i64, #[case] expected: u8) {
        let preferences = VibePreferences::from_raw(raw, 50, 50);
        assert_eq!(preferences.noise_level(), expected);
    }

    #[test]
    fn set_level_targets_one_dimension() {
        let mut preferences = VibePreferences::default();
        preferences.set_level(Dimension::Cozy, 90);
        assert_eq!(preferences, VibePreferences::new(50, 90, 50));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialises_camel_case_with_defaults_and_clamping() {
        let preferences: VibePreferences =
            serde_json::from_str(r#"{"noiseLevel": 10, "focusLevel": 400}"#)
                .expect("decode preferences");
        assert_eq!(preferences, VibePreferences::new(10, 50, 100));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialises_camel_case() {
        let json = serde_json::to_value(VibePreferences::new(1, 2, 3)).expect("encode");
        assert_eq!(
            json,
            serde_json::json!({"noiseLevel": 1, "cozyFactor": 2, "focusLevel": 3})
        );
    }
}
