//! Per-venue outputs: dimension scores and match results.
//!
//! Both are plain values recomputed on every ranking pass. Constructors
//! clamp into `0..=100`, so holders never observe an out-of-range value.

use crate::{Dimension, MAX_LEVEL};

/// A venue's position on each vibe dimension, each in `0..=100`.
///
/// # Examples
/// ```
/// use vibe_core::{Dimension, DimensionScores};
///
/// let scores = DimensionScores::new(32, 50, 90);
/// assert_eq!(scores.get(Dimension::Noise), 32);
/// assert_eq!(DimensionScores::new(120, 0, 0).noise(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DimensionScores {
    noise: u8,
    cozy: u8,
    focus: u8,
}

impl DimensionScores {
    /// Build scores, clamping each to `0..=100`.
    pub const fn new(noise: u8, cozy: u8, focus: u8) -> Self {
        Self {
            noise: clamp(noise),
            cozy: clamp(cozy),
            focus: clamp(focus),
        }
    }

    /// Noise score: `0` silent, `100` very lively.
    pub const fn noise(&self) -> u8 {
        self.noise
    }

    /// Cozy score: `0` sterile, `100` maximally warm.
    pub const fn cozy(&self) -> u8 {
        self.cozy
    }

    /// Focus score: `0` social, `100` highly work-conducive.
    pub const fn focus(&self) -> u8 {
        self.focus
    }

    /// Return the score for a dimension.
    pub const fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Noise => self.noise,
            Dimension::Cozy => self.cozy,
            Dimension::Focus => self.focus,
        }
    }
}

/// Per-dimension match percentages, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatchBreakdown {
    noise: u8,
    cozy: u8,
    focus: u8,
}

impl MatchBreakdown {
    /// Build a breakdown, clamping each value to `0..=100`.
    pub const fn new(noise: u8, cozy: u8, focus: u8) -> Self {
        Self {
            noise: clamp(noise),
            cozy: clamp(cozy),
            focus: clamp(focus),
        }
    }

    /// Noise match percentage.
    pub const fn noise(&self) -> u8 {
        self.noise
    }

    /// Cozy match percentage.
    pub const fn cozy(&self) -> u8 {
        self.cozy
    }

    /// Focus match percentage.
    pub const fn focus(&self) -> u8 {
        self.focus
    }

    /// Return the match percentage for a dimension.
    pub const fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Noise => self.noise,
            Dimension::Cozy => self.cozy,
            Dimension::Focus => self.focus,
        }
    }
}

/// How well a venue fits a set of preferences.
///
/// # Examples
/// ```
/// use vibe_core::{MatchBreakdown, MatchResult, MatchTier};
///
/// let result = MatchResult::new(96, MatchBreakdown::new(88, 100, 100));
/// assert_eq!(result.overall(), 96);
/// assert_eq!(result.tier(), MatchTier::Excellent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatchResult {
    overall: u8,
    breakdown: MatchBreakdown,
}

impl MatchResult {
    /// Pair an overall percentage with its breakdown. `overall` is clamped.
    pub const fn new(overall: u8, breakdown: MatchBreakdown) -> Self {
        Self {
            overall: clamp(overall),
            breakdown,
        }
    }

    /// Overall match percentage.
    pub const fn overall(&self) -> u8 {
        self.overall
    }

    /// Per-dimension percentages.
    pub const fn breakdown(&self) -> MatchBreakdown {
        self.breakdown
    }

    /// Classify the overall percentage.
    pub const fn tier(&self) -> MatchTier {
        MatchTier::from_percentage(self.overall)
    }
}

/// Coarse banding of a match percentage for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum MatchTier {
    /// Below 20%.
    Mismatch,
    /// 20% to 39%.
    Poor,
    /// 40% to 59%.
    Fair,
    /// 60% to 79%.
    Good,
    /// 80% and above.
    Excellent,
}

impl MatchTier {
    /// Band a percentage.
    ///
    /// # Examples
    /// ```
    /// use vibe_core::MatchTier;
    ///
    /// assert_eq!(MatchTier::from_percentage(80), MatchTier::Excellent);
    /// assert_eq!(MatchTier::from_percentage(79), MatchTier::Good);
    /// assert_eq!(MatchTier::from_percentage(19), MatchTier::Mismatch);
    /// ```
    pub const fn from_percentage(percentage: u8) -> Self {
        match percentage {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            20..=39 => Self::Poor,
            _ => Self::Mismatch,
        }
    }

    /// Return the tier as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
            Self::Mismatch => "mismatch",
        }
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn clamp(value: u8) -> u8 {
    if value > MAX_LEVEL { MAX_LEVEL } else { value }
}
