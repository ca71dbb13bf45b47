//! The three vibe axes a venue is scored on.
//!
//! The enum offers compile-time safety for per-axis lookups.
//!
//! # Examples
//! ```
//! use vibe_core::Dimension;
//!
//! assert_eq!(Dimension::Noise.as_str(), "noise");
//! assert_eq!(Dimension::Focus.to_string(), "focus");
//! ```

use thiserror::Error;

/// A qualitative atmosphere axis measured on a `0..=100` scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Dimension {
    /// `0` is silent, `100` is very lively.
    Noise,
    /// `0` is sterile or minimal, `100` is warm and intimate.
    Cozy,
    /// `0` is social and casual, `100` is work-conducive.
    Focus,
}

impl Dimension {
    /// Every dimension in the fixed evaluation order.
    pub const ALL: [Self; 3] = [Self::Noise, Self::Cozy, Self::Focus];

    /// Return the dimension as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use vibe_core::Dimension;
    ///
    /// assert_eq!(Dimension::Cozy.as_str(), "cozy");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Noise => "noise",
            Self::Cozy => "cozy",
            Self::Focus => "focus",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`Dimension`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown vibe dimension '{0}'")]
pub struct ParseDimensionError(pub String);

impl std::str::FromStr for Dimension {
    type Err = ParseDimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "noise" => Ok(Self::Noise),
            "cozy" => Ok(Self::Cozy),
            "focus" => Ok(Self::Focus),
            _ => Err(ParseDimensionError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        for dimension in Dimension::ALL {
            assert_eq!(dimension.to_string(), dimension.as_str());
        }
    }

    #[rstest]
    #[case("noise", Dimension::Noise)]
    #[case("COZY", Dimension::Cozy)]
    #[case(" Focus ", Dimension::Focus)]
    fn parsing_is_case_insensitive(#[case] raw: &str, #[case] expected: Dimension) {
        assert_eq!(Dimension::from_str(raw), Ok(expected));
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = Dimension::from_str("brightness").unwrap_err();
        assert!(err.to_string().contains("unknown vibe dimension"));
    }
}
