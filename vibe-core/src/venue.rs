//! Venue records as seen by the scoring engine.
//!
//! Every field past the identifier is optional. Absence is a first-class
//! state: a missing attribute skips its adjustment and a missing text
//! fragment contributes nothing to keyword analysis.

use std::str::FromStr;

use thiserror::Error;

/// Structured noise tag reported for a venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum NoiseLevel {
    /// Conversation at a whisper.
    Quiet,
    /// Typical background chatter.
    Average,
    /// Raised voices needed.
    Loud,
    /// Hard to hear the person opposite.
    VeryLoud,
}

impl NoiseLevel {
    /// Return the tag as it appears on the wire.
    ///
    /// # Examples
    /// ```
    /// use vibe_core::NoiseLevel;
    ///
    /// assert_eq!(NoiseLevel::VeryLoud.as_str(), "very_loud");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Average => "average",
            Self::Loud => "loud",
            Self::VeryLoud => "very_loud",
        }
    }

    /// Report whether the tag is `loud` or `very_loud`.
    pub const fn is_loud(self) -> bool {
        matches!(self, Self::Loud | Self::VeryLoud)
    }
}

/// Error returned when a string is not a recognised [`NoiseLevel`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown noise level '{0}'")]
pub struct ParseNoiseLevelError(pub String);

impl FromStr for NoiseLevel {
    type Err = ParseNoiseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "average" => Ok(Self::Average),
            "loud" => Ok(Self::Loud),
            "very_loud" => Ok(Self::VeryLoud),
            _ => Err(ParseNoiseLevelError(s.to_owned())),
        }
    }
}

/// Connectivity tag reported for a venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum WifiAccess {
    /// Complimentary Wi-Fi.
    Free,
    /// Wi-Fi available for a fee.
    Paid,
    /// No Wi-Fi offered.
    None,
}

impl WifiAccess {
    /// Return the tag as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Paid => "paid",
            Self::None => "none",
        }
    }
}

/// Error returned when a string is not a recognised [`WifiAccess`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown wifi access '{0}'")]
pub struct ParseWifiAccessError(pub String);

impl FromStr for WifiAccess {
    type Err = ParseWifiAccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "paid" => Ok(Self::Paid),
            // Upstream records spell the absent case as `no`.
            "no" | "none" => Ok(Self::None),
            _ => Err(ParseWifiAccessError(s.to_owned())),
        }
    }
}

/// Ambience flags. `None` means unknown rather than `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ambience {
    /// Cozy atmosphere.
    pub cozy: Option<bool>,
    /// Casual atmosphere.
    pub casual: Option<bool>,
    /// Trendy atmosphere. Recorded but not used for scoring.
    pub trendy: Option<bool>,
    /// Intimate atmosphere.
    pub intimate: Option<bool>,
    /// Romantic atmosphere.
    pub romantic: Option<bool>,
}

impl Ambience {
    /// Report whether a flag is known to be set; unknown counts as unset.
    ///
    /// # Examples
    /// ```
    /// use vibe_core::Ambience;
    ///
    /// assert!(Ambience::is_set(Some(true)));
    /// assert!(!Ambience::is_set(None));
    /// ```
    pub const fn is_set(flag: Option<bool>) -> bool {
        matches!(flag, Some(true))
    }
}

/// Structured attributes attached to a venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VenueAttributes {
    /// Reported noise tag.
    pub noise_level: Option<NoiseLevel>,
    /// Reported Wi-Fi availability.
    pub wifi: Option<WifiAccess>,
    /// Reported ambience flags.
    pub ambience: Option<Ambience>,
    /// Whether televisions are present.
    pub has_tv: Option<bool>,
}

/// Free-text fragments describing a venue.
///
/// Fragments are read in a fixed priority order by [`VenueText::fragments`]:
/// long summary, medium summary, short summary, contextual summary and
/// review snippet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VenueText {
    /// Long-form summary.
    pub long_summary: Option<String>,
    /// Medium-length summary.
    pub medium_summary: Option<String>,
    /// One-line summary.
    pub short_summary: Option<String>,
    /// Summary tailored to the search context.
    pub contextual_summary: Option<String>,
    /// Excerpt from a review.
    pub review_snippet: Option<String>,
}

/// Separator placed between fragments when they are combined.
pub const FRAGMENT_SEPARATOR: &str = " ";

impl VenueText {
    /// Iterate over present, non-blank fragments in priority order.
    ///
    /// # Examples
    /// ```
    /// use vibe_core::VenueText;
    ///
    /// let text = VenueText {
    ///     short_summary: Some("Snug corner café".into()),
    ///     long_summary: Some("  ".into()),
    ///     ..VenueText::default()
    /// };
    /// assert_eq!(text.fragments().collect::<Vec<_>>(), ["Snug corner café"]);
    /// ```
    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        [
            &self.long_summary,
            &self.medium_summary,
            &self.short_summary,
            &self.contextual_summary,
            &self.review_snippet,
        ]
        .into_iter()
        .filter_map(Option::as_deref)
        .filter(|fragment| !fragment.trim().is_empty())
    }

    /// Join the fragments with [`FRAGMENT_SEPARATOR`] and lower-case them.
    pub fn combined(&self) -> String {
        self.fragments()
            .collect::<Vec<_>>()
            .join(FRAGMENT_SEPARATOR)
            .to_lowercase()
    }

    /// Report whether no usable fragment is present.
    pub fn is_empty(&self) -> bool {
        self.fragments().next().is_none()
    }
}

/// A venue to be scored and ranked.
///
/// # Examples
/// ```
/// use vibe_core::{NoiseLevel, Venue, VenueAttributes};
///
/// let venue = Venue::new("v1", "Corner Café").with_attributes(VenueAttributes {
///     noise_level: Some(NoiseLevel::Quiet),
///     ..VenueAttributes::default()
/// });
/// assert_eq!(venue.id, "v1");
/// assert!(venue.text.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Venue {
    /// Identifier assigned by the upstream search service.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text signals.
    pub text: VenueText,
    /// Structured signals.
    pub attributes: VenueAttributes,
}

impl Venue {
    /// Construct a venue with no text and no attributes.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            text: VenueText::default(),
            attributes: VenueAttributes::default(),
        }
    }

    /// Replace the text fragments while returning `self` for chaining.
    #[must_use]
    pub fn with_text(mut self, text: VenueText) -> Self {
        self.text = text;
        self
    }

    /// Replace the attributes while returning `self` for chaining.
    #[must_use]
    pub fn with_attributes(mut self, attributes: VenueAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}
