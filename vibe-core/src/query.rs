//! Natural-language search queries shaped by vibe preferences.
//!
//! The builder runs upstream of scoring: it turns slider positions and an
//! optional search term into the sentence sent to the external search
//! service. Thresholds are strict, so levels of exactly 30 and 70 fall into
//! the band that adds nothing.

use crate::VibePreferences;

/// Description used when no term or preference contributes a fragment.
pub const FALLBACK_DESCRIPTION: &str = "restaurant or cafe";

/// Levels strictly below this lean towards the low end of an axis.
pub const LOW_THRESHOLD: u8 = 30;

/// Levels strictly above this lean towards the high end of an axis.
pub const HIGH_THRESHOLD: u8 = 70;

const FRAGMENT_SEPARATOR: &str = ", ";

/// Build the search sentence for a term, preferences and location.
///
/// The term is included only when non-empty and different from `location`.
///
/// # Examples
/// ```
/// use vibe_core::{VibePreferences, build_vibe_query};
///
/// let query = build_vibe_query("coffee", &VibePreferences::new(10, 80, 50), "Leeds");
/// assert_eq!(
///     query,
///     "Find me coffee, quiet, cozy, warm ambiance places in Leeds"
/// );
///
/// let neutral = build_vibe_query("coffee", &VibePreferences::default(), "coffee");
/// assert_eq!(neutral, "Find me restaurant or cafe places in coffee");
/// ```
pub fn build_vibe_query(term: &str, preferences: &VibePreferences, location: &str) -> String {
    let mut fragments: Vec<&str> = Vec::new();

    if !term.is_empty() && term != location {
        fragments.push(term);
    }

    let noise = preferences.noise_level();
    if noise < LOW_THRESHOLD {
        fragments.push("quiet");
    } else if noise > HIGH_THRESHOLD {
        fragments.extend(["lively", "vibrant atmosphere"]);
    }

    let cozy = preferences.cozy_factor();
    if cozy > HIGH_THRESHOLD {
        fragments.extend(["cozy", "warm ambiance"]);
    } else if cozy < LOW_THRESHOLD {
        fragments.extend(["modern", "minimalist"]);
    }

    let focus = preferences.focus_level();
    if focus > HIGH_THRESHOLD {
        fragments.extend(["good for working", "has WiFi", "quiet enough to focus"]);
    } else if focus < LOW_THRESHOLD {
        fragments.extend(["casual hangout spot", "social atmosphere"]);
    }

    let description = if fragments.is_empty() {
        FALLBACK_DESCRIPTION.to_owned()
    } else {
        fragments.join(FRAGMENT_SEPARATOR)
    };
    format!("Find me {description} places in {location}")
}

/// A search request: free-text term, location and vibe preferences.
///
/// # Examples
/// ```
/// use vibe_core::{VibePreferences, VibeQuery};
///
/// let query = VibeQuery::new("Bristol").with_term("brunch");
/// assert_eq!(query.build(), "Find me brunch places in Bristol");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct VibeQuery {
    /// Free-text search term; may be empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub term: String,
    /// Location to search in.
    pub location: String,
    /// Desired vibe.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferences: VibePreferences,
}

impl VibeQuery {
    /// Create a query for `location` with no term and neutral preferences.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            term: String::new(),
            location: location.into(),
            preferences: VibePreferences::default(),
        }
    }

    /// Set the search term while returning `self` for chaining.
    #[must_use]
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Set the preferences while returning `self` for chaining.
    #[must_use]
    pub const fn with_preferences(mut self, preferences: VibePreferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Render the search sentence.
    pub fn build(&self) -> String {
        build_vibe_query(&self.term, &self.preferences, &self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(30)]
    #[case(50)]
    #[case(70)]
    fn boundary_levels_add_nothing(#[case] level: u8) {
        let preferences = VibePreferences::new(level, level, level);
        assert_eq!(
            build_vibe_query("", &preferences, "York"),
            "Find me restaurant or cafe places in York"
        );
    }

    #[rstest]
    #[case(29, "Find me quiet places in York")]
    #[case(71, "Find me lively, vibrant atmosphere places in York")]
    fn noise_branches(#[case] level: u8, #[case] expected: &str) {
        let preferences = VibePreferences::new(level, 50, 50);
        assert_eq!(build_vibe_query("", &preferences, "York"), expected);
    }

    #[rstest]
    #[case(71, "Find me cozy, warm ambiance places in York")]
    #[case(29, "Find me modern, minimalist places in York")]
    fn cozy_branches(#[case] level: u8, #[case] expected: &str) {
        let preferences = VibePreferences::new(50, level, 50);
        assert_eq!(build_vibe_query("", &preferences, "York"), expected);
    }

    #[rstest]
    #[case(
        71,
        "Find me good for working, has WiFi, quiet enough to focus places in York"
    )]
    #[case(29, "Find me casual hangout spot, social atmosphere places in York")]
    fn focus_branches(#[case] level: u8, #[case] expected: &str) {
        let preferences = VibePreferences::new(50, 50, level);
        assert_eq!(build_vibe_query("", &preferences, "York"), expected);
    }

    #[test]
    fn fragments_keep_fixed_order() {
        let preferences = VibePreferences::new(90, 10, 90);
        assert_eq!(
            build_vibe_query("tapas", &preferences, "Seville"),
            "Find me tapas, lively, vibrant atmosphere, modern, minimalist, \
             good for working, has WiFi, quiet enough to focus places in Seville"
        );
    }

    #[test]
    fn term_equal_to_location_is_suppressed() {
        let query = build_vibe_query("coffee", &VibePreferences::default(), "coffee");
        assert_eq!(query, "Find me restaurant or cafe places in coffee");
    }

    #[test]
    fn empty_location_is_still_interpolated() {
        let query = build_vibe_query("ramen", &VibePreferences::default(), "");
        assert_eq!(query, "Find me ramen places in ");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn query_request_defaults_term_and_preferences() {
        let query: VibeQuery =
            serde_json::from_str(r#"{"location": "Leeds"}"#).expect("decode query");
        assert_eq!(query, VibeQuery::new("Leeds"));
    }
}
