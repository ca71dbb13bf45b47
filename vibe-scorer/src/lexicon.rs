//! Keyword tables mapping each vibe dimension to representative phrases.
//!
//! A [`Lexicon`] holds one [`KeywordBuckets`] per dimension. Each bucket
//! keeps its phrases in declaration order because the analyzer's moderate
//! adjustment is order-sensitive. Phrases are stored lower-cased so matching
//! only has to normalise the text once.
//!
//! Tables can be tuned without touching the calculation code by loading a
//! JSON document:
//!
//! ```
//! use vibe_core::Dimension;
//! use vibe_scorer::Lexicon;
//!
//! let lexicon = Lexicon::from_json_str(
//!     r#"{
//!         "noise": {"leans_high": ["Rowdy"], "leans_low": ["hushed"]},
//!         "cozy": {"leans_high": ["candlelit"]},
//!         "focus": {"moderate": ["long tables"]}
//!     }"#,
//! )?;
//! assert_eq!(lexicon.buckets(Dimension::Noise).leans_high(), ["rowdy"]);
//! # Ok::<(), vibe_scorer::LexiconError>(())
//! ```

use std::collections::HashSet;
use std::io::Read;

use log::warn;
use serde::Deserialize;
use vibe_core::Dimension;

use crate::LexiconError;

/// One of the three phrase groups within a dimension's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// Phrases that push the score up.
    LeansHigh,
    /// Phrases that push the score down.
    LeansLow,
    /// Phrases that pull the score towards the midpoint.
    Moderate,
}

impl Bucket {
    /// Return the bucket name as used in lexicon documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LeansHigh => "leans_high",
            Self::LeansLow => "leans_low",
            Self::Moderate => "moderate",
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phrase buckets for a single dimension.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordBuckets {
    leans_high: Vec<String>,
    leans_low: Vec<String>,
    moderate: Vec<String>,
}

impl KeywordBuckets {
    /// Build buckets for `dimension`, lower-casing every phrase.
    ///
    /// # Errors
    /// Returns [`LexiconError::EmptyPhrase`] when a phrase is empty or only
    /// whitespace.
    pub fn new<H, L, M>(
        dimension: Dimension,
        leans_high: H,
        leans_low: L,
        moderate: M,
    ) -> Result<Self, LexiconError>
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
        L: IntoIterator,
        L::Item: AsRef<str>,
        M: IntoIterator,
        M::Item: AsRef<str>,
    {
        Ok(Self {
            leans_high: normalise(dimension, Bucket::LeansHigh, leans_high)?,
            leans_low: normalise(dimension, Bucket::LeansLow, leans_low)?,
            moderate: normalise(dimension, Bucket::Moderate, moderate)?,
        })
    }

    fn from_static(leans_high: &[&str], leans_low: &[&str], moderate: &[&str]) -> Self {
        let owned = |phrases: &[&str]| phrases.iter().map(|&phrase| phrase.to_owned()).collect();
        Self {
            leans_high: owned(leans_high),
            leans_low: owned(leans_low),
            moderate: owned(moderate),
        }
    }

    /// Phrases that add to the score, in declaration order.
    #[must_use]
    pub fn leans_high(&self) -> &[String] {
        &self.leans_high
    }

    /// Phrases that subtract from the score, in declaration order.
    #[must_use]
    pub fn leans_low(&self) -> &[String] {
        &self.leans_low
    }

    /// Phrases that pull the score towards the midpoint, in declaration order.
    #[must_use]
    pub fn moderate(&self) -> &[String] {
        &self.moderate
    }
}

fn normalise<I>(
    dimension: Dimension,
    bucket: Bucket,
    phrases: I,
) -> Result<Vec<String>, LexiconError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut normalised = Vec::new();
    for raw in phrases {
        let phrase = raw.as_ref();
        if phrase.trim().is_empty() {
            return Err(LexiconError::EmptyPhrase { dimension, bucket });
        }
        let lowered = phrase.to_lowercase();
        if !seen.insert(lowered.clone()) {
            warn!("{dimension} lexicon repeats '{lowered}' in its {bucket} bucket; each entry counts");
        }
        normalised.push(lowered);
    }
    Ok(normalised)
}

/// Keyword tables for all three dimensions.
///
/// [`Lexicon::default`] returns the built-in tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    noise: KeywordBuckets,
    cozy: KeywordBuckets,
    focus: KeywordBuckets,
}

impl Lexicon {
    /// Assemble a lexicon from per-dimension buckets.
    #[must_use]
    pub const fn new(noise: KeywordBuckets, cozy: KeywordBuckets, focus: KeywordBuckets) -> Self {
        Self { noise, cozy, focus }
    }

    /// Return the buckets for a dimension.
    #[must_use]
    pub const fn buckets(&self, dimension: Dimension) -> &KeywordBuckets {
        match dimension {
            Dimension::Noise => &self.noise,
            Dimension::Cozy => &self.cozy,
            Dimension::Focus => &self.focus,
        }
    }

    /// Parse a lexicon from a JSON document.
    ///
    /// Every dimension must be present; absent buckets are empty. Unknown
    /// keys are rejected so typos surface instead of silently disabling a
    /// table.
    ///
    /// # Errors
    /// Returns [`LexiconError::Parse`] for malformed documents and
    /// [`LexiconError::EmptyPhrase`] for blank phrases.
    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        let document: LexiconDocument =
            serde_json::from_str(json).map_err(|source| LexiconError::Parse { source })?;
        document.into_lexicon()
    }

    /// Parse a lexicon from a reader yielding a JSON document.
    ///
    /// # Errors
    /// See [`Lexicon::from_json_str`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LexiconError> {
        let document: LexiconDocument =
            serde_json::from_reader(reader).map_err(|source| LexiconError::Parse { source })?;
        document.into_lexicon()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            noise: KeywordBuckets::from_static(NOISE_LIVELY, NOISE_QUIET, NOISE_MODERATE),
            cozy: KeywordBuckets::from_static(COZY_HIGH, COZY_LOW, COZY_MODERATE),
            focus: KeywordBuckets::from_static(FOCUS_HIGH, FOCUS_LOW, FOCUS_MODERATE),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconDocument {
    noise: BucketsDocument,
    cozy: BucketsDocument,
    focus: BucketsDocument,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct BucketsDocument {
    #[serde(default)]
    leans_high: Vec<String>,
    #[serde(default)]
    leans_low: Vec<String>,
    #[serde(default)]
    moderate: Vec<String>,
}

impl LexiconDocument {
    fn into_lexicon(self) -> Result<Lexicon, LexiconError> {
        Ok(Lexicon {
            noise: self.noise.into_buckets(Dimension::Noise)?,
            cozy: self.cozy.into_buckets(Dimension::Cozy)?,
            focus: self.focus.into_buckets(Dimension::Focus)?,
        })
    }
}

impl BucketsDocument {
    fn into_buckets(self, dimension: Dimension) -> Result<KeywordBuckets, LexiconError> {
        KeywordBuckets::new(dimension, self.leans_high, self.leans_low, self.moderate)
    }
}

const NOISE_LIVELY: &[&str] = &[
    "lively",
    "vibrant",
    "bustling",
    "energetic",
    "loud",
    "noisy",
    "crowded",
    "busy",
    "happening",
    "upbeat",
    "buzzing",
    "packed",
    "hopping",
];
const NOISE_QUIET: &[&str] = &[
    "quiet",
    "peaceful",
    "calm",
    "serene",
    "tranquil",
    "silent",
    "relaxed",
    "chill",
    "mellow",
    "soft music",
];
const NOISE_MODERATE: &[&str] = &[
    "moderate",
    "ambient",
    "background music",
    "comfortable noise",
];

const COZY_HIGH: &[&str] = &[
    "cozy",
    "warm",
    "intimate",
    "comfortable",
    "homey",
    "welcoming",
    "charming",
    "snug",
    "inviting",
    "rustic",
    "quaint",
    "cute",
    "adorable",
    "lovely ambiance",
    "fireplace",
];
const COZY_LOW: &[&str] = &[
    "sterile",
    "cold",
    "industrial",
    "minimalist",
    "modern",
    "sleek",
    "clinical",
    "bare",
    "sparse",
];
// "comfortable" also leans high; both entries apply.
const COZY_MODERATE: &[&str] = &["nice", "pleasant", "decent", "comfortable"];

const FOCUS_HIGH: &[&str] = &[
    "work",
    "working",
    "laptop",
    "laptops",
    "wifi",
    "wi-fi",
    "study",
    "studying",
    "productive",
    "focus",
    "remote work",
    "freelancer",
    "outlet",
    "outlets",
    "power outlets",
    "workspace",
    "meetings",
    "quiet corner",
    "good for work",
];
const FOCUS_LOW: &[&str] = &[
    "social",
    "hangout",
    "party",
    "date night",
    "groups",
    "loud music",
    "bar scene",
    "nightlife",
    "dancing",
];
const FOCUS_MODERATE: &[&str] = &["tables", "seating", "spacious"];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::analyze;

    #[rstest]
    #[case(Dimension::Noise, NOISE_LIVELY, NOISE_QUIET, NOISE_MODERATE)]
    #[case(Dimension::Cozy, COZY_HIGH, COZY_LOW, COZY_MODERATE)]
    #[case(Dimension::Focus, FOCUS_HIGH, FOCUS_LOW, FOCUS_MODERATE)]
    fn default_tables_keep_declaration_order(
        #[case] dimension: Dimension,
        #[case] high: &[&str],
        #[case] low: &[&str],
        #[case] moderate: &[&str],
    ) {
        let lexicon = Lexicon::default();
        let buckets = lexicon.buckets(dimension);
        assert_eq!(buckets.leans_high(), high);
        assert_eq!(buckets.leans_low(), low);
        assert_eq!(buckets.moderate(), moderate);
    }

    #[test]
    fn built_in_noise_table_starts_and_ends_as_listed() {
        let lexicon = Lexicon::default();
        let noise = lexicon.buckets(Dimension::Noise);
        assert_eq!(noise.leans_high().first().map(String::as_str), Some("lively"));
        assert_eq!(noise.leans_high().last().map(String::as_str), Some("hopping"));
        assert_eq!(
            noise.moderate(),
            ["moderate", "ambient", "background music", "comfortable noise"]
        );
        assert_eq!(
            lexicon.buckets(Dimension::Cozy).moderate(),
            ["nice", "pleasant", "decent", "comfortable"]
        );
    }

    #[test]
    fn json_document_is_lower_cased_and_absent_buckets_are_empty() {
        let lexicon = Lexicon::from_json_str(
            r#"{"noise": {"leans_high": ["Karaoke"]}, "cozy": {}, "focus": {"leans_low": ["DJ set"]}}"#,
        )
        .expect("valid lexicon");
        let noise = lexicon.buckets(Dimension::Noise);
        assert_eq!(noise.leans_high(), ["karaoke"]);
        assert!(noise.leans_low().is_empty());
        assert_eq!(lexicon.buckets(Dimension::Cozy), &KeywordBuckets::default());
        assert_eq!(lexicon.buckets(Dimension::Focus).leans_low(), ["dj set"]);
    }

    #[rstest]
    #[case::missing_dimension(r#"{"noise": {}, "cozy": {}}"#)]
    #[case::misspelt_bucket(r#"{"noise": {"leans_hi": ["loud"]}, "cozy": {}, "focus": {}}"#)]
    #[case::unknown_dimension(r#"{"noise": {}, "cozy": {}, "focus": {}, "vibe": {}}"#)]
    #[case::not_json("noise = loud")]
    fn malformed_documents_are_rejected(#[case] json: &str) {
        let err = Lexicon::from_json_str(json).expect_err("document should be rejected");
        assert!(matches!(err, LexiconError::Parse { .. }), "got {err:?}");
    }

    #[rstest]
    #[case(r#"{"noise": {}, "cozy": {"moderate": ["  "]}, "focus": {}}"#, Dimension::Cozy, Bucket::Moderate)]
    #[case(r#"{"noise": {"leans_low": [""]}, "cozy": {}, "focus": {}}"#, Dimension::Noise, Bucket::LeansLow)]
    fn blank_phrases_name_their_table(
        #[case] json: &str,
        #[case] expected_dimension: Dimension,
        #[case] expected_bucket: Bucket,
    ) {
        let err = Lexicon::from_json_str(json).expect_err("blank phrase should be rejected");
        assert!(
            matches!(
                err,
                LexiconError::EmptyPhrase { dimension, bucket }
                    if dimension == expected_dimension && bucket == expected_bucket
            ),
            "got {err:?}"
        );
    }

    #[test]
    fn reader_and_string_parsing_agree() {
        let json = r#"{"noise": {"leans_high": ["Rowdy"]}, "cozy": {}, "focus": {}}"#;
        let from_str = Lexicon::from_json_str(json).expect("valid lexicon");
        let from_reader = Lexicon::from_reader(json.as_bytes()).expect("valid lexicon");
        assert_eq!(from_str, from_reader);
    }

    #[test]
    fn duplicated_phrases_each_count() {
        let buckets = KeywordBuckets::new(Dimension::Noise, ["Loud", "loud"], [""; 0], [""; 0])
            .expect("duplicates are allowed");
        assert_eq!(buckets.leans_high(), ["loud", "loud"]);
        assert_eq!(analyze("a loud room", &buckets), 80.0);
    }
}
