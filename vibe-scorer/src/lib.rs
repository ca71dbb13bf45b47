//! Keyword scoring, matching and ranking for venues.
//!
//! The crate turns venue records into vibe scores and compares them with a
//! visitor's preferences:
//! - **Scoring**: [`KeywordVibeScorer`] analyses a venue's combined text
//!   against a [`Lexicon`] of keyword buckets, then adjusts the readings with
//!   structured attributes using [`BlendWeights`]. It implements the
//!   [`VibeScorer`](vibe_core::VibeScorer) trait.
//! - **Matching**: [`match_vibes`] measures how closely a venue's scores sit
//!   to the preferred level on each dimension.
//! - **Ranking**: [`rank_venues`] scores, matches and orders a batch of
//!   venues, best match first.
//!
//! Every operation is pure and infallible; only configuration
//! ([`Lexicon::from_json_str`], [`KeywordVibeScorer::new`]) can fail.
//!
//! # Examples
//!
//! ```
//! use vibe_core::{NoiseLevel, Venue, VenueAttributes, VibePreferences, WifiAccess};
//! use vibe_scorer::{KeywordVibeScorer, rank_venues};
//!
//! let study_spot = Venue::new("s1", "Study Spot").with_attributes(VenueAttributes {
//!     noise_level: Some(NoiseLevel::Quiet),
//!     wifi: Some(WifiAccess::Free),
//!     ..VenueAttributes::default()
//! });
//! let ranked = rank_venues(
//!     &KeywordVibeScorer::default(),
//!     vec![study_spot],
//!     &VibePreferences::new(20, 50, 90),
//! );
//! assert_eq!(ranked.first().map(|entry| entry.overall()), Some(96));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analyzer;
mod blend;
mod calculator;
mod error;
mod lexicon;
mod matcher;
mod ranker;

pub use analyzer::{KEYWORD_STEP, MODERATE_PULL, NEUTRAL_READING, analyze};
pub use blend::{
    AmbienceBoosts, BLEND_STEPS, BlendStep, BlendWeights, NoiseAnchors, VibeReading,
    apply_ambience, apply_noise_focus, apply_tv, apply_wifi, blend, blend_noise_level,
};
pub use calculator::KeywordVibeScorer;
pub use error::{BlendWeightsError, LexiconError};
pub use lexicon::{Bucket, KeywordBuckets, Lexicon};
pub use matcher::match_vibes;
pub use ranker::{RankedVenue, rank_by_match, rank_venues};
