//! Wire shape of a venue as returned by the upstream search service.
//!
//! Every field is optional and `null`-tolerant. Converting a
//! [`VenueRecord`] into a [`Venue`] parses the loosely typed attribute
//! strings; values the engine does not recognise are dropped so that the
//! matching adjustment is skipped rather than failing the whole batch.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Ambience, NoiseLevel, Venue, VenueAttributes, VenueText, WifiAccess};

/// A venue record as delivered by the search collaborator.
///
/// # Examples
/// ```
/// use vibe_core::{NoiseLevel, Venue, VenueRecord};
///
/// let record: VenueRecord = serde_json::from_str(
///     r#"{"id": "v1", "name": "Lantern", "attributes": {"NoiseLevel": "quiet"}}"#,
/// )?;
/// let venue = Venue::from(record);
/// assert_eq!(venue.attributes.noise_level, Some(NoiseLevel::Quiet));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VenueRecord {
    /// Upstream identifier.
    pub id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Generated summaries of the venue.
    pub summaries: Option<SummariesRecord>,
    /// Search-specific context.
    pub contextual_info: Option<ContextualInfoRecord>,
    /// Structured attributes.
    pub attributes: Option<AttributesRecord>,
}

/// Generated summaries of a venue.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummariesRecord {
    /// One-line summary.
    pub short: Option<String>,
    /// Medium-length summary.
    pub medium: Option<String>,
    /// Long-form summary.
    pub long: Option<String>,
}

/// Context attached to a venue for a specific search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContextualInfoRecord {
    /// Summary tailored to the query.
    pub summary: Option<String>,
    /// Review excerpt.
    pub review_snippet: Option<String>,
}

/// Structured attributes as loosely typed upstream values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttributesRecord {
    /// Noise tag such as `quiet` or `very_loud`.
    #[serde(rename = "NoiseLevel")]
    pub noise_level: Option<String>,
    /// Wi-Fi tag such as `free`, `paid` or `no`.
    #[serde(rename = "WiFi")]
    pub wifi: Option<String>,
    /// Ambience flags.
    #[serde(rename = "Ambience")]
    pub ambience: Option<AmbienceRecord>,
    /// Television presence.
    #[serde(rename = "HasTV")]
    pub has_tv: Option<bool>,
}

/// Ambience flags as delivered upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AmbienceRecord {
    /// Cozy atmosphere.
    pub cozy: Option<bool>,
    /// Casual atmosphere.
    pub casual: Option<bool>,
    /// Trendy atmosphere.
    pub trendy: Option<bool>,
    /// Intimate atmosphere.
    pub intimate: Option<bool>,
    /// Romantic atmosphere.
    pub romantic: Option<bool>,
}

impl From<VenueRecord> for Venue {
    fn from(record: VenueRecord) -> Self {
        let id = record.id.unwrap_or_default();
        let summaries = record.summaries.unwrap_or_default();
        let context = record.contextual_info.unwrap_or_default();
        let text = VenueText {
            long_summary: summaries.long,
            medium_summary: summaries.medium,
            short_summary: summaries.short,
            contextual_summary: context.summary,
            review_snippet: context.review_snippet,
        };
        let attributes = record
            .attributes
            .map(|raw| parse_attributes(&id, raw))
            .unwrap_or_default();
        Self {
            id,
            name: record.name.unwrap_or_default(),
            text,
            attributes,
        }
    }
}

impl From<AmbienceRecord> for Ambience {
    fn from(raw: AmbienceRecord) -> Self {
        Self {
            cozy: raw.cozy,
            casual: raw.casual,
            trendy: raw.trendy,
            intimate: raw.intimate,
            romantic: raw.romantic,
        }
    }
}

fn parse_attributes(venue_id: &str, raw: AttributesRecord) -> VenueAttributes {
    let noise_level = raw
        .noise_level
        .as_deref()
        .and_then(|value| match value.parse::<NoiseLevel>() {
            Ok(level) => Some(level),
            Err(err) => {
                debug!("venue {venue_id}: ignoring attribute: {err}");
                None
            }
        });
    let wifi = raw
        .wifi
        .as_deref()
        .and_then(|value| match value.parse::<WifiAccess>() {
            Ok(access) => Some(access),
            Err(err) => {
                debug!("venue {venue_id}: ignoring attribute: {err}");
                None
            }
        });
    VenueAttributes {
        noise_level,
        wifi,
        ambience: raw.ambience.map(Ambience::from),
        has_tv: raw.has_tv,
    }
}
