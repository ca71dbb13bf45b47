//! Behavioural coverage for matching and ranking venues.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use vibe_core::{
    MatchBreakdown, MatchResult, MatchTier, NoiseLevel, Venue, VenueAttributes, VenueText,
    VibePreferences, VibeScorer, WifiAccess,
};
use vibe_scorer::{KeywordVibeScorer, RankedVenue, match_vibes, rank_venues};

#[fixture]
fn scorer() -> KeywordVibeScorer {
    KeywordVibeScorer::default()
}

#[fixture]
fn preferences() -> RefCell<VibePreferences> {
    RefCell::new(VibePreferences::default())
}

#[fixture]
fn vibe_match() -> RefCell<Option<MatchResult>> {
    RefCell::new(None)
}

#[fixture]
fn ranking() -> RefCell<Vec<RankedVenue>> {
    RefCell::new(Vec::new())
}

fn study_spot() -> Venue {
    Venue::new("study", "Study Spot").with_attributes(VenueAttributes {
        noise_level: Some(NoiseLevel::Quiet),
        wifi: Some(WifiAccess::Free),
        ..VenueAttributes::default()
    })
}

fn party_bar() -> Venue {
    Venue::new("party", "Party Bar")
        .with_text(VenueText {
            medium_summary: Some("A lively, packed bar scene with dancing".to_owned()),
            ..VenueText::default()
        })
        .with_attributes(VenueAttributes {
            noise_level: Some(NoiseLevel::VeryLoud),
            has_tv: Some(true),
            ..VenueAttributes::default()
        })
}

fn neutral_cafe(id: &str) -> Venue {
    Venue::new(id, "Neutral Cafe")
}

fn ranked_ids(ranking: &RefCell<Vec<RankedVenue>>) -> Vec<String> {
    ranking
        .borrow()
        .iter()
        .map(|entry| entry.venue.id.clone())
        .collect()
}

#[given("a visitor who wants a quiet, neutral-cozy, focused venue")]
fn focused_visitor(preferences: &RefCell<VibePreferences>) {
    *preferences.borrow_mut() = VibePreferences::new(20, 50, 90);
}

#[given("a visitor with neutral preferences")]
fn neutral_visitor(preferences: &RefCell<VibePreferences>) {
    *preferences.borrow_mut() = VibePreferences::default();
}

#[when("I match the quiet study spot")]
fn match_study_spot(
    scorer: &KeywordVibeScorer,
    preferences: &RefCell<VibePreferences>,
    vibe_match: &RefCell<Option<MatchResult>>,
) {
    let scores = scorer.score(&study_spot());
    *vibe_match.borrow_mut() = Some(match_vibes(&scores, &preferences.borrow()));
}

#[when("I rank the party bar, the neutral cafe and the quiet study spot")]
fn rank_mixed(
    scorer: &KeywordVibeScorer,
    preferences: &RefCell<VibePreferences>,
    ranking: &RefCell<Vec<RankedVenue>>,
) {
    let venues = vec![party_bar(), neutral_cafe("cafe"), study_spot()];
    *ranking.borrow_mut() = rank_venues(scorer, venues, &preferences.borrow());
}

#[when("I rank two neutral cafes after the party bar")]
fn rank_ties(
    scorer: &KeywordVibeScorer,
    preferences: &RefCell<VibePreferences>,
    ranking: &RefCell<Vec<RankedVenue>>,
) {
    let venues = vec![party_bar(), neutral_cafe("cafe-a"), neutral_cafe("cafe-b")];
    *ranking.borrow_mut() = rank_venues(scorer, venues, &preferences.borrow());
}

#[then("the breakdown is noise 88, cozy 100 and focus 100")]
fn breakdown_matches(vibe_match: &RefCell<Option<MatchResult>>) {
    let result = vibe_match
        .borrow()
        .unwrap_or_else(|| panic!("match must be recorded"));
    assert_eq!(result.breakdown(), MatchBreakdown::new(88, 100, 100));
}

#[then("the overall match is 96 and rated excellent")]
fn overall_matches(vibe_match: &RefCell<Option<MatchResult>>) {
    let result = vibe_match
        .borrow()
        .unwrap_or_else(|| panic!("match must be recorded"));
    assert_eq!(result.overall(), 96);
    assert_eq!(result.tier(), MatchTier::Excellent);
}

#[then("the ranking is study spot, neutral cafe, party bar")]
fn mixed_order(ranking: &RefCell<Vec<RankedVenue>>) {
    assert_eq!(ranked_ids(ranking), ["study", "cafe", "party"]);
}

#[then("the neutral cafes lead in their original order")]
fn tie_order(ranking: &RefCell<Vec<RankedVenue>>) {
    assert_eq!(ranked_ids(ranking), ["cafe-a", "cafe-b", "party"]);
}

#[scenario(path = "tests/features/ranking.feature", index = 0)]
fn excellent_match(
    scorer: KeywordVibeScorer,
    preferences: RefCell<VibePreferences>,
    vibe_match: RefCell<Option<MatchResult>>,
    ranking: RefCell<Vec<RankedVenue>>,
) {
    let _ = (scorer, preferences, vibe_match, ranking);
}

#[scenario(path = "tests/features/ranking.feature", index = 1)]
fn best_match_first(
    scorer: KeywordVibeScorer,
    preferences: RefCell<VibePreferences>,
    vibe_match: RefCell<Option<MatchResult>>,
    ranking: RefCell<Vec<RankedVenue>>,
) {
    let _ = (scorer, preferences, vibe_match, ranking);
}

#[scenario(path = "tests/features/ranking.feature", index = 2)]
fn ties_are_stable(
    scorer: KeywordVibeScorer,
    preferences: RefCell<VibePreferences>,
    vibe_match: RefCell<Option<MatchResult>>,
    ranking: RefCell<Vec<RankedVenue>>,
) {
    let _ = (scorer, preferences, vibe_match, ranking);
}
