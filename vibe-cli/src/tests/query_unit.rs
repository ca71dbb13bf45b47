//! Focused unit tests covering query CLI configuration and output.

use super::*;
use crate::query::{query_from_layers_for_test, run_query_with};
use rstest::rstest;
use vibe_core::{VibePreferences, VibeQuery};

#[rstest]
fn converting_query_without_location_errors() {
    let err = VibeQuery::try_from(QueryArgs::default()).expect_err("missing location");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_QUERY_LOCATION);
            assert_eq!(env, ENV_QUERY_LOCATION);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn absent_levels_default_to_neutral() {
    let args = QueryArgs {
        location: Some("Leeds".to_owned()),
        noise_level: Some(10),
        ..QueryArgs::default()
    };
    let query = VibeQuery::try_from(args).expect("query should build");
    assert_eq!(query.preferences, VibePreferences::new(10, 50, 50));
    assert!(query.term.is_empty());
}

#[rstest]
#[case(None, None, None, "Find me restaurant or cafe places in Leeds")]
#[case(Some("tea"), Some(80), None, "Find me tea, lively, vibrant atmosphere places in Leeds")]
#[case(Some("Leeds"), None, Some(90), "Find me good for working, has WiFi, quiet enough to focus places in Leeds")]
fn run_query_prints_sentence(
    #[case] term: Option<&str>,
    #[case] noise_level: Option<u8>,
    #[case] focus_level: Option<u8>,
    #[case] expected: &str,
) {
    let args = QueryArgs {
        location: Some("Leeds".to_owned()),
        term: term.map(str::to_owned),
        noise_level,
        focus_level,
        ..QueryArgs::default()
    };
    let mut buffer = Vec::new();
    run_query_with(args, &mut buffer).expect("query should succeed");
    assert_eq!(String::from_utf8(buffer).expect("utf-8 output"), format!("{expected}\n"));
}

#[rstest]
fn clap_rejects_levels_above_byte_range() {
    let err = Cli::try_parse_from(["vibe", "query", "--location", "Leeds", "--noise-level", "300"])
        .expect_err("300 does not fit a level");
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[rstest]
fn levels_above_hundred_are_clamped() {
    let args = QueryArgs {
        location: Some("Leeds".to_owned()),
        cozy_factor: Some(200),
        ..QueryArgs::default()
    };
    let query = VibeQuery::try_from(args).expect("query should build");
    assert_eq!(query.preferences.cozy_factor(), 100);
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({ "location": "Bath", "term": "scones", "cozy_factor": 90 }),
        None,
    );
    composer.push_environment(json!({ "location": "Bristol" }));
    composer.push_cli(json!({ "term": "cider" }));

    let query = query_from_layers_for_test(composer.layers()).expect("merged query should build");
    assert_eq!(query.location, "Bristol");
    assert_eq!(query.term, "cider");
    assert_eq!(query.preferences.cozy_factor(), 90);
    assert_eq!(
        query.build(),
        "Find me cider, cozy, warm ambiance places in Bristol"
    );
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "noise_level": "loud" }));

    let err = query_from_layers_for_test(composer.layers())
        .expect_err("invalid layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}
