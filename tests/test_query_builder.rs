//! Endpoint construction tests for `QueryBuilder` and `AmiiboFilter`.

use amiibo_api::queries::id_endpoint;
use amiibo_api::{AmiiboError, AmiiboFilter, QueryBuilder};

// ---------------------------------------------------------------------------
// QueryBuilder
// ---------------------------------------------------------------------------

#[test]
fn builder_joins_params_with_ampersand() {
    let endpoint = QueryBuilder::new("/amiibo/")
        .param("head", "00000000")
        .param("tail", "00000002")
        .build();
    assert_eq!(endpoint, "/amiibo/?head=00000000&tail=00000002");
}

#[test]
fn builder_flags_have_no_value() {
    let endpoint = QueryBuilder::new("/amiibo/")
        .flag("showgames", true)
        .flag("showusage", true)
        .build();
    assert_eq!(endpoint, "/amiibo/?showgames&showusage");
}

#[test]
fn builder_embeds_values_raw() {
    let endpoint = QueryBuilder::new("/type").param("name", "Super Mario").build();
    assert_eq!(endpoint, "/type?name=Super Mario");
}

// ---------------------------------------------------------------------------
// AmiiboFilter
// ---------------------------------------------------------------------------

#[test]
fn single_filter_has_no_trailing_separator() {
    let filter = AmiiboFilter {
        character: Some("mario".into()),
        ..Default::default()
    };
    assert_eq!(filter.endpoint().unwrap(), "/amiibo/?character=mario");
}

#[test]
fn head_tail_and_usage_flag() {
    let filter = AmiiboFilter {
        head: Some("00000000".into()),
        tail: Some("00000002".into()),
        show_usage: true,
        ..Default::default()
    };
    assert_eq!(
        filter.endpoint().unwrap(),
        "/amiibo/?head=00000000&tail=00000002&showusage"
    );
}

#[test]
fn every_filter_in_fixed_order() {
    let filter = AmiiboFilter {
        head: Some("00000000".into()),
        tail: Some("00000002".into()),
        name: Some("Mario".into()),
        type_field: Some("0x00".into()),
        character: Some("0x0000".into()),
        game_series: Some("0x000".into()),
        amiibo_series: Some("0x00".into()),
        show_games: true,
        show_usage: true,
    };
    assert_eq!(
        filter.endpoint().unwrap(),
        "/amiibo/?head=00000000&tail=00000002&name=Mario&type=0x00&character=0x0000\
         &gameseries=0x000&amiiboSeries=0x00&showgames&showusage"
    );
}

#[test]
fn empty_filter_is_bare_path() {
    assert_eq!(AmiiboFilter::default().endpoint().unwrap(), "/amiibo/");
}

#[test]
fn show_games_alone() {
    let filter = AmiiboFilter {
        show_games: true,
        ..Default::default()
    };
    assert_eq!(filter.endpoint().unwrap(), "/amiibo/?showgames");
}

#[test]
fn halves_are_counted_in_characters() {
    let filter = AmiiboFilter {
        head: Some("éééééééé".into()),
        ..Default::default()
    };
    assert!(filter.endpoint().is_ok());
}

#[test]
fn invalid_halves_report_first_failure() {
    let cases = [
        (Some("123"), None, "head must be 8 hex chars"),
        (None, Some("123456789"), "tail must be 8 hex chars"),
        (Some("123"), Some("123"), "head must be 8 hex chars"),
        (Some("12345678"), Some(""), "tail must be 8 hex chars"),
    ];

    for (head, tail, expected) in cases {
        let filter = AmiiboFilter {
            head: head.map(String::from),
            tail: tail.map(String::from),
            ..Default::default()
        };
        match filter.endpoint() {
            Err(AmiiboError::InvalidArgument(msg)) => assert_eq!(msg, expected),
            other => panic!("expected InvalidArgument for {head:?}/{tail:?}, got {other:?}"),
        }
    }
}

// ---------------------------------------------------------------------------
// id_endpoint
// ---------------------------------------------------------------------------

#[test]
fn id_endpoint_for_valid_id() {
    assert_eq!(
        id_endpoint("0000000000000002").unwrap(),
        "/amiibo/?id=0000000000000002"
    );
}

#[test]
fn id_endpoint_rejects_half_id() {
    let err = id_endpoint("00000000").unwrap_err();
    assert_eq!(err.to_string(), "Invalid argument: id must be 16 hex chars");
}
