/// Dispatch Flow Tests
///
/// Exercises the full path application code takes:
/// match_media handle → register (legacy + modern) → activate → fan-out

#[path = "../common/fixtures.rs"]
mod common;
use common::{installed_mock, Recorder, TestQueries};

use mediamock_core::CHANGE_EVENT;
use mediamock_domain::MediaQueryEvent;

// ============================================================================
// End-to-End Fan-out
// ============================================================================

#[test]
fn test_legacy_and_modern_listeners_both_receive_activation() {
    let (window, mock) = installed_mock();
    let legacy = Recorder::new();
    let modern = Recorder::new();

    // Arrange: one listener per protocol, same query, same bucket.
    let mql = window.match_media(TestQueries::dark()).unwrap();
    mql.add_listener(legacy.listener());
    mql.add_event_listener(CHANGE_EVENT, modern.listener());

    // Act: declare the exact query string as matching.
    mock.activate(TestQueries::dark()).unwrap();

    // Assert: each invoked exactly once with the synthetic event.
    let expected = MediaQueryEvent::now_matching(TestQueries::dark());
    assert_eq!(legacy.events(), vec![expected.clone()]);
    assert_eq!(modern.events(), vec![expected]);

    // Clear resets the bucket.
    mock.clear();
    assert!(mock.list_listeners(TestQueries::dark()).is_empty());
}

#[test]
fn test_activation_is_scoped_to_the_exact_query_string() {
    let (window, mock) = installed_mock();
    let dark = Recorder::new();
    let tablet = Recorder::new();

    window
        .match_media(TestQueries::dark())
        .unwrap()
        .add_listener(dark.listener());
    window
        .match_media(TestQueries::tablet())
        .unwrap()
        .add_listener(tablet.listener());

    mock.activate(TestQueries::dark()).unwrap();
    mock.activate(TestQueries::dark()).unwrap();

    assert_eq!(dark.call_count(), 2);
    assert_eq!(tablet.call_count(), 0);
}

#[test]
fn test_activation_with_no_registrations_dispatches_nothing() {
    let (window, mock) = installed_mock();

    mock.activate(TestQueries::desktop()).unwrap();

    // The marker still moved: a fresh handle observes it.
    assert!(window.match_media(TestQueries::desktop()).unwrap().matches());
    assert!(mock.list_queries().is_empty());
}

#[test]
fn test_non_change_event_kind_never_registers() {
    let (window, mock) = installed_mock();
    let recorder = Recorder::new();

    let mql = window.match_media(TestQueries::dark()).unwrap();
    mql.add_event_listener("click", recorder.listener());

    mock.activate(TestQueries::dark()).unwrap();

    assert_eq!(recorder.call_count(), 0);
    assert!(mock.list_listeners(TestQueries::dark()).is_empty());
}

#[test]
fn test_invalid_query_fails_and_leaves_state_untouched() {
    let (window, mock) = installed_mock();
    let recorder = Recorder::new();

    window
        .match_media(TestQueries::light())
        .unwrap()
        .add_listener(recorder.listener());
    mock.activate(TestQueries::light()).unwrap();

    assert!(mock.activate("").is_err());

    // Prior state intact: marker, bucket, and no spurious dispatch.
    assert!(window.match_media(TestQueries::light()).unwrap().matches());
    assert_eq!(mock.list_listeners(TestQueries::light()).len(), 1);
    assert_eq!(recorder.call_count(), 1);
}

// ============================================================================
// Handle Snapshot Semantics
// ============================================================================

#[test]
fn test_matches_snapshot_follows_latest_activation() {
    let (window, mock) = installed_mock();

    mock.activate(TestQueries::light()).unwrap();

    assert!(window.match_media(TestQueries::light()).unwrap().matches());
    assert!(!window.match_media(TestQueries::dark()).unwrap().matches());

    // Only one query is matching at a time.
    mock.activate(TestQueries::dark()).unwrap();
    assert!(!window.match_media(TestQueries::light()).unwrap().matches());
    assert!(window.match_media(TestQueries::dark()).unwrap().matches());
}

#[test]
fn test_stale_handle_keeps_its_snapshot() {
    let (window, mock) = installed_mock();

    let stale = window.match_media(TestQueries::dark()).unwrap();
    mock.activate(TestQueries::dark()).unwrap();

    assert!(!stale.matches());
    assert!(window.match_media(TestQueries::dark()).unwrap().matches());
}

#[test]
fn test_removal_through_a_second_handle() {
    let (window, mock) = installed_mock();
    let recorder = Recorder::new();

    window
        .match_media(TestQueries::tablet())
        .unwrap()
        .add_event_listener(CHANGE_EVENT, recorder.listener());
    window
        .match_media(TestQueries::tablet())
        .unwrap()
        .remove_listener(&recorder.listener());

    mock.activate(TestQueries::tablet()).unwrap();

    assert_eq!(recorder.call_count(), 0);
}
