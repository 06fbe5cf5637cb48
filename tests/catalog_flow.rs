//! End-to-end flows driven through `handle_event`, the same seam the plugin
//! shim uses.

use emoji_catalog::app::LoadingPhase;
use emoji_catalog::source::FetchPurpose;
use emoji_catalog::ui::render_to_string;
use emoji_catalog::{handle_event, initialize, Action, AppState, Config, Event};

const CATALOG: &[u8] = br#"{"emojis": [
    {"name": "Grinning Face", "unicode": "U+1F600", "category": "Smileys", "description": "A happy face"},
    {"name": "Apple", "unicode": "U+1F34E", "category": "Food", "description": "A red fruit"}
]}"#;

fn send(state: &mut AppState, event: Event) -> Vec<Action> {
    handle_event(state, &event).expect("handler is total").1
}

fn fetched(purpose: FetchPurpose, status: u16, body: &[u8]) -> Event {
    Event::FetchCompleted {
        purpose,
        status,
        body: body.to_vec(),
    }
}

fn catalog_fetch() -> Vec<Action> {
    vec![Action::Fetch {
        purpose: FetchPurpose::Catalog,
    }]
}

fn plain_state() -> AppState {
    initialize(&Config {
        spinner_enabled: false,
        ..Config::default()
    })
}

fn names(state: &AppState) -> Vec<String> {
    state
        .catalog
        .view()
        .iter()
        .map(|r| r.name().to_string())
        .collect()
}

#[test]
fn search_then_sort_scenario() {
    let mut state = plain_state();
    assert_eq!(send(&mut state, Event::Start), catalog_fetch());
    send(&mut state, fetched(FetchPurpose::Catalog, 200, CATALOG));

    send(&mut state, Event::SearchMode);
    for c in "fruit".chars() {
        send(&mut state, Event::Char(c));
    }
    send(&mut state, Event::SubmitSearch);
    assert_eq!(names(&state), vec!["Apple"]);

    send(&mut state, Event::SearchMode);
    for _ in 0.."fruit".len() {
        send(&mut state, Event::Backspace);
    }
    send(&mut state, Event::SubmitSearch);
    send(&mut state, Event::SortAscending);
    assert_eq!(names(&state), vec!["Apple", "Grinning Face"]);
}

#[test]
fn not_found_keeps_view_and_notifies_once() {
    let mut state = plain_state();
    send(&mut state, Event::Start);
    send(&mut state, fetched(FetchPurpose::Catalog, 200, CATALOG));
    let before = names(&state);

    assert_eq!(send(&mut state, Event::LoadCatalog), catalog_fetch());
    send(&mut state, fetched(FetchPurpose::Catalog, 404, b"<html>Not Found</html>"));

    assert_eq!(names(&state), before);
    assert_eq!(state.notices_raised, 1);

    let screen = render_to_string(&state, 24, 80);
    assert_eq!(
        screen.matches("Could not load data. Check the log and URL.").count(),
        1
    );

    send(&mut state, Event::DismissNotice);
    assert!(state.notice.is_none());
    assert_eq!(state.notices_raised, 1);
}

#[test]
fn loading_sequence_hands_off_to_catalog_load() {
    let mut state = initialize(&Config::default());
    assert_eq!(state.loading.phase(), &LoadingPhase::Idle);

    assert_eq!(
        send(&mut state, Event::Start),
        vec![Action::Fetch {
            purpose: FetchPurpose::Spinner
        }]
    );
    assert_eq!(
        send(&mut state, fetched(FetchPurpose::Spinner, 200, CATALOG)),
        vec![Action::SetTimeout { secs: 3.0 }]
    );
    assert_eq!(state.loading.phase(), &LoadingPhase::Displaying);
    assert_eq!(state.loading.sample().len(), 2);

    assert_eq!(
        send(&mut state, Event::Timer { secs: 3.0 }),
        vec![Action::SetTimeout { secs: 1.0 }]
    );
    assert_eq!(state.loading.phase(), &LoadingPhase::FadingOut);

    assert_eq!(send(&mut state, Event::Timer { secs: 1.0 }), catalog_fetch());
    assert_eq!(state.loading.phase(), &LoadingPhase::Done);
    assert!(state.catalog_in_flight);

    send(&mut state, fetched(FetchPurpose::Catalog, 200, CATALOG));
    assert_eq!(state.catalog.view().len(), 2);
    assert!(render_to_string(&state, 24, 80).contains("Grinning Face"));
}

#[test]
fn manual_load_skips_dwell_and_discards_stale_timer() {
    let mut state = initialize(&Config::default());
    send(&mut state, Event::Start);
    send(&mut state, fetched(FetchPurpose::Spinner, 200, CATALOG));

    assert_eq!(
        send(&mut state, Event::LoadCatalog),
        vec![Action::SetTimeout { secs: 1.0 }]
    );
    assert_eq!(state.loading.phase(), &LoadingPhase::FadingOut);

    // The cancelled dwell timer still fires and must not advance anything.
    assert!(send(&mut state, Event::Timer { secs: 3.0 }).is_empty());
    assert_eq!(state.loading.phase(), &LoadingPhase::FadingOut);

    // A second manual load while fading is a no-op.
    assert!(send(&mut state, Event::LoadCatalog).is_empty());

    assert_eq!(send(&mut state, Event::Timer { secs: 1.0 }), catalog_fetch());
}

#[test]
fn manual_load_while_fetching_sample_loads_immediately() {
    let mut state = initialize(&Config::default());
    send(&mut state, Event::Start);

    assert_eq!(send(&mut state, Event::LoadCatalog), catalog_fetch());
    assert_eq!(state.loading.phase(), &LoadingPhase::Done);

    // The late sample is ignored.
    assert!(send(&mut state, fetched(FetchPurpose::Spinner, 200, CATALOG)).is_empty());
    assert!(state.loading.sample().is_empty());
}

#[test]
fn failed_sample_aborts_with_notice() {
    let mut state = initialize(&Config::default());
    send(&mut state, Event::Start);
    send(&mut state, fetched(FetchPurpose::Spinner, 500, b""));

    assert_eq!(state.loading.phase(), &LoadingPhase::Done);
    assert!(state.notice.is_some());
    assert!(!state.catalog.is_loaded());
}

#[test]
fn empty_sample_goes_straight_to_catalog_load() {
    let mut state = initialize(&Config::default());
    send(&mut state, Event::Start);
    assert_eq!(
        send(&mut state, fetched(FetchPurpose::Spinner, 200, b"[]")),
        catalog_fetch()
    );
    assert_eq!(state.loading.phase(), &LoadingPhase::Done);
}
