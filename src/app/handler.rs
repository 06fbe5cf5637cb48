//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single dispatch seam between the plugin shim and
//! the application. The shim translates host events (keys, web responses,
//! timers) into [`Event`]s; the handler mutates [`AppState`] and returns the
//! [`Action`]s the shim must carry out, plus whether a re-render is needed.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Start`, `CloseFocus`
//! - **Catalog controls**: `LoadCatalog`, `SortAscending`, `SortDescending`,
//!   `SubmitSearch`, `NextCategory`, `PreviousCategory`
//! - **Input editing**: `SearchMode`, `Char`, `Backspace`, `ExitSearch`
//! - **Navigation**: `KeyDown`, `KeyUp`, `DismissNotice`
//! - **Host callbacks**: `FetchCompleted`, `Timer`
//!
//! # Example
//!
//! ```
//! use emoji_catalog::app::{handle_event, Action, AppState, Event};
//! use emoji_catalog::source::FetchPurpose;
//!
//! let mut state = AppState::default();
//! let (_, actions) = handle_event(&mut state, &Event::LoadCatalog)?;
//! assert_eq!(actions, vec![Action::Fetch { purpose: FetchPurpose::Catalog }]);
//!
//! let body = br#"[{"name":"Apple","unicode":"U+1F34E","category":"Food"}]"#.to_vec();
//! let event = Event::FetchCompleted { purpose: FetchPurpose::Catalog, status: 200, body };
//! handle_event(&mut state, &event)?;
//! assert_eq!(state.catalog.view().len(), 1);
//! # Ok::<(), emoji_catalog::CatalogError>(())
//! ```

use super::loading::{LoadingPhase, Skip};
use super::modes::{InputMode, SortOrder};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::source::{decode_response, FetchPurpose};

/// Events triggered by user input or host callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Permissions were granted; begin the loading sequence or the first load.
    Start,
    /// Fetches the catalog again (`r`). Cuts the loading sequence short.
    LoadCatalog,
    /// Sorts the view by name, A to Z.
    SortAscending,
    /// Sorts the view by name, Z to A.
    SortDescending,
    /// Opens the search box.
    SearchMode,
    /// Appends a character to the search text.
    Char(char),
    /// Removes the last character of the search text.
    Backspace,
    /// Filters the catalog by the search text and closes the search box.
    SubmitSearch,
    /// Closes the search box, leaving the view untouched.
    ExitSearch,
    /// Selects the next category (wrapping through "all").
    NextCategory,
    /// Selects the previous category (wrapping through "all").
    PreviousCategory,
    /// Moves the card cursor down (wraps to top).
    KeyDown,
    /// Moves the card cursor up (wraps to bottom).
    KeyUp,
    /// Closes the open notice.
    DismissNotice,
    /// Hides the plugin pane.
    CloseFocus,

    /// A web request issued by [`Action::Fetch`] finished.
    FetchCompleted {
        purpose: FetchPurpose,
        status: u16,
        body: Vec<u8>,
    },

    /// A timer armed by [`Action::SetTimeout`] fired.
    Timer {
        /// Duration the timer was armed with.
        secs: f64,
    },
}

impl Event {
    /// Whether this event changes what the catalog view shows.
    const fn is_view_control(&self) -> bool {
        matches!(
            self,
            Self::SortAscending
                | Self::SortDescending
                | Self::SearchMode
                | Self::SubmitSearch
                | Self::NextCategory
                | Self::PreviousCategory
                | Self::KeyDown
                | Self::KeyUp
        )
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`. Load failures are recovered here:
/// they are logged and surfaced as a notice, never returned as errors.
///
/// # Errors
///
/// Propagates any [`CatalogError`](crate::CatalogError) that is not a load
/// failure.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    if state.loading.is_active() && event.is_view_control() {
        tracing::debug!("view controls are disabled while loading");
        return Ok((false, vec![]));
    }

    let outcome = match event {
        Event::Start => (true, start(state)),
        Event::LoadCatalog => match state.loading.skip() {
            Skip::Inactive | Skip::Aborted => (true, request_catalog(state)),
            Skip::Fading(actions) => (true, actions),
            Skip::Pending => {
                tracing::debug!("handoff load already scheduled");
                (false, vec![])
            }
        },
        Event::SortAscending => {
            state.catalog.sort_by_name_ascending();
            state.sort_order = Some(SortOrder::Ascending);
            state.reset_selection();
            (true, vec![])
        }
        Event::SortDescending => {
            state.catalog.sort_by_name_descending();
            state.sort_order = Some(SortOrder::Descending);
            state.reset_selection();
            (true, vec![])
        }
        Event::SearchMode => {
            state.input_mode = InputMode::Search;
            (true, vec![])
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search || c.is_control() {
                return Ok((false, vec![]));
            }
            state.search_input.push(*c);
            (true, vec![])
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            (state.search_input.pop().is_some(), vec![])
        }
        Event::SubmitSearch => {
            state.catalog.filter_by_term(&state.search_input);
            state.applied_term = state.search_input.trim().to_lowercase();
            state.category_index = None;
            state.sort_order = None;
            state.input_mode = InputMode::Normal;
            state.reset_selection();
            tracing::debug!(
                term = %state.applied_term,
                matches = state.catalog.view().len(),
                "search applied"
            );
            (true, vec![])
        }
        Event::ExitSearch => {
            state.input_mode = InputMode::Normal;
            (true, vec![])
        }
        Event::NextCategory | Event::PreviousCategory => {
            if matches!(event, Event::NextCategory) {
                state.select_next_category();
            } else {
                state.select_previous_category();
            }
            let category = state.selected_category().map(str::to_owned);
            state.catalog.filter_by_category(category.as_deref());
            state.applied_term.clear();
            state.sort_order = None;
            state.reset_selection();
            tracing::debug!(category = ?category, matches = state.catalog.view().len(), "category applied");
            (true, vec![])
        }
        Event::KeyDown => {
            state.move_selection_down();
            (true, vec![])
        }
        Event::KeyUp => {
            state.move_selection_up();
            (true, vec![])
        }
        Event::DismissNotice => (state.notice.take().is_some(), vec![]),
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        Event::FetchCompleted {
            purpose,
            status,
            body,
        } => match purpose {
            FetchPurpose::Catalog => (true, complete_catalog(state, *status, body)?),
            FetchPurpose::Spinner => complete_spinner(state, *status, body)?,
        },
        Event::Timer { secs } => {
            let actions = state.loading.on_timer(*secs);
            (true, track(state, actions))
        }
    };

    Ok(outcome)
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Start => "Start",
        Event::LoadCatalog => "LoadCatalog",
        Event::SortAscending => "SortAscending",
        Event::SortDescending => "SortDescending",
        Event::SearchMode => "SearchMode",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::SubmitSearch => "SubmitSearch",
        Event::ExitSearch => "ExitSearch",
        Event::NextCategory => "NextCategory",
        Event::PreviousCategory => "PreviousCategory",
        Event::KeyDown => "KeyDown",
        Event::KeyUp => "KeyUp",
        Event::DismissNotice => "DismissNotice",
        Event::CloseFocus => "CloseFocus",
        Event::FetchCompleted { .. } => "FetchCompleted",
        Event::Timer { .. } => "Timer",
    }
}

fn start(state: &mut AppState) -> Vec<Action> {
    if state.started {
        return vec![];
    }
    state.started = true;

    if state.loading.phase() == &LoadingPhase::Idle {
        tracing::info!("starting loading sequence");
        state.loading.start()
    } else {
        request_catalog(state)
    }
}

/// Issues a catalog fetch unless one is already outstanding.
fn request_catalog(state: &mut AppState) -> Vec<Action> {
    if state.catalog_in_flight {
        tracing::debug!("catalog fetch already in flight, ignoring load");
        return vec![];
    }
    tracing::info!("loading catalog");
    track(
        state,
        vec![Action::Fetch {
            purpose: FetchPurpose::Catalog,
        }],
    )
}

/// Marks a catalog fetch as outstanding when `actions` contain one.
fn track(state: &mut AppState, actions: Vec<Action>) -> Vec<Action> {
    if actions.iter().any(|a| {
        matches!(
            a,
            Action::Fetch {
                purpose: FetchPurpose::Catalog
            }
        )
    }) {
        state.catalog_in_flight = true;
    }
    actions
}

fn complete_catalog(state: &mut AppState, status: u16, body: &[u8]) -> Result<Vec<Action>> {
    state.catalog_in_flight = false;

    match decode_response(status, body) {
        Ok(records) => {
            tracing::info!(count = records.len(), "catalog loaded");
            state.apply_load(records);
        }
        Err(e) if e.is_load_failure() => {
            tracing::error!(error = %e, status, "catalog load failed");
            state.raise_load_failure();
        }
        Err(e) => return Err(e),
    }
    Ok(vec![])
}

fn complete_spinner(state: &mut AppState, status: u16, body: &[u8]) -> Result<(bool, Vec<Action>)> {
    if state.loading.phase() != &LoadingPhase::Fetching {
        tracing::debug!("discarding spinner sample for an abandoned sequence");
        return Ok((false, vec![]));
    }

    match decode_response(status, body) {
        Ok(records) => {
            let actions = state.loading.show_sample(&records);
            Ok((true, track(state, actions)))
        }
        Err(e) if e.is_load_failure() => {
            tracing::error!(error = %e, status, "spinner sample load failed");
            state.loading.abort();
            state.raise_load_failure();
            Ok((true, vec![]))
        }
        Err(e) => Err(e),
    }
}
