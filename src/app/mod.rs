//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain, source and UI
//! layers. Data flows one way:
//!
//! ```text
//! Key / web response / timer → Event → handle_event → AppState → Actions
//!                                                        │            │
//!                                                        ▼            ▼
//!                                                     render     web_request,
//!                                                               set_timeout
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`catalog`]: Source and view sets with filtering and sorting
//! - [`handler`]: Event dispatch
//! - [`loading`]: Decorative loading sequence state machine
//! - [`modes`]: Input mode and sort order
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod catalog;
pub mod handler;
pub mod loading;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use catalog::CatalogState;
pub use handler::{handle_event, Event};
pub use loading::{LoadingPhase, LoadingSequence, SpinnerTiming};
pub use modes::{InputMode, SortOrder};
pub use state::AppState;
