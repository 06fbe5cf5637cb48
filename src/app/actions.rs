//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim in `main.rs` executes them in order against the Zellij host:
//! web requests, timers, and pane visibility. Keeping them as data lets the
//! whole state machine run in unit tests without a host.
//!
//! # Example
//!
//! ```
//! use emoji_catalog::app::Action;
//! use emoji_catalog::source::FetchPurpose;
//!
//! let actions = vec![
//!     Action::Fetch { purpose: FetchPurpose::Catalog },
//!     Action::SetTimeout { secs: 3.0 },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::source::FetchPurpose;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit the plugin (pressing 'q').
    CloseFocus,

    /// Issues one GET request for the configured catalog URL.
    ///
    /// The purpose travels in the request context and comes back with the
    /// response, routing it to the loading sequence or the catalog load.
    Fetch {
        /// Which flow is waiting for the response.
        purpose: FetchPurpose,
    },

    /// Arms a one-shot host timer.
    ///
    /// The host reports the same duration back when the timer fires.
    SetTimeout {
        /// Delay in seconds.
        secs: f64,
    },
}
