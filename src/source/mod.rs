//! Data source for the remote emoji catalog.
//!
//! Fetching is split across the plugin event loop: the application emits an
//! [`Action::Fetch`](crate::app::Action::Fetch) tagged with a
//! [`FetchPurpose`], the plugin shim issues the web request, and the result
//! comes back as an event that is decoded here with [`decode_response`].
//!
//! ```text
//! Action::Fetch ─▶ web_request(GET url, context{purpose}) ─▶ WebRequestResult
//!                                                              │
//!                         decode_response(status, body) ◀──────┘
//! ```
//!
//! - [`request`]: purpose tagging carried through the host's request context
//! - [`envelope`]: tolerant decoding of the catalog document

pub mod envelope;
pub mod request;

pub use envelope::{decode_response, parse_catalog};
pub use request::{FetchPurpose, PURPOSE_KEY};
