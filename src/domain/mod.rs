//! Domain layer for the emoji catalog plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`emoji`]: The emoji record model and codepoint conversions

pub mod emoji;
pub mod error;

pub use emoji::EmojiRecord;
pub use error::{CatalogError, Result};
