//! Request tagging for catalog fetches.
//!
//! Zellij echoes a string map back with every web request result. The plugin
//! stores the [`FetchPurpose`] under [`PURPOSE_KEY`] so that a response can be
//! routed to the loading sequence or to the normal catalog load.

use std::collections::BTreeMap;
use std::fmt;

/// Context key under which the fetch purpose travels.
pub const PURPOSE_KEY: &str = "emoji_catalog_purpose";

/// Why a catalog fetch was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchPurpose {
    /// Sample records for the decorative loading sequence.
    Spinner,
    /// The standard load-and-render path.
    Catalog,
}

impl FetchPurpose {
    /// Stable wire name stored in the request context.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spinner => "spinner",
            Self::Catalog => "catalog",
        }
    }

    /// Builds the request context map for this purpose.
    #[must_use]
    pub fn to_context(self) -> BTreeMap<String, String> {
        BTreeMap::from([(PURPOSE_KEY.to_string(), self.as_str().to_string())])
    }

    /// Recovers the purpose from a request context echoed by the host.
    ///
    /// Returns `None` for responses to requests this plugin did not tag.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        match context.get(PURPOSE_KEY).map(String::as_str) {
            Some("spinner") => Some(Self::Spinner),
            Some("catalog") => Some(Self::Catalog),
            _ => None,
        }
    }
}

impl fmt::Display for FetchPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purpose_survives_the_request_context() {
        for purpose in [FetchPurpose::Spinner, FetchPurpose::Catalog] {
            assert_eq!(FetchPurpose::from_context(&purpose.to_context()), Some(purpose));
        }
    }

    #[test]
    fn untagged_context_has_no_purpose() {
        let mut context = BTreeMap::new();
        assert_eq!(FetchPurpose::from_context(&context), None);

        context.insert(PURPOSE_KEY.to_string(), "other".to_string());
        assert_eq!(FetchPurpose::from_context(&context), None);
    }
}
