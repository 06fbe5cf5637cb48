//! Emoji record model and codepoint conversions.
//!
//! An [`EmojiRecord`] is one entry of the remote catalog. Every field is
//! optional on the wire; the accessors substitute an empty string so that
//! sorting and filtering never have to special-case missing data.

use serde::{Deserialize, Serialize};

/// Prefix of the textual codepoint form used by the catalog (`U+1F600`).
const CODEPOINT_PREFIX: &str = "U+";

/// Prefix of a hexadecimal numeric character reference (`&#x1F600;`).
const CHAR_REF_PREFIX: &str = "&#x";

/// One emoji as published by the remote catalog.
///
/// Records are treated as immutable once loaded into the catalog. Unknown
/// fields in the source document are ignored.
///
/// # Examples
///
/// ```
/// use emoji_catalog::EmojiRecord;
///
/// let record: EmojiRecord = serde_json::from_str(
///     r#"{"name":"Grinning Face","unicode":"U+1F600","category":"Smileys"}"#,
/// ).unwrap();
///
/// assert_eq!(record.name(), "Grinning Face");
/// assert_eq!(record.description(), "");
/// assert_eq!(record.glyph_reference(), "&#x1F600;");
/// assert_eq!(record.glyph().as_deref(), Some("\u{1F600}"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub unicode: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl EmojiRecord {
    /// Builds a fully populated record.
    #[must_use]
    pub fn new(name: &str, unicode: &str, category: &str, description: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            unicode: Some(unicode.to_string()),
            category: Some(category.to_string()),
            description: Some(description.to_string()),
        }
    }

    /// Display name, or `""` when absent.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Category label, or `""` when absent.
    #[must_use]
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }

    /// Free-text description, or `""` when absent.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Raw codepoint text, or `""` when absent.
    #[must_use]
    pub fn unicode(&self) -> &str {
        self.unicode.as_deref().unwrap_or_default()
    }

    /// Converts the `U+XXXX` form into a numeric character reference.
    ///
    /// Every `U+` prefix is replaced by `&#x` and a single `;` terminator is
    /// appended, so `"U+1F600"` becomes `"&#x1F600;"`.
    #[must_use]
    pub fn glyph_reference(&self) -> String {
        let mut reference = self.unicode().replace(CODEPOINT_PREFIX, CHAR_REF_PREFIX);
        reference.push(';');
        reference
    }

    /// Decodes the codepoint text into the characters it names.
    ///
    /// Accepts one or more whitespace-separated `U+<hex>` tokens (sequences
    /// such as flags or ZWJ emoji). Returns `None` if the field is missing or
    /// any token is not a valid Unicode scalar value.
    #[must_use]
    pub fn glyph(&self) -> Option<String> {
        decode_codepoints(self.unicode())
    }
}

/// Decodes whitespace-separated `U+<hex>` tokens into a string.
///
/// The prefix is matched case-insensitively (`u+1f600` is accepted).
#[must_use]
pub fn decode_codepoints(text: &str) -> Option<String> {
    let mut glyph = String::new();

    for token in text.split_whitespace() {
        let hex = token
            .strip_prefix(CODEPOINT_PREFIX)
            .or_else(|| token.strip_prefix("u+"))?;
        let value = u32::from_str_radix(hex, 16).ok()?;
        glyph.push(char::from_u32(value)?);
    }

    if glyph.is_empty() {
        None
    } else {
        Some(glyph)
    }
}
