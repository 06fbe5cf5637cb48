//! Tolerant decoding of the catalog document.
//!
//! The endpoint may return a bare JSON array of records or an object that
//! wraps the array under `emojis` or `items`. Any other shape decodes to an
//! empty catalog rather than an error.

use crate::domain::error::{CatalogError, Result};
use crate::domain::EmojiRecord;
use serde_json::Value;

/// Object keys that may hold the record array, checked in order.
const ENVELOPE_KEYS: [&str; 2] = ["emojis", "items"];

/// Decodes a web request result into catalog records.
///
/// Any status outside `200..=299` is a load failure, as is a body that is not
/// JSON or whose records do not have the expected field types.
///
/// # Errors
///
/// Returns [`CatalogError::Http`] for non-success statuses and
/// [`CatalogError::Parse`] for malformed bodies.
///
/// # Examples
///
/// ```
/// use emoji_catalog::source::decode_response;
///
/// let records = decode_response(200, br#"{"items":[{"name":"Apple"}]}"#).unwrap();
/// assert_eq!(records[0].name(), "Apple");
///
/// assert!(decode_response(404, b"not found").is_err());
/// ```
pub fn decode_response(status: u16, body: &[u8]) -> Result<Vec<EmojiRecord>> {
    if !(200..=299).contains(&status) {
        tracing::debug!(status, body_len = body.len(), "catalog request failed");
        return Err(CatalogError::Http { status });
    }

    parse_catalog(body)
}

/// Parses a catalog document, accepting every supported envelope shape.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] if the body is not valid JSON or the
/// record array contains entries that are not record objects.
pub fn parse_catalog(body: &[u8]) -> Result<Vec<EmojiRecord>> {
    let document: Value = serde_json::from_slice(body)?;

    let records = match document {
        Value::Array(_) => document,
        Value::Object(mut fields) => {
            let Some(array) = ENVELOPE_KEYS
                .iter()
                .find_map(|key| fields.remove(*key).filter(Value::is_array))
            else {
                tracing::debug!("catalog document has no record array, treating as empty");
                return Ok(Vec::new());
            };
            array
        }
        _ => {
            tracing::debug!("catalog document is not an array or object, treating as empty");
            return Ok(Vec::new());
        }
    };

    let records: Vec<EmojiRecord> = serde_json::from_value(records)?;
    tracing::debug!(record_count = records.len(), "catalog decoded");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const APPLE: &str = r#"{"name":"Apple","unicode":"U+1F34E","category":"Food","description":"fruit"}"#;

    #[test]
    fn accepts_bare_array() {
        let body = format!("[{APPLE}]");
        let records = parse_catalog(body.as_bytes()).expect("bare array should parse");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category(), "Food");
    }

    #[test]
    fn accepts_emojis_and_items_envelopes() {
        for key in ["emojis", "items"] {
            let body = format!(r#"{{"{key}":[{APPLE},{APPLE}]}}"#);
            let records = parse_catalog(body.as_bytes()).expect("envelope should parse");
            assert_eq!(records.len(), 2, "key {key}");
        }
    }

    #[test]
    fn emojis_key_wins_over_items() {
        let body = format!(r#"{{"items":[{APPLE},{APPLE}],"emojis":[{APPLE}]}}"#);
        let records = parse_catalog(body.as_bytes()).expect("envelope should parse");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn unknown_shapes_decode_to_empty() {
        for body in [r#"{"data":[]}"#, r#"{"emojis":"nope"}"#, "42", r#""text""#, "null"] {
            let records = parse_catalog(body.as_bytes()).expect("unknown shape is not an error");
            assert!(records.is_empty(), "body {body}");
        }
    }

    #[test]
    fn malformed_json_is_a_load_failure() {
        let err = parse_catalog(b"{not json").expect_err("should fail");
        assert!(err.is_load_failure());
    }

    #[test]
    fn non_object_records_are_a_load_failure() {
        let err = parse_catalog(b"[1, 2, 3]").expect_err("should fail");
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn non_success_status_is_rejected_before_parsing() {
        let err = decode_response(404, APPLE.as_bytes()).expect_err("404 should fail");
        assert!(matches!(err, CatalogError::Http { status: 404 }));

        let err = decode_response(500, b"").expect_err("500 should fail");
        assert!(err.is_load_failure());
    }
}
