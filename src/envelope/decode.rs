//! Candidate-key envelope decoding.
//!
//! The service nests the payload under a key that depends on the endpoint and
//! on cardinality (`contact` vs `contacts`). Each operation declares the keys it
//! can receive in a [`Candidates`] registry; the decoder takes the first key of
//! the response object (in document order) that appears in the registry and
//! materializes its value in the declared [`Shape`].

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::types::{Envelope, PageContext, PagedEnvelope, Payload};
use crate::error::{BooksError, Result};

const PAGE_CONTEXT_KEY: &str = "page_context";

/// The cardinality a candidate key is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Single,
    Sequence,
}

impl Shape {
    const fn describe(self) -> &'static str {
        match self {
            Shape::Single => "a single record",
            Shape::Sequence => "a sequence of records",
        }
    }
}

/// One key a response may carry its resource under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateKey {
    pub name: &'static str,
    pub shape: Shape,
}

impl CandidateKey {
    pub const fn single(name: &'static str) -> Self {
        Self {
            name,
            shape: Shape::Single,
        }
    }

    pub const fn sequence(name: &'static str) -> Self {
        Self {
            name,
            shape: Shape::Sequence,
        }
    }
}

/// Ordered registry of the keys one operation may receive.
///
/// Registries are usually `const` items next to the resource they describe:
///
/// ```
/// use zohobooks::{CandidateKey, Candidates};
///
/// const CONTACT_KEYS: Candidates = Candidates::new(&[
///     CandidateKey::single("contact"),
///     CandidateKey::sequence("contacts"),
/// ]);
/// assert_eq!(CONTACT_KEYS.names(), vec!["contact", "contacts"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates(Cow<'static, [CandidateKey]>);

impl Candidates {
    /// No resource expected; used for message-only responses.
    pub const NONE: Candidates = Candidates(Cow::Borrowed(&[]));

    pub const fn new(keys: &'static [CandidateKey]) -> Self {
        Self(Cow::Borrowed(keys))
    }

    /// Registry assembled at runtime, e.g. a narrowed list for one call site.
    pub fn from_vec(keys: Vec<CandidateKey>) -> Self {
        Self(Cow::Owned(keys))
    }

    pub fn find(&self, key: &str) -> Option<&CandidateKey> {
        self.0.iter().find(|c| c.name == key)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(|c| c.name).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CandidateKey> {
        self.0.iter()
    }
}

/// Decode an envelope whose resource may be singular or plural.
///
/// # Errors
///
/// - [`BooksError::MalformedEnvelope`] if the payload is not an object or has no integer `code`.
/// - [`BooksError::DecodeInconsistency`] if `code == 0`, the registry is non-empty and no candidate key is present.
/// - [`BooksError::ShapeMismatch`] if the matched key's value has the wrong cardinality.
/// - [`BooksError::ParseError`] if the value does not deserialize into `T`.
pub fn decode<T: DeserializeOwned>(
    raw: Value,
    candidates: &Candidates,
) -> Result<Envelope<Payload<T>>> {
    let (code, message, mut body) = split_envelope(raw)?;
    let resource = match locate(&body, candidates, code)? {
        Some(candidate) => Some(materialize(&mut body, candidate)?),
        None => None,
    };
    Ok(Envelope {
        code,
        message,
        resource,
    })
}

/// Decode an envelope expected to hold a single record.
///
/// # Errors
///
/// As [`decode`], plus [`BooksError::ShapeMismatch`] when the matched key is
/// declared as a sequence.
pub fn decode_single<T: DeserializeOwned>(
    raw: Value,
    candidates: &Candidates,
) -> Result<Envelope<T>> {
    let (code, message, mut body) = split_envelope(raw)?;
    let resource = match locate(&body, candidates, code)? {
        Some(candidate) => match materialize(&mut body, candidate)? {
            Payload::Single(record) => Some(record),
            Payload::Sequence(_) => {
                return Err(requested_mismatch(candidate, Shape::Single));
            }
        },
        None => None,
    };
    Ok(Envelope {
        code,
        message,
        resource,
    })
}

/// Decode an envelope expected to hold a sequence of records.
///
/// # Errors
///
/// As [`decode`], plus [`BooksError::ShapeMismatch`] when the matched key is
/// declared as a single record.
pub fn decode_sequence<T: DeserializeOwned>(
    raw: Value,
    candidates: &Candidates,
) -> Result<Envelope<Vec<T>>> {
    let (code, message, mut body) = split_envelope(raw)?;
    let resource = sequence_resource(&mut body, candidates, code)?;
    Ok(Envelope {
        code,
        message,
        resource,
    })
}

/// Decode a list response: a sequence resource plus its `page_context`.
///
/// # Errors
///
/// As [`decode_sequence`], plus [`BooksError::ParseError`] for a malformed
/// `page_context`.
pub fn decode_page<T: DeserializeOwned>(
    raw: Value,
    candidates: &Candidates,
) -> Result<PagedEnvelope<T>> {
    let (code, message, mut body) = split_envelope(raw)?;
    let page_context = match body.remove(PAGE_CONTEXT_KEY) {
        Some(Value::Null) | None => None,
        Some(value) => Some(serde_json::from_value::<PageContext>(value)?),
    };
    let resource = sequence_resource(&mut body, candidates, code)?;
    Ok(PagedEnvelope::new(
        Envelope {
            code,
            message,
            resource,
        },
        page_context,
    ))
}

fn sequence_resource<T: DeserializeOwned>(
    body: &mut Map<String, Value>,
    candidates: &Candidates,
    code: i64,
) -> Result<Option<Vec<T>>> {
    match locate(body, candidates, code)? {
        Some(candidate) => match materialize(body, candidate)? {
            Payload::Sequence(items) => Ok(Some(items)),
            Payload::Single(_) => Err(requested_mismatch(candidate, Shape::Sequence)),
        },
        None => Ok(None),
    }
}

fn split_envelope(raw: Value) -> Result<(i64, String, Map<String, Value>)> {
    let body = match raw {
        Value::Object(map) => map,
        other => {
            return Err(BooksError::MalformedEnvelope(format!(
                "expected a JSON object, found {}",
                kind(&other)
            )))
        }
    };

    let code = body
        .get("code")
        .and_then(Value::as_i64)
        .ok_or_else(|| BooksError::MalformedEnvelope("missing integer 'code'".to_string()))?;
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok((code, message, body))
}

/// Find the first body key, in document order, that the registry knows.
fn locate(
    body: &Map<String, Value>,
    candidates: &Candidates,
    code: i64,
) -> Result<Option<CandidateKey>> {
    if let Some(found) = body.keys().find_map(|key| candidates.find(key)) {
        return Ok(Some(*found));
    }
    if code == 0 && !candidates.is_empty() {
        return Err(BooksError::DecodeInconsistency {
            candidates: candidates.names(),
        });
    }
    Ok(None)
}

fn materialize<T: DeserializeOwned>(
    body: &mut Map<String, Value>,
    candidate: CandidateKey,
) -> Result<Payload<T>> {
    let value = body.remove(candidate.name).unwrap_or(Value::Null);
    match (candidate.shape, &value) {
        (Shape::Sequence, Value::Array(_)) => Ok(Payload::Sequence(serde_json::from_value(value)?)),
        (Shape::Single, Value::Object(_) | Value::String(_) | Value::Number(_) | Value::Bool(_)) => {
            Ok(Payload::Single(serde_json::from_value(value)?))
        }
        (shape, other) => Err(BooksError::ShapeMismatch {
            key: candidate.name.to_string(),
            expected: shape.describe(),
            found: kind(other),
        }),
    }
}

fn requested_mismatch(candidate: CandidateKey, requested: Shape) -> BooksError {
    BooksError::ShapeMismatch {
        key: candidate.name.to_string(),
        expected: requested.describe(),
        found: candidate.shape.describe(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence of records",
        Value::Object(_) => "a single record",
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Rec {
        contact_id: String,
    }

    const KEYS: Candidates = Candidates::new(&[
        CandidateKey::single("contact"),
        CandidateKey::sequence("contacts"),
    ]);

    #[test]
    fn test_singular_key_yields_single() {
        let raw = json!({"code": 0, "message": "ok", "contact": {"contact_id": "1"}});
        let envelope = decode::<Rec>(raw, &KEYS).unwrap();
        assert_eq!(envelope.code, 0);
        assert_eq!(envelope.message, "ok");
        assert_eq!(
            envelope.resource,
            Some(Payload::Single(Rec {
                contact_id: "1".to_string()
            }))
        );
    }

    #[test]
    fn test_plural_key_yields_sequence() {
        let raw = json!({
            "code": 0,
            "message": "ok",
            "contacts": [{"contact_id": "1"}, {"contact_id": "2"}]
        });
        let envelope = decode::<Rec>(raw, &KEYS).unwrap();
        let resource = envelope.resource.unwrap();
        assert!(!resource.is_single());
        assert_eq!(resource.len(), 2);
    }

    #[test]
    fn test_missing_key_on_success_is_inconsistent() {
        let raw = json!({"code": 0, "message": "ok"});
        let err = decode::<Rec>(raw, &KEYS).unwrap_err();
        match err {
            BooksError::DecodeInconsistency { candidates } => {
                assert_eq!(candidates, vec!["contact", "contacts"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_key_on_error_is_tolerated() {
        let raw = json!({"code": 5, "message": "not found"});
        let envelope = decode::<Rec>(raw, &KEYS).unwrap();
        assert_eq!(envelope.code, 5);
        assert_eq!(envelope.message, "not found");
        assert!(envelope.resource.is_none());
    }

    #[test]
    fn test_empty_registry_accepts_message_only_success() {
        let raw = json!({"code": 0, "message": "The contact has been deleted."});
        let envelope = decode::<Rec>(raw, &Candidates::NONE).unwrap();
        assert!(envelope.is_success());
        assert!(envelope.resource.is_none());
    }

    #[test]
    fn test_single_record_under_plural_key_fails() {
        let raw = json!({"code": 0, "message": "ok", "contacts": {"contact_id": "1"}});
        let err = decode::<Rec>(raw, &KEYS).unwrap_err();
        assert!(matches!(
            err,
            BooksError::ShapeMismatch { ref key, expected: "a sequence of records", found: "a single record" } if key == "contacts"
        ));
    }

    #[test]
    fn test_sequence_under_singular_key_fails() {
        let raw = json!({"code": 0, "message": "ok", "contact": [{"contact_id": "1"}]});
        assert!(matches!(
            decode::<Rec>(raw, &KEYS),
            Err(BooksError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_decode_sequence_rejects_singular_key() {
        let raw = json!({"code": 0, "message": "ok", "contact": {"contact_id": "1"}});
        assert!(matches!(
            decode_sequence::<Rec>(raw, &KEYS),
            Err(BooksError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_decode_single_rejects_plural_key() {
        let raw = json!({"code": 0, "message": "ok", "contacts": [{"contact_id": "1"}]});
        assert!(matches!(
            decode_single::<Rec>(raw, &KEYS),
            Err(BooksError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_first_key_in_document_order_wins() {
        let raw = json!({
            "code": 0,
            "message": "ok",
            "contacts": [{"contact_id": "2"}],
            "contact": {"contact_id": "1"}
        });
        let envelope = decode::<Rec>(raw, &KEYS).unwrap();
        assert!(!envelope.resource.unwrap().is_single());
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        let raw = json!({"code": 0, "message": "ok", "invoice": {"invoice_id": "9"}});
        assert!(matches!(
            decode::<Rec>(raw, &KEYS),
            Err(BooksError::DecodeInconsistency { .. })
        ));
    }

    #[test]
    fn test_not_an_object_is_malformed() {
        assert!(matches!(
            decode::<Rec>(json!([1, 2]), &KEYS),
            Err(BooksError::MalformedEnvelope(_))
        ));
        assert!(matches!(
            decode::<Rec>(json!({"message": "no code"}), &KEYS),
            Err(BooksError::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn test_decode_page_reads_cursor() {
        let raw = json!({
            "code": 0,
            "message": "ok",
            "contacts": [{"contact_id": "1"}, {"contact_id": "2"}],
            "page_context": {"page": 1, "per_page": 2, "has_more_page": true}
        });
        let paged = decode_page::<Rec>(raw, &KEYS).unwrap();
        assert!(paged.has_more_page());
        assert_eq!(paged.page_context.as_ref().unwrap().per_page, 2);
        assert_eq!(paged.into_items().len(), 2);
    }

    #[test]
    fn test_decode_page_error_has_no_cursor() {
        let raw = json!({"code": 14, "message": "Invalid value passed for page"});
        let paged = decode_page::<Rec>(raw, &KEYS).unwrap();
        assert!(paged.page_context.is_none());
        assert!(!paged.envelope.is_success());
    }

    #[test]
    fn test_runtime_registry() {
        let narrowed = Candidates::from_vec(vec![CandidateKey::single("contact")]);
        let raw = json!({"code": 0, "message": "ok", "contacts": []});
        assert!(matches!(
            decode::<Rec>(raw, &narrowed),
            Err(BooksError::DecodeInconsistency { .. })
        ));
    }
}
