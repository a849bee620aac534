//! Raw JSON request payloads and their validation.
//!
//! Validation is linear: the body must be a JSON object, then each required
//! key is checked in order, stopping at the first one missing. Typed decoding
//! into a draft or patch happens last.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{NotFoundError, ValidationError};
use crate::model::{Model, resolve_id};

/// A request body that parsed as a JSON object.
pub type Payload = Map<String, Value>;

/// Parse raw request bytes, keeping only JSON objects.
#[must_use]
pub fn from_slice(bytes: &[u8]) -> Option<Payload> {
    match serde_json::from_slice(bytes) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Reject an absent or non-object body.
///
/// # Errors
///
/// Returns [`ValidationError::NotAJson`] when `body` is `None`.
pub fn require_object(body: Option<Payload>) -> Result<Payload, ValidationError> {
    body.ok_or(ValidationError::NotAJson)
}

/// Check that every key of `fields` is present, in order.
///
/// Only presence is checked here; the value type is checked by [`decode`].
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] naming the first absent key.
pub fn require_fields(body: &Payload, fields: &[&'static str]) -> Result<(), ValidationError> {
    match fields.iter().copied().find(|field| !body.contains_key(*field)) {
        Some(field) => Err(ValidationError::MissingField(field)),
        None => Ok(()),
    }
}

/// Decode a payload into a typed draft or patch for resource `M`.
///
/// Keys that are not fields of the target type are ignored.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPayload`] when a known key holds a value
/// of the wrong type.
pub fn decode<M: Model, T: DeserializeOwned>(body: Payload) -> Result<T, ValidationError> {
    serde_json::from_value(Value::Object(body)).map_err(|source| {
        ValidationError::InvalidPayload {
            kind: M::CLASS,
            source,
        }
    })
}

/// Resolve the id of a resource `M` referenced by `field` of the payload.
///
/// The caller must already have checked that `field` is present.
///
/// # Errors
///
/// Returns [`NotFoundError`] when the value is absent, not a string, or not a
/// well-formed id.
pub fn reference<M: Model>(body: &Payload, field: &str) -> Result<M::Id, NotFoundError> {
    match body.get(field) {
        Some(Value::String(raw)) => resolve_id::<M>(raw),
        Some(other) => Err(NotFoundError::new(M::CLASS, other)),
        None => Err(NotFoundError::new(M::CLASS, "")),
    }
}
