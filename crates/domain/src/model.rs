//! Behaviour shared by every resource.

use std::fmt::Display;
use std::str::FromStr;

use serde::Serialize;

use crate::error::NotFoundError;

/// A persisted resource with a server-assigned identity.
pub trait Model: Serialize {
    /// Class name, reported as `__class__` in JSON and in not-found errors.
    const CLASS: &'static str;

    /// Typed identifier of this resource.
    type Id: Copy + Display + FromStr + Send;
}

/// Parse a caller-supplied identifier for `M`.
///
/// A malformed id can never resolve, so it is reported as not found rather
/// than as a bad request.
///
/// # Errors
///
/// Returns [`NotFoundError`] when `raw` is not a valid id.
pub fn resolve_id<M: Model>(raw: &str) -> Result<M::Id, NotFoundError> {
    raw.parse().map_err(|_| NotFoundError::new(M::CLASS, raw))
}
