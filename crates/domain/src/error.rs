//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HbnbError`]
//! via `#[from]`.

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum HbnbError {
    /// The request payload was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced resource does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a request payload is rejected.
///
/// The `Display` output is the exact message clients receive.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The body is absent, not valid JSON, or not a JSON object.
    #[error("Not a JSON")]
    NotAJson,

    /// A required key is absent from the body.
    #[error("Missing {0}")]
    MissingField(&'static str),

    /// A known key holds a value of the wrong type.
    #[error("Invalid {kind}: {source}")]
    InvalidPayload {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A lookup by id found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Class name of the resource that was looked up.
    pub entity: &'static str,
    /// The id as supplied by the caller.
    pub id: String,
}

impl NotFoundError {
    #[must_use]
    pub fn new(entity: &'static str, id: impl ToString) -> Self {
        Self {
            entity,
            id: id.to_string(),
        }
    }
}
