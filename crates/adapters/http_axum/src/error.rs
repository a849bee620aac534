//! HTTP error response mapping.

use axum::Json;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hbnb_domain::error::{HbnbError, NotFoundError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HbnbError`] to an HTTP response with appropriate status code.
///
/// Every 404 carries the same body, whether a record or a route is missing.
pub struct ApiError(HbnbError);

impl From<HbnbError> for ApiError {
    fn from(err: HbnbError) -> Self {
        Self(err)
    }
}

impl From<NotFoundError> for ApiError {
    fn from(err: NotFoundError) -> Self {
        Self(HbnbError::NotFound(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HbnbError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            HbnbError::NotFound(err) => {
                tracing::debug!(error = %err, "lookup failed");
                (StatusCode::NOT_FOUND, "Not found".to_string())
            }
            HbnbError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        error_response(status, message)
    }
}

/// Render `{"error": message}` with `status`.
pub(crate) fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

/// Fallback for paths no route matches.
pub(crate) async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::from(NotFoundError::new("Route", uri.path()))
}
