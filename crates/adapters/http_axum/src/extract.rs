//! Request body extraction.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::Response;

use hbnb_domain::payload::{self, Payload};

use crate::error::error_response;

/// A request body that may or may not be a JSON object.
///
/// Only rejects a body over the size limit, with 413. Otherwise handlers must
/// be able to report a missing parent before complaining about the body, so
/// the decision is left to the services. `None` means the content type is not
/// JSON, the body could not be read, or it is not a JSON object.
pub struct JsonBody(pub Option<Payload>);

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::trim)
        .is_some_and(|mime| mime == "application/json" || mime.ends_with("+json"))
}

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(req.headers()) {
            return Ok(Self(None));
        }
        match Bytes::from_request(req, state).await {
            Ok(bytes) => Ok(Self(payload::from_slice(&bytes))),
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                Err(error_response(rejection.status(), rejection.body_text()))
            }
            Err(rejection) => {
                tracing::debug!(error = %rejection, "unreadable request body");
                Ok(Self(None))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;

    use super::*;

    async fn extract(content_type: Option<&str>, body: &'static str) -> Option<Payload> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let req = builder.body(Body::from(body)).unwrap();
        match JsonBody::from_request(req, &()).await {
            Ok(JsonBody(payload)) => payload,
            Err(response) => panic!("unexpected rejection: {}", response.status()),
        }
    }

    #[tokio::test]
    async fn should_parse_object_when_content_type_is_json() {
        let payload = extract(Some("application/json; charset=utf-8"), r#"{"name":"x"}"#)
            .await
            .unwrap();
        assert_eq!(payload["name"], "x");
    }

    #[tokio::test]
    async fn should_yield_none_without_json_content_type() {
        assert!(extract(None, r#"{"name":"x"}"#).await.is_none());
        assert!(extract(Some("text/plain"), r#"{"name":"x"}"#).await.is_none());
    }

    #[tokio::test]
    async fn should_yield_none_for_malformed_or_non_object_body() {
        assert!(extract(Some("application/json"), "{oops").await.is_none());
        assert!(extract(Some("application/json"), "[1, 2]").await.is_none());
        assert!(extract(Some("application/json"), "").await.is_none());
    }

    #[tokio::test]
    async fn should_reject_body_over_size_limit() {
        let oversized = vec![b' '; 3 * 1024 * 1024];
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(oversized))
            .unwrap();

        let Err(response) = JsonBody::from_request(req, &()).await else {
            panic!("oversized body was accepted");
        };

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].is_string());
    }
}
