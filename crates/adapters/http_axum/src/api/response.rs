//! Response types shared by every resource handler.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};

use hbnb_domain::model::Model;

/// A resource as sent to clients: its fields plus `__class__`.
#[derive(Debug, Serialize)]
pub struct Document<T> {
    #[serde(flatten)]
    inner: T,
    #[serde(rename = "__class__")]
    class: &'static str,
}

impl<T: Model> Document<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            class: T::CLASS,
        }
    }
}

fn documents<T: Model>(items: Vec<T>) -> Vec<Document<T>> {
    items.into_iter().map(Document::new).collect()
}

/// Possible responses from a list endpoint.
pub enum ListResponse<T> {
    Ok(Json<Vec<Document<T>>>),
}

impl<T: Model> ListResponse<T> {
    pub fn ok(items: Vec<T>) -> Self {
        Self::Ok(Json(documents(items)))
    }
}

impl<T: Model> IntoResponse for ListResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from a get or update endpoint.
pub enum GetResponse<T> {
    Ok(Json<Document<T>>),
}

impl<T: Model> GetResponse<T> {
    pub fn ok(item: T) -> Self {
        Self::Ok(Json(Document::new(item)))
    }
}

impl<T: Model> IntoResponse for GetResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from a create endpoint.
pub enum CreateResponse<T> {
    Created(Json<Document<T>>),
}

impl<T: Model> CreateResponse<T> {
    pub fn created(item: T) -> Self {
        Self::Created(Json(Document::new(item)))
    }
}

impl<T: Model> IntoResponse for CreateResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from a delete endpoint.
pub enum DeleteResponse {
    /// `200` with an empty JSON object.
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => (StatusCode::OK, Json(Value::Object(Map::new()))).into_response(),
        }
    }
}
