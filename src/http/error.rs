//! The API's validation error contract.
//!
//! # Responsibilities
//! - Represent field-level validation failures with their location
//! - Render rejected requests as HTTP 422 with a structured `detail` list
//!
//! # Design Decisions
//! - Locations start at the parameter source ("path", "query", "body") and
//!   descend through map keys and sequence indices
//! - The response schema is `{"detail": [{"loc", "msg", "type"}]}` so
//!   existing clients of that contract keep working unchanged

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// One step of a field location: a map key or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocSegment {
    Key(String),
    Index(usize),
}

/// Location of a field inside a request, rooted at its parameter source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Loc(Vec<LocSegment>);

impl Loc {
    /// Root location for path parameters.
    pub fn path() -> Self {
        Self::root("path")
    }

    /// Root location for query parameters.
    pub fn query() -> Self {
        Self::root("query")
    }

    /// Root location for the request body.
    pub fn body() -> Self {
        Self::root("body")
    }

    fn root(source: &str) -> Self {
        Self(vec![LocSegment::Key(source.to_string())])
    }

    /// Descend into a named field.
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(LocSegment::Key(key.into()));
        Self(segments)
    }

    /// Descend into a sequence element.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(LocSegment::Index(index));
        Self(segments)
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    /// Where in the request the failure occurred.
    pub loc: Loc,

    /// Human-readable description of the failure.
    pub msg: String,

    /// Machine-readable failure kind (e.g. "greater_than", "url_parsing").
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl FieldError {
    pub fn new(loc: Loc, kind: &'static str, msg: impl Into<String>) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind,
        }
    }
}

/// Rejection produced when a request fails validation before its handler.
#[derive(Debug, Error)]
#[error("request validation failed ({} field error(s))", .detail.len())]
pub struct ValidationRejection {
    /// Every field-level failure found in the request.
    pub detail: Vec<FieldError>,
}

impl ValidationRejection {
    pub fn new(detail: Vec<FieldError>) -> Self {
        Self { detail }
    }

    pub fn single(loc: Loc, kind: &'static str, msg: impl Into<String>) -> Self {
        Self {
            detail: vec![FieldError::new(loc, kind, msg)],
        }
    }
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorBody {
            detail: Vec<FieldError>,
        }

        tracing::debug!(errors = self.detail.len(), "request rejected by validation");
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorBody {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loc_serializes_as_flat_array() {
        let loc = Loc::body().key("images").index(1).key("url");
        let value = serde_json::to_value(&loc).unwrap();
        assert_eq!(value, serde_json::json!(["body", "images", 1, "url"]));
    }

    #[test]
    fn test_field_error_shape() {
        let err = FieldError::new(Loc::query().key("id"), "string_too_short", "too short");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "loc": ["query", "id"],
                "msg": "too short",
                "type": "string_too_short",
            })
        );
    }

    #[test]
    fn test_loc_building_does_not_mutate_parent() {
        let base = Loc::body();
        let _child = base.key("item");
        assert_eq!(serde_json::to_value(&base).unwrap(), serde_json::json!(["body"]));
    }
}
