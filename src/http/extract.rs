//! Validating wrappers over Axum's extractors.
//!
//! # Responsibilities
//! - Deserialize path, query, and body parameters into typed values
//! - Run declared-constraint checks before the handler sees the value
//! - Convert both extraction rejections and constraint violations into the
//!   structured 422 contract in [`crate::http::error`]
//!
//! # Design Decisions
//! - Constraint checks walk the whole value and report every violated field
//! - Structural errors from the deserializer (malformed JSON, wrong type,
//!   missing field) fail fast and surface as one `detail` entry
//! - A body extractor with no `Content-Type` header yields `None` when the
//!   handler declares the body optional

use axum::extract::path::ErrorKind;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, OptionalFromRequest, Path, Query, Request};
use axum::http::header;
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::http::error::{FieldError, Loc, ValidationRejection};

/// Declared constraints checked after deserialization.
///
/// Implementations push one [`FieldError`] per violated constraint, rooted at
/// `loc`; every field is checked, not just the first failing one. The default
/// implementation declares no constraints.
pub trait Validate {
    fn validate(&self, _loc: &Loc, _errors: &mut Vec<FieldError>) {}
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self, loc: &Loc, errors: &mut Vec<FieldError>) {
        for (index, element) in self.iter().enumerate() {
            element.validate(&loc.index(index), errors);
        }
    }
}

fn run_validation<T: Validate>(value: &T, loc: Loc) -> Result<(), ValidationRejection> {
    let mut errors = Vec::new();
    value.validate(&loc, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationRejection::new(errors))
    }
}

/// Path extractor with the API's 422 rejection contract.
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(path_rejection)?;
        run_validation(&value, Loc::path())?;
        Ok(Self(value))
    }
}

fn path_rejection(rejection: PathRejection) -> ValidationRejection {
    match rejection {
        PathRejection::FailedToDeserializePathParams(inner) => match inner.kind() {
            ErrorKind::ParseErrorAtKey {
                key, expected_type, ..
            } => ValidationRejection::single(
                Loc::path().key(key.as_str()),
                "type_error",
                format!("value is not a valid {expected_type}"),
            ),
            ErrorKind::InvalidUtf8InPathParam { key } => ValidationRejection::single(
                Loc::path().key(key.as_str()),
                "value_error",
                "invalid UTF-8 in path parameter",
            ),
            other => ValidationRejection::single(Loc::path(), "value_error", other.to_string()),
        },
        other => ValidationRejection::single(Loc::path(), "value_error", other.body_text()),
    }
}

/// Query extractor with the API's 422 rejection contract.
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| {
                ValidationRejection::single(Loc::query(), "value_error", rejection.body_text())
            })?;
        run_validation(&value, Loc::query())?;
        Ok(Self(value))
    }
}

/// JSON body extractor with the API's 422 rejection contract.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = <Json<T> as FromRequest<S>>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        run_validation(&value, Loc::body())?;
        Ok(Self(value))
    }
}

impl<S, T> OptionalFromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Option<Self>, Self::Rejection> {
        // No Content-Type means no body was sent; a present header commits
        // the client to a parseable payload.
        if req.headers().get(header::CONTENT_TYPE).is_none() {
            return Ok(None);
        }
        <Self as FromRequest<S>>::from_request(req, state)
            .await
            .map(Some)
    }
}

fn json_rejection(rejection: JsonRejection) -> ValidationRejection {
    let kind = match &rejection {
        JsonRejection::JsonDataError(_) => "type_error",
        JsonRejection::JsonSyntaxError(_) => "json_invalid",
        JsonRejection::MissingJsonContentType(_) => "missing_content_type",
        _ => "value_error",
    };
    ValidationRejection::single(Loc::body(), kind, rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bounded(i64);

    impl Validate for Bounded {
        fn validate(&self, loc: &Loc, errors: &mut Vec<FieldError>) {
            if self.0 < 0 {
                errors.push(FieldError::new(loc.key("value"), "greater_than_equal", "negative"));
            }
        }
    }

    #[test]
    fn test_run_validation_passes_clean_values() {
        assert!(run_validation(&Bounded(1), Loc::body()).is_ok());
    }

    #[test]
    fn test_run_validation_collects_errors() {
        let rejection = run_validation(&Bounded(-1), Loc::body()).unwrap_err();
        assert_eq!(rejection.detail.len(), 1);
        assert_eq!(rejection.detail[0].kind, "greater_than_equal");
    }

    #[test]
    fn test_vec_validation_tracks_indices() {
        let mut errors = Vec::new();
        vec![Bounded(0), Bounded(-1), Bounded(-2)].validate(&Loc::body(), &mut errors);
        assert_eq!(errors.len(), 2);
        assert_eq!(
            serde_json::to_value(&errors[0].loc).unwrap(),
            serde_json::json!(["body", 1, "value"])
        );
    }
}
