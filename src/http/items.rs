//! Catalog lookup handlers.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::http::error::{FieldError, Loc};
use crate::http::extract::{ApiPath, ApiQuery, Validate};
use crate::http::server::AppState;

/// Accepted identifier prefixes.
const ID_PREFIXES: [&str; 2] = ["isbn-", "imdb-"];

/// Shortest accepted identifier, in characters.
const MIN_ID_CHARS: usize = 3;

/// Query parameters for `GET /items/`.
#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    /// Identifier to look up; a random entry is served when absent.
    pub id: Option<String>,
}

impl Validate for LookupQuery {
    fn validate(&self, loc: &Loc, errors: &mut Vec<FieldError>) {
        let Some(id) = &self.id else { return };
        if id.chars().count() < MIN_ID_CHARS {
            errors.push(FieldError::new(
                loc.key("id"),
                "string_too_short",
                format!("ID must be at least {MIN_ID_CHARS} characters"),
            ));
        }
        if !ID_PREFIXES.iter().any(|prefix| id.starts_with(prefix)) {
            errors.push(FieldError::new(
                loc.key("id"),
                "value_error",
                r#"Invalid ID format, it must start with "isbn-" or "imdb-""#,
            ));
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub id: String,
    /// None when the identifier is valid but unknown; a miss is not an error.
    pub name: Option<String>,
}

/// `GET /items/`: look up one entry by ID, or serve a random one.
pub async fn read_items(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LookupQuery>,
) -> Json<LookupResponse> {
    let response = match query.id {
        Some(id) => {
            let name = state.catalog.get(&id).map(str::to_owned);
            if name.is_none() {
                tracing::debug!(id = %id, "catalog miss");
            }
            LookupResponse { id, name }
        }
        None => {
            let (id, name) = state.catalog.random_entry();
            tracing::debug!(id = %id, "serving random entry");
            LookupResponse {
                id: id.to_owned(),
                name: Some(name.to_owned()),
            }
        }
    };
    Json(response)
}

/// Path parameter shared by the single-item routes.
#[derive(Debug, Deserialize)]
pub struct ItemKey {
    pub item_id: i64,
}

impl Validate for ItemKey {}

/// Optional free-form query string.
#[derive(Debug, Deserialize)]
pub struct EchoQuery {
    pub q: Option<String>,
}

impl Validate for EchoQuery {}

#[derive(Debug, Serialize)]
pub struct ItemEcho {
    pub item_id: i64,
    pub q: Option<String>,
}

/// `GET /items/{item_id}`: echo the typed path and query parameters.
pub async fn read_item(
    ApiPath(key): ApiPath<ItemKey>,
    ApiQuery(query): ApiQuery<EchoQuery>,
) -> Json<ItemEcho> {
    Json(ItemEcho {
        item_id: key.item_id,
        q: query.q,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(query: &LookupQuery) -> Vec<FieldError> {
        let mut errors = Vec::new();
        query.validate(&Loc::query(), &mut errors);
        errors
    }

    #[test]
    fn test_absent_id_passes() {
        assert!(check(&LookupQuery { id: None }).is_empty());
    }

    #[test]
    fn test_valid_prefixes_pass() {
        assert!(check(&LookupQuery { id: Some("isbn-1".to_string()) }).is_empty());
        assert!(check(&LookupQuery { id: Some("imdb-tt0371724".to_string()) }).is_empty());
    }

    #[test]
    fn test_short_id_fails_both_constraints() {
        // two characters: too short and missing the prefix
        let errors = check(&LookupQuery { id: Some("ab".to_string()) });
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_wrong_prefix_fails() {
        let errors = check(&LookupQuery { id: Some("abc-123".to_string()) });
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, "value_error");
    }
}
