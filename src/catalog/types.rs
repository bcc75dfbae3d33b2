//! Request/response models for the item endpoints.
//!
//! Plain validated data carriers with no lifecycle beyond a single request:
//! deserialized from request input, checked, optionally echoed back,
//! then discarded.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::error::{FieldError, Loc};
use crate::http::extract::Validate;

/// Longest accepted item description, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 300;

/// A named image reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Must parse as an absolute URL. Stored verbatim so echoes round-trip.
    pub url: String,
    pub name: String,
}

impl Validate for Image {
    fn validate(&self, loc: &Loc, errors: &mut Vec<FieldError>) {
        if let Err(e) = Url::parse(&self.url) {
            errors.push(FieldError::new(
                loc.key("url"),
                "url_parsing",
                format!("invalid URL: {e}"),
            ));
        }
    }
}

/// An item submitted for update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
    /// Duplicates collapse on deserialization; echoed in sorted order.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub image: Option<Image>,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Validate for Item {
    fn validate(&self, loc: &Loc, errors: &mut Vec<FieldError>) {
        if self.price <= 0.0 {
            errors.push(FieldError::new(
                loc.key("price"),
                "greater_than",
                "price must be greater than 0",
            ));
        }
        if let Some(description) = &self.description {
            let chars = description.chars().count();
            if chars > MAX_DESCRIPTION_CHARS {
                errors.push(FieldError::new(
                    loc.key("description"),
                    "string_too_long",
                    format!(
                        "description must be at most {MAX_DESCRIPTION_CHARS} characters, got {chars}"
                    ),
                ));
            }
        }
        if let Some(image) = &self.image {
            image.validate(&loc.key("image"), errors);
        }
        self.images.validate(&loc.key("images"), errors);
    }
}

/// The user attached to a multi-part update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub full_name: Option<String>,
}

impl Validate for User {}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(item: &Item) -> Vec<FieldError> {
        let mut errors = Vec::new();
        item.validate(&Loc::body(), &mut errors);
        errors
    }

    fn minimal_item() -> Item {
        serde_json::from_value(serde_json::json!({
            "name": "Foo",
            "price": 35.4,
        }))
        .unwrap()
    }

    #[test]
    fn test_minimal_item_deserializes_with_defaults() {
        let item = minimal_item();
        assert_eq!(item.name, "Foo");
        assert!(item.description.is_none());
        assert!(item.tags.is_empty());
        assert!(item.image.is_none());
        assert!(item.images.is_empty());
        assert!(check(&item).is_empty());
    }

    #[test]
    fn test_price_must_be_positive() {
        let mut item = minimal_item();
        item.price = 0.0;
        let errors = check(&item);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, "greater_than");

        item.price = -3.5;
        assert_eq!(check(&item).len(), 1);
    }

    #[test]
    fn test_description_length_boundary() {
        let mut item = minimal_item();
        item.description = Some("x".repeat(MAX_DESCRIPTION_CHARS));
        assert!(check(&item).is_empty());

        item.description = Some("x".repeat(MAX_DESCRIPTION_CHARS + 1));
        let errors = check(&item);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, "string_too_long");
    }

    #[test]
    fn test_all_violations_reported() {
        let mut item = minimal_item();
        item.price = -1.0;
        item.description = Some("x".repeat(301));
        let errors = check(&item);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_nested_image_error_location() {
        let mut item = minimal_item();
        item.images = vec![
            Image {
                url: "http://example.com/a.png".to_string(),
                name: "a".to_string(),
            },
            Image {
                url: "not a url".to_string(),
                name: "b".to_string(),
            },
        ];
        let errors = check(&item);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            serde_json::to_value(&errors[0].loc).unwrap(),
            serde_json::json!(["body", "images", 1, "url"])
        );
    }

    #[test]
    fn test_optional_image_is_validated() {
        let mut item = minimal_item();
        item.image = Some(Image {
            url: "::nonsense::".to_string(),
            name: "broken".to_string(),
        });
        let errors = check(&item);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            serde_json::to_value(&errors[0].loc).unwrap(),
            serde_json::json!(["body", "image", "url"])
        );
    }

    #[test]
    fn test_tags_deduplicate() {
        let item: Item = serde_json::from_value(serde_json::json!({
            "name": "Foo",
            "price": 1.0,
            "tags": ["rock", "metal", "rock"],
        }))
        .unwrap();
        assert_eq!(item.tags.len(), 2);
    }
}
