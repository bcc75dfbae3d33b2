//! Item update handlers: four variants of the same PUT route, each
//! demonstrating a different body convention.
//!
//! - v1: everything optional; supplied inputs merge into the result
//! - v2: three independent body parts in one JSON object, all required
//! - v3: as v2 with a positivity constraint and an optional merged query
//! - v4: the item payload embedded under a named key

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::catalog::types::{Item, User};
use crate::http::error::{FieldError, Loc};
use crate::http::extract::{ApiJson, ApiPath, ApiQuery, Validate};
use crate::http::items::{EchoQuery, ItemKey};

/// Largest accepted item ID on the v1 route.
pub const ITEM_ID_MAX: i64 = 1000;

/// Path parameter for the v1 route, bounded to [0, 1000].
#[derive(Debug, Deserialize)]
pub struct BoundedItemKey {
    pub item_id: i64,
}

impl Validate for BoundedItemKey {
    fn validate(&self, loc: &Loc, errors: &mut Vec<FieldError>) {
        if self.item_id < 0 {
            errors.push(FieldError::new(
                loc.key("item_id"),
                "greater_than_equal",
                "item_id must be greater than or equal to 0",
            ));
        } else if self.item_id > ITEM_ID_MAX {
            errors.push(FieldError::new(
                loc.key("item_id"),
                "less_than_equal",
                format!("item_id must be less than or equal to {ITEM_ID_MAX}"),
            ));
        }
    }
}

/// Optional query string for the v1 route.
#[derive(Debug, Deserialize)]
pub struct NamedQuery {
    pub query: Option<String>,
}

impl Validate for NamedQuery {}

/// Accumulator for v1: only keys that were actually supplied appear.
#[derive(Debug, Serialize)]
pub struct UpdateV1Response {
    pub item_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
}

/// `PUT /v1/items/{item_id}`: merge whichever optional inputs were supplied.
pub async fn update_item_v1(
    ApiPath(key): ApiPath<BoundedItemKey>,
    ApiQuery(query): ApiQuery<NamedQuery>,
    item: Option<ApiJson<Item>>,
) -> Json<UpdateV1Response> {
    Json(UpdateV1Response {
        item_id: key.item_id,
        query: query.query,
        item: item.map(|ApiJson(item)| item),
    })
}

/// Body for `PUT /v2/items/{item_id}`: three independent parts in one object.
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemUserBody {
    pub item: Item,
    pub user: User,
    pub importance: i64,
}

impl Validate for ItemUserBody {
    fn validate(&self, loc: &Loc, errors: &mut Vec<FieldError>) {
        self.item.validate(&loc.key("item"), errors);
        self.user.validate(&loc.key("user"), errors);
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateV2Response {
    pub item_id: i64,
    #[serde(flatten)]
    pub body: ItemUserBody,
}

/// `PUT /v2/items/{item_id}`: echo the path parameter and all body parts.
pub async fn update_item_v2(
    ApiPath(key): ApiPath<ItemKey>,
    ApiJson(body): ApiJson<ItemUserBody>,
) -> Json<UpdateV2Response> {
    Json(UpdateV2Response {
        item_id: key.item_id,
        body,
    })
}

/// Body for `PUT /v3/items/{item_id}`: as v2, but importance must be positive.
#[derive(Debug, Serialize, Deserialize)]
pub struct RankedItemUserBody {
    pub item: Item,
    pub user: User,
    pub importance: i64,
}

impl Validate for RankedItemUserBody {
    fn validate(&self, loc: &Loc, errors: &mut Vec<FieldError>) {
        self.item.validate(&loc.key("item"), errors);
        self.user.validate(&loc.key("user"), errors);
        if self.importance <= 0 {
            errors.push(FieldError::new(
                loc.key("importance"),
                "greater_than",
                "importance must be greater than 0",
            ));
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateV3Response {
    pub item_id: i64,
    #[serde(flatten)]
    pub body: RankedItemUserBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

/// `PUT /v3/items/{item_id}`: as v2, merging the optional query if present.
pub async fn update_item_v3(
    ApiPath(key): ApiPath<ItemKey>,
    ApiQuery(query): ApiQuery<EchoQuery>,
    ApiJson(body): ApiJson<RankedItemUserBody>,
) -> Json<UpdateV3Response> {
    Json(UpdateV3Response {
        item_id: key.item_id,
        body,
        q: query.q,
    })
}

/// Body for `PUT /v4/items/{item_id}`: the item sits under an `item` key
/// instead of being the top-level payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct EmbeddedItemBody {
    pub item: Item,
}

impl Validate for EmbeddedItemBody {
    fn validate(&self, loc: &Loc, errors: &mut Vec<FieldError>) {
        self.item.validate(&loc.key("item"), errors);
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateV4Response {
    pub item_id: i64,
    pub item: Item,
}

/// `PUT /v4/items/{item_id}`: accept and echo an embedded item body.
pub async fn update_item_v4(
    ApiPath(key): ApiPath<ItemKey>,
    ApiJson(body): ApiJson<EmbeddedItemBody>,
) -> Json<UpdateV4Response> {
    Json(UpdateV4Response {
        item_id: key.item_id,
        item: body.item,
    })
}
