//! Image round-trip handler.

use axum::Json;

use crate::catalog::types::Image;
use crate::http::extract::ApiJson;

/// `POST /images/multiple/`: validate a list of images and echo it back
/// unchanged.
pub async fn create_images(ApiJson(images): ApiJson<Vec<Image>>) -> Json<Vec<Image>> {
    Json(images)
}
