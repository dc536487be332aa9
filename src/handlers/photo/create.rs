use axum::{extract::State, Extension};
use serde::Deserialize;

use super::body::scalar_string;
use super::{validate, PhotoBody, PhotoSaved};
use crate::database::models::NewPhoto;
use crate::database::store::{parse_id, StoreError};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreatePhotoRequest {
    #[serde(rename = "categoryId", default, deserialize_with = "scalar_string")]
    pub category_id: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub desc: Option<String>,
    #[serde(rename = "userId", default, deserialize_with = "scalar_string")]
    pub user_id: Option<String>,
    pub is_public: Option<bool>,
}

/// POST /api/photo - create a photo
///
/// The owner is the `userId` from the body, not the verified caller.
pub async fn create(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    PhotoBody(payload): PhotoBody<CreatePhotoRequest>,
) -> ApiResult<PhotoSaved> {
    let required = validate::required_fields(payload.path, payload.category_id, payload.title)?;

    let owner = payload
        .user_id
        .as_deref()
        .ok_or(StoreError::MissingReference("user"))
        .and_then(|id| parse_id("user", id))?;
    if owner != auth.user_id {
        tracing::warn!(caller = %auth.user_id, owner = %owner, "creating photo for another user");
    }

    let photo = NewPhoto {
        category: parse_id("category", &required.category)?,
        path: required.path,
        title: required.title,
        desc: payload.desc,
        user: owner,
        is_public: payload.is_public.unwrap_or(false),
    };

    let record = state.store.insert(photo).await?;
    tracing::info!(photo = %record.id, "photo created");

    Ok(ApiResponse::success(PhotoSaved {
        message: "Add photo success!",
        photo: record.summary(),
    }))
}
