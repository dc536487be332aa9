use axum::{
    extract::{Path, State},
    Extension,
};
use serde::Deserialize;

use super::body::scalar_string;
use super::{validate, PhotoBody, PhotoSaved, NOT_FOUND_OR_UNAUTHORISED};
use crate::database::models::PhotoChanges;
use crate::database::store::parse_id;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePhotoRequest {
    #[serde(default, deserialize_with = "scalar_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub desc: Option<String>,
    pub is_public: Option<bool>,
}

/// PUT /api/photo/:id - replace a photo's fields
///
/// Keyed by id only; ownership is not checked.
pub async fn update(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    PhotoBody(payload): PhotoBody<UpdatePhotoRequest>,
) -> ApiResult<PhotoSaved> {
    let required = validate::required_fields(payload.path, payload.category, payload.title)?;

    let id = parse_id("photo", &id)?;
    let changes = PhotoChanges {
        category: parse_id("category", &required.category)?,
        path: required.path,
        title: required.title,
        desc: payload.desc,
        is_public: payload.is_public.unwrap_or(false),
    };

    let Some(record) = state.store.update_by_id(id, changes).await? else {
        return Err(ApiError::unauthorized(NOT_FOUND_OR_UNAUTHORISED));
    };
    tracing::info!(photo = %record.id, caller = %auth.user_id, "photo updated");

    Ok(ApiResponse::success(PhotoSaved {
        message: "Update photo success!",
        photo: record.summary(),
    }))
}
