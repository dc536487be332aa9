use axum::{
    extract::{Path, State},
    Extension,
};
use serde::Serialize;

use super::NOT_FOUND_OR_UNAUTHORISED;
use crate::database::models::PhotoRecord;
use crate::database::store::parse_id;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PhotoDeleted {
    pub photo: PhotoRecord,
}

/// DELETE /api/photo/:id - remove a photo by id; ownership is not checked
pub async fn delete(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<PhotoDeleted> {
    let id = parse_id("photo", &id)?;

    let Some(photo) = state.store.delete_by_id(id).await? else {
        return Err(ApiError::unauthorized(NOT_FOUND_OR_UNAUTHORISED));
    };
    tracing::info!(photo = %photo.id, caller = %auth.user_id, "photo deleted");

    Ok(ApiResponse::success(PhotoDeleted { photo }))
}
