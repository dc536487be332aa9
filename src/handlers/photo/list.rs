use axum::{extract::State, Extension};
use serde::Serialize;

use crate::database::models::PhotoView;
use crate::filter::PhotoFilter;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PhotoList {
    pub photos: Vec<PhotoView>,
}

/// GET /api/photo - every photo, references expanded
pub async fn list_all(
    State(state): State<AppState>,
    Extension(_auth): Extension<AuthUser>,
) -> ApiResult<PhotoList> {
    find(&state, PhotoFilter::all()).await
}

/// GET /api/photo/public - photos flagged public; no token required
pub async fn list_public(State(state): State<AppState>) -> ApiResult<PhotoList> {
    find(&state, PhotoFilter::public()).await
}

/// GET /api/photo/user - photos owned by the caller
pub async fn list_owned(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<PhotoList> {
    find(&state, PhotoFilter::owned_by(auth.user_id)).await
}

async fn find(state: &AppState, filter: PhotoFilter) -> ApiResult<PhotoList> {
    let photos = state.store.find(&filter).await?;
    Ok(ApiResponse::success(PhotoList { photos }))
}
