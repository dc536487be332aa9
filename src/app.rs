use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::handlers::{photo, root};
use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

/// Full HTTP surface with its layers.
pub fn router(state: AppState, config: &AppConfig) -> Router {
    let mut app = Router::new()
        // Public
        .merge(public_routes())
        // Protected by bearer token
        .merge(photo_routes(state.clone()))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    if config.security.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(root::health))
        .route("/api/photo/public", get(photo::list_public))
}

fn photo_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/photo", get(photo::list_all).post(photo::create))
        .route("/api/photo/user", get(photo::list_owned))
        .route("/api/photo/:id", put(photo::update).delete(photo::delete))
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}
