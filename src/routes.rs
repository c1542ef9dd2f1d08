//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`        - Health check (database)
//! - `<base>/*`            - Posts resource, `<base>` from `POSTS_BASE_PATH`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with the posts resource mounted at `base_path`.
///
/// `base_path` is expected in the form produced by
/// [`crate::config::Config::from_env`]: leading `/`, no trailing `/`, or
/// exactly `/` to mount at the root.
pub fn build_router(state: AppState, base_path: &str) -> Router {
    let posts = api::routes::post_routes();

    let router = if base_path == "/" {
        Router::new().merge(posts)
    } else {
        Router::new().nest(base_path, posts)
    };

    router
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application with trailing slashes trimmed before routing.
pub fn app_router(state: AppState, base_path: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, base_path))
}
