//! API route configuration.

use crate::api::handlers::{
    create_post_handler, delete_post_handler, get_post_handler, list_posts_handler,
    update_post_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes of the posts resource, relative to its mount path.
///
/// # Endpoints
///
/// - `GET    /`       - List all posts
/// - `POST   /`       - Create a post
/// - `GET    /{id}`   - Fetch one post (empty body when absent)
/// - `PUT    /{id}`   - Replace some or all columns of a post
/// - `DELETE /{id}`   - Delete a post
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts_handler).post(create_post_handler))
        .route(
            "/{id}",
            get(get_post_handler)
                .put(update_post_handler)
                .delete(delete_post_handler),
        )
}
