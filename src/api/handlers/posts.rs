//! Handlers for the posts resource (list, get, create, update, delete).
//!
//! Every failure is returned as an [`ApiError`] tagged with the handler's
//! [`Operation`], which fixes the status and JSON body.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::post::{CreatePostRequest, MessageResponse, PostResponse, UpdatePostRequest};
use crate::domain::entities::Post;
use crate::error::{ApiError, Operation, ResultExt};
use crate::state::AppState;

/// JSON post body, or an empty `application/json` body when there is no post.
fn post_or_empty(status: StatusCode, post: Option<Post>) -> Response {
    match post {
        Some(post) => (status, Json(PostResponse::from(post))).into_response(),
        None => (status, [(header::CONTENT_TYPE, "application/json")]).into_response(),
    }
}

/// Lists every post.
///
/// # Endpoint
///
/// `GET /posts`
///
/// Rows come back in database order; no ordering is applied.
pub async fn list_posts_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let posts = state
        .post_service
        .list_posts()
        .await
        .during(Operation::ListPosts)?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// Returns a single post.
///
/// # Endpoint
///
/// `GET /posts/{id}`
///
/// An unknown id yields **200 with an empty body**, not 404.
pub async fn get_post_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let post = state
        .post_service
        .get_post(&id)
        .await
        .during(Operation::GetPost)?;

    Ok(post_or_empty(StatusCode::OK, post))
}

/// Creates a post and returns it as stored.
///
/// # Endpoint
///
/// `POST /posts`
///
/// # Request Body
///
/// ```json
/// { "title": "A", "contents": "B" }
/// ```
///
/// # Errors
///
/// Returns 500 `{"errorMessage": "Error adding post."}` if the body is unusable
/// or either the insert or the follow-up read fails.
pub async fn create_post_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload.during(Operation::CreatePost)?;

    let post = state
        .post_service
        .create_post(payload.into())
        .await
        .during(Operation::CreatePost)?;

    Ok(post_or_empty(StatusCode::CREATED, post))
}

/// Replaces some or all columns of a post.
///
/// # Endpoint
///
/// `PUT /posts/{id}`
///
/// # Errors
///
/// Returns 404 `{"errorMessage": "Post not found."}` if no row matched.
/// Returns 500 `{"errorMessage": "Error updating post."}` on unusable bodies
/// and database errors.
pub async fn update_post_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<UpdatePostRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(payload) = payload.during(Operation::UpdatePost)?;
    payload.validate().during(Operation::UpdatePost)?;

    let count = state
        .post_service
        .update_post(&id, payload.into())
        .await
        .during(Operation::UpdatePost)?;

    Ok(Json(MessageResponse::updated(count)))
}

/// Deletes a post.
///
/// # Endpoint
///
/// `DELETE /posts/{id}`
///
/// Always 200 on success, including when nothing matched
/// (`{"message": "0 record(s) deleted."}`).
///
/// # Errors
///
/// Returns 500 `{"error": "Error deleting post."}` on database errors.
pub async fn delete_post_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let count = state
        .post_service
        .delete_post(&id)
        .await
        .during(Operation::DeletePost)?;

    Ok(Json(MessageResponse::deleted(count)))
}
