//! DTOs for the posts resource.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{NewPost, Post, PostPatch};

/// A post as returned to clients.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub contents: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            contents: post.contents,
        }
    }
}

/// Request body for `POST /`.
///
/// Both columns are required. Columns the table does not have are rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatePostRequest {
    pub title: String,
    pub contents: String,
}

impl From<CreatePostRequest> for NewPost {
    fn from(request: CreatePostRequest) -> Self {
        Self {
            title: request.title,
            contents: request.contents,
        }
    }
}

/// Request body for `PUT /{id}`.
///
/// # Field semantics
///
/// - **Absent** → leave the column unchanged
/// - **`null`** → rejected, both columns are NOT NULL
/// - **String** → replace the column
///
/// At least one column must be present.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
#[validate(schema(function = "validate_changes"))]
pub struct UpdatePostRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub title: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub contents: Option<Option<String>>,
}

fn validate_changes(request: &UpdatePostRequest) -> Result<(), ValidationError> {
    if request.title.is_none() && request.contents.is_none() {
        return Err(ValidationError::new("empty_update")
            .with_message("at least one of `title`, `contents` is required".into()));
    }

    if matches!(request.title, Some(None)) || matches!(request.contents, Some(None)) {
        return Err(ValidationError::new("null_column")
            .with_message("`title` and `contents` cannot be null".into()));
    }

    Ok(())
}

impl From<UpdatePostRequest> for PostPatch {
    fn from(request: UpdatePostRequest) -> Self {
        Self {
            title: request.title.flatten(),
            contents: request.contents.flatten(),
        }
    }
}

/// Confirmation body for update and delete, e.g. `{"message": "1 record(s) updated."}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn updated(count: u64) -> Self {
        Self {
            message: format!("{count} record(s) updated."),
        }
    }

    pub fn deleted(count: u64) -> Self {
        Self {
            message: format!("{count} record(s) deleted."),
        }
    }
}
