//! Post management service.

use crate::domain::entities::{NewPost, Post, PostPatch};
use crate::domain::repositories::PostRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for the posts resource.
///
/// Each method maps one HTTP operation onto repository calls. No validation of
/// post contents happens here; malformed bodies are rejected earlier, while
/// building [`NewPost`] / [`PostPatch`].
pub struct PostService {
    repository: Arc<dyn PostRepository>,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    /// Lists every post in database order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn list_posts(&self) -> Result<Vec<Post>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a post by id. A missing post is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn get_post(&self, id: &str) -> Result<Option<Post>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Inserts a post, then reads it back by the generated id.
    ///
    /// The read is issued only after the insert has completed. The two
    /// statements are not transactional, so the read may come back empty if
    /// the row is removed in between.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if either statement fails.
    pub async fn create_post(&self, new_post: NewPost) -> Result<Option<Post>, AppError> {
        let id = self.repository.insert(new_post).await?;
        tracing::debug!(id, "Post inserted");

        self.repository.find_by_id(&id.to_string()).await
    }

    /// Applies `patch` to the post matching `id` and returns the affected-row count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row matched.
    /// Returns [`AppError::InvalidPayload`] if the repository rejects an empty patch.
    /// Returns [`AppError::Database`] on database errors.
    pub async fn update_post(&self, id: &str, patch: PostPatch) -> Result<u64, AppError> {
        let count = self.repository.update(id, patch).await?;
        if count == 0 {
            return Err(AppError::NotFound);
        }

        Ok(count)
    }

    /// Deletes the post matching `id` and returns the affected-row count,
    /// which may be zero.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn delete_post(&self, id: &str) -> Result<u64, AppError> {
        self.repository.delete(id).await
    }

    /// Checks that the database answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the database cannot be reached.
    pub async fn check_database(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
