//! Repository trait for post data access.

use crate::domain::entities::{NewPost, Post, PostPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface over the `posts` table.
///
/// Every method issues exactly one statement. Post ids arrive as opaque text
/// from the URL path and are bound as-is; any coercion is the database's.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqlitePostRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_post.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Returns every post in database order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn list(&self) -> Result<Vec<Post>, AppError>;

    /// Finds the post whose id equals `id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Post))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, AppError>;

    /// Inserts a post and returns the id generated by the database.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn insert(&self, new_post: NewPost) -> Result<i64, AppError>;

    /// Replaces the columns present in `patch` on the post matching `id`.
    ///
    /// Returns the number of affected rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidPayload`] if the patch is empty.
    /// Returns [`AppError::Database`] on database errors.
    async fn update(&self, id: &str, patch: PostPatch) -> Result<u64, AppError>;

    /// Deletes the post matching `id` and returns the number of affected rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn delete(&self, id: &str) -> Result<u64, AppError>;

    /// Round-trips a trivial statement to check connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the database cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
