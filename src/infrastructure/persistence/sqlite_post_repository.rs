//! SQLite implementation of post repository.

use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{NewPost, Post, PostPatch};
use crate::domain::repositories::PostRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    contents: String,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post::new(row.id, row.title, row.contents)
    }
}

/// SQLite repository for the `posts` table.
///
/// All values, including path ids, are passed as bind parameters.
pub struct SqlitePostRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn list(&self) -> Result<Vec<Post>, AppError> {
        let rows = sqlx::query_as::<_, PostRow>("SELECT id, title, contents FROM posts")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, AppError> {
        let row =
            sqlx::query_as::<_, PostRow>("SELECT id, title, contents FROM posts WHERE id = ?")
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(Post::from))
    }

    async fn insert(&self, new_post: NewPost) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO posts (title, contents) VALUES (?, ?)")
            .bind(new_post.title)
            .bind(new_post.contents)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, id: &str, patch: PostPatch) -> Result<u64, AppError> {
        if patch.is_empty() {
            return Err(AppError::InvalidPayload("no columns to update".to_string()));
        }

        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE posts SET ");
        let mut columns = builder.separated(", ");
        if let Some(title) = patch.title {
            columns.push("title = ").push_bind_unseparated(title);
        }
        if let Some(contents) = patch.contents {
            columns.push("contents = ").push_bind_unseparated(contents);
        }
        builder.push(" WHERE id = ").push_bind(id.to_owned());

        let result = builder.build().execute(self.pool.as_ref()).await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
