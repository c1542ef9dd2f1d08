//! Shared application state injected into every handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::PostService;
use crate::infrastructure::persistence::SqlitePostRepository;

#[derive(Clone)]
pub struct AppState {
    pub post_service: Arc<PostService>,
}

impl AppState {
    pub fn new(post_service: Arc<PostService>) -> Self {
        Self { post_service }
    }

    /// Wires the SQLite repository and post service over `pool`.
    pub fn from_pool(pool: Arc<SqlitePool>) -> Self {
        let repository = Arc::new(SqlitePostRepository::new(pool));
        Self::new(Arc::new(PostService::new(repository)))
    }
}
