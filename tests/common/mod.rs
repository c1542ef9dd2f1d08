#![allow(dead_code)]

use axum_test::TestServer;
use posts_api::routes::build_router;
use posts_api::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const BASE_PATH: &str = "/posts";

pub async fn create_test_post(pool: &SqlitePool, title: &str, contents: &str) -> i64 {
    sqlx::query("INSERT INTO posts (title, contents) VALUES (?, ?)")
        .bind(title)
        .bind(contents)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn count_posts(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn fetch_post(pool: &SqlitePool, id: i64) -> Option<(String, String)> {
    sqlx::query_as::<_, (String, String)>("SELECT title, contents FROM posts WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::from_pool(Arc::new(pool))
}

/// Test server with the posts resource mounted at [`BASE_PATH`].
pub fn make_server(pool: SqlitePool) -> TestServer {
    let app = build_router(create_test_state(pool), BASE_PATH);
    TestServer::new(app).unwrap()
}
