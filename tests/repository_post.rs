mod common;

use posts_api::domain::entities::{NewPost, PostPatch};
use posts_api::domain::repositories::PostRepository;
use posts_api::error::AppError;
use posts_api::infrastructure::persistence::SqlitePostRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

fn new_post(title: &str, contents: &str) -> NewPost {
    NewPost {
        title: title.to_string(),
        contents: contents.to_string(),
    }
}

#[sqlx::test]
async fn test_insert_returns_generated_id(pool: SqlitePool) {
    let repo = SqlitePostRepository::new(Arc::new(pool.clone()));

    let first = repo.insert(new_post("A", "B")).await.unwrap();
    let second = repo.insert(new_post("C", "D")).await.unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(
        common::fetch_post(&pool, first).await,
        Some(("A".to_string(), "B".to_string()))
    );
}

#[sqlx::test]
async fn test_list_returns_all_rows(pool: SqlitePool) {
    common::create_test_post(&pool, "one", "1").await;
    common::create_test_post(&pool, "two", "2").await;
    common::create_test_post(&pool, "three", "3").await;

    let repo = SqlitePostRepository::new(Arc::new(pool));
    let posts = repo.list().await.unwrap();

    assert_eq!(posts.len(), 3);
    let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
    assert!(titles.contains(&"one"));
    assert!(titles.contains(&"two"));
    assert!(titles.contains(&"three"));
}

#[sqlx::test]
async fn test_list_empty_table(pool: SqlitePool) {
    let repo = SqlitePostRepository::new(Arc::new(pool));
    assert!(repo.list().await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_find_by_id(pool: SqlitePool) {
    let id = common::create_test_post(&pool, "A", "B").await;
    let repo = SqlitePostRepository::new(Arc::new(pool));

    let post = repo.find_by_id(&id.to_string()).await.unwrap().unwrap();

    assert_eq!(post.id, id);
    assert_eq!(post.title, "A");
    assert_eq!(post.contents, "B");
}

#[sqlx::test]
async fn test_find_by_id_not_found(pool: SqlitePool) {
    let repo = SqlitePostRepository::new(Arc::new(pool));

    assert!(repo.find_by_id("999").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_non_numeric_id_matches_nothing(pool: SqlitePool) {
    common::create_test_post(&pool, "A", "B").await;
    let repo = SqlitePostRepository::new(Arc::new(pool));

    assert!(repo.find_by_id("abc").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_update_single_column(pool: SqlitePool) {
    let id = common::create_test_post(&pool, "A", "B").await;
    let repo = SqlitePostRepository::new(Arc::new(pool.clone()));

    let patch = PostPatch {
        title: Some("C".to_string()),
        contents: None,
    };
    let count = repo.update(&id.to_string(), patch).await.unwrap();

    assert_eq!(count, 1);
    assert_eq!(
        common::fetch_post(&pool, id).await,
        Some(("C".to_string(), "B".to_string()))
    );
}

#[sqlx::test]
async fn test_update_both_columns(pool: SqlitePool) {
    let id = common::create_test_post(&pool, "A", "B").await;
    let other = common::create_test_post(&pool, "X", "Y").await;
    let repo = SqlitePostRepository::new(Arc::new(pool.clone()));

    let patch = PostPatch {
        title: Some("C".to_string()),
        contents: Some("D".to_string()),
    };
    let count = repo.update(&id.to_string(), patch).await.unwrap();

    assert_eq!(count, 1);
    assert_eq!(
        common::fetch_post(&pool, id).await,
        Some(("C".to_string(), "D".to_string()))
    );
    // Only the matching row changes.
    assert_eq!(
        common::fetch_post(&pool, other).await,
        Some(("X".to_string(), "Y".to_string()))
    );
}

#[sqlx::test]
async fn test_update_missing_row_affects_nothing(pool: SqlitePool) {
    let repo = SqlitePostRepository::new(Arc::new(pool));

    let patch = PostPatch {
        title: Some("C".to_string()),
        contents: None,
    };

    assert_eq!(repo.update("42", patch).await.unwrap(), 0);
}

#[sqlx::test]
async fn test_update_empty_patch_rejected(pool: SqlitePool) {
    let id = common::create_test_post(&pool, "A", "B").await;
    let repo = SqlitePostRepository::new(Arc::new(pool));

    let result = repo.update(&id.to_string(), PostPatch::default()).await;

    assert!(matches!(result, Err(AppError::InvalidPayload(_))));
}

#[sqlx::test]
async fn test_delete(pool: SqlitePool) {
    let id = common::create_test_post(&pool, "A", "B").await;
    common::create_test_post(&pool, "C", "D").await;
    let repo = SqlitePostRepository::new(Arc::new(pool.clone()));

    assert_eq!(repo.delete(&id.to_string()).await.unwrap(), 1);
    assert_eq!(common::count_posts(&pool).await, 1);
    assert!(common::fetch_post(&pool, id).await.is_none());
}

#[sqlx::test]
async fn test_delete_missing_row(pool: SqlitePool) {
    let repo = SqlitePostRepository::new(Arc::new(pool));

    assert_eq!(repo.delete("42").await.unwrap(), 0);
}

#[sqlx::test]
async fn test_ping(pool: SqlitePool) {
    let repo = SqlitePostRepository::new(Arc::new(pool.clone()));
    assert!(repo.ping().await.is_ok());

    pool.close().await;
    assert!(matches!(repo.ping().await, Err(AppError::Database(_))));
}
