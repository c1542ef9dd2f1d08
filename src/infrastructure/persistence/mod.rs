//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters for every value.

pub mod sqlite_post_repository;

pub use sqlite_post_repository::SqlitePostRepository;
