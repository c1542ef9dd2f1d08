//! # Posts API
//!
//! A REST service exposing a single `posts` resource backed by SQLite,
//! built with Axum and SQLx.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Post entity and repository trait
//! - **Application Layer** ([`application`]) - Post service
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repository
//! - **API Layer** ([`api`]) - Handlers, DTOs, routes and middleware
//!
//! ## Endpoints
//!
//! Mounted at `POSTS_BASE_PATH` (default `/posts`):
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | GET | `/` | 200, array of posts | 500 `{errorMessage}` |
//! | GET | `/{id}` | 200, post or empty body | 500 `{errorMessage}` |
//! | POST | `/` | 201, created post | 500 `{errorMessage}` |
//! | PUT | `/{id}` | 200 `{message}` / 404 `{errorMessage}` | 500 `{errorMessage}` |
//! | DELETE | `/{id}` | 200 `{message}` | 500 `{error}` |
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://posts.db3"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::{ApiError, AppError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::PostService;
    pub use crate::domain::entities::{NewPost, Post, PostPatch};
    pub use crate::error::{ApiError, AppError, Operation};
    pub use crate::state::AppState;
}
