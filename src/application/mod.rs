//! Application layer services.
//!
//! Services consume repository traits and give HTTP handlers a small API to
//! call.
//!
//! # Available Services
//!
//! - [`services::post_service::PostService`] - Post listing, retrieval, creation, update and deletion

pub mod services;
