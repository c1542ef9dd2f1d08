//! Core domain entities.
//!
//! Entities are plain data structures without persistence concerns. Writes use
//! separate structs:
//! - [`NewPost`] - column values for an insert
//! - [`PostPatch`] - partial column replacement for an update

pub mod post;

pub use post::{NewPost, Post, PostPatch};
