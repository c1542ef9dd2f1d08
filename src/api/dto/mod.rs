//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; update bodies
//! are additionally checked with validator.

pub mod health;
pub mod post;
