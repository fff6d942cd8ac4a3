//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Field presence
//! and types are the only checks applied to input.

pub mod health;
pub mod user;
