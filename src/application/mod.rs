//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers a small,
//! transport-free API.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User lookup, creation, update and removal

pub mod services;
