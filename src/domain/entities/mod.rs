//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`User`] - A persisted user record
//!
//! Creation input lives in a separate struct ([`NewUser`]) because the id
//! is assigned by the store.

pub mod user;

pub use user::{NewUser, User};
