//! Pure domain logic shared by the repository and API layers.
//!
//! This crate has zero internal deps so it can be used from any other
//! workspace crate (and future CLI tooling) without pulling in sqlx or axum.

pub mod error;
pub mod profile;
pub mod text;
pub mod types;
