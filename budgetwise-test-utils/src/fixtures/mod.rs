//! Fixture utilities for JSON payloads and mock HTTP endpoints.
//!
//! - `api` - authorized resource endpoints
//! - `auth` - sign-in and sign-up endpoints
//! - `factory` - JSON bodies shaped like the backend's responses

pub mod api;
pub mod auth;
pub mod factory;
