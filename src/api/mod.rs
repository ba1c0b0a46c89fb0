//! REST API client module for the Greenlight service.
//!
//! This module provides the `ApiClient` for registering, activating, and
//! authenticating users and for listing the movie catalog.
//!
//! The API uses stateful bearer token authentication obtained through
//! the `/v1/tokens/authentication` endpoint.

pub mod client;
pub mod error;

pub use client::{ApiClient, MovieList};
pub use error::ApiError;
