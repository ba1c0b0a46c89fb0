//! Data models for Greenlight API entities.
//!
//! This module contains the data structures exchanged with the API:
//!
//! - `User`: account record returned by registration and activation
//! - `AuthToken`: bearer token issued on login
//! - `Movie`, `Metadata`: catalog entries and the pagination descriptor
//! - `MovieQuery`: filter/sort/pagination parameters for the movie listing

pub mod movie;
pub mod user;

pub use movie::{Metadata, Movie, MovieQuery};
pub use user::{AuthToken, User};
