//! Authentication module for managing the user session and credential.
//!
//! This module provides:
//! - `TokenStore`: file-backed persistence for the bearer credential,
//!   with lazy expiry enforced on read
//! - `Session`: in-memory authenticated/anonymous state derived from
//!   the store at startup

pub mod session;
pub mod store;

pub use session::Session;
pub use store::{Credential, TokenStore};
