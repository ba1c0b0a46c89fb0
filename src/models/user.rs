use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account record as returned by the registration and activation endpoints.
/// Display-only; never cached beyond the current view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub activated: bool,
}

/// Bearer token issued by `POST /v1/tokens/authentication`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
    pub expiry: DateTime<Utc>,
}
