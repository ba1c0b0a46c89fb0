//! API client for communicating with the Greenlight REST API.
//!
//! This module provides the `ApiClient` struct, the only component that
//! issues HTTP calls. Every request carries a JSON content type, and the
//! bearer token is attached whenever one is set. Non-2xx responses are
//! normalized into `ApiError` so callers see either a typed success value
//! or a structured failure.

use reqwest::{header, Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize};

use crate::models::{AuthToken, Metadata, Movie, MovieQuery, User};

use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Successful movie listing: one page of the catalog plus its pagination
/// descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieList {
    #[serde(default)]
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub metadata: Metadata,
}

// The API wraps every success payload in a single-key envelope.

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: User,
}

#[derive(Debug, Deserialize)]
struct TokenEnvelope {
    authentication_token: AuthToken,
}

/// API client for the Greenlight server.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token: None,
        })
    }

    /// Set the bearer token for authenticated requests.
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Drop the bearer token; subsequent requests go out anonymous.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the standing headers and dispatch, normalizing the outcome.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let request = request.header(header::CONTENT_TYPE, "application/json");
        let request = match self.token {
            Some(ref token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    // ===== Endpoint Wrappers =====

    /// `POST /v1/users` - register a new account.
    pub async fn register_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let body = serde_json::json!({
            "name": name,
            "email": email,
            "password": password,
        });
        let envelope: UserEnvelope = self
            .send(self.client.post(self.url("/v1/users")).json(&body))
            .await?;
        Ok(envelope.user)
    }

    /// `PUT /v1/users/activated` - activate an account with an emailed token.
    pub async fn activate_user(&self, token: &str) -> Result<User, ApiError> {
        let body = serde_json::json!({ "token": token });
        let envelope: UserEnvelope = self
            .send(self.client.put(self.url("/v1/users/activated")).json(&body))
            .await?;
        Ok(envelope.user)
    }

    /// `POST /v1/tokens/authentication` - exchange email+password for a
    /// bearer token.
    pub async fn create_auth_token(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthToken, ApiError> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });
        let envelope: TokenEnvelope = self
            .send(
                self.client
                    .post(self.url("/v1/tokens/authentication"))
                    .json(&body),
            )
            .await?;
        Ok(envelope.authentication_token)
    }

    /// `GET /v1/movies` - list movies with optional filter/sort/pagination.
    pub async fn list_movies(&self, query: &MovieQuery) -> Result<MovieList, ApiError> {
        self.send(
            self.client
                .get(self.url("/v1/movies"))
                .query(&query.to_pairs()),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build the movies envelope the server would return for one page of a
    /// 45-record catalog sorted by title ascending.
    fn movies_page_json(page: i64, page_size: i64, total: i64) -> String {
        let first = (page - 1) * page_size + 1;
        let last = (first + page_size - 1).min(total);
        let movies: Vec<serde_json::Value> = (first..=last)
            .map(|n| {
                serde_json::json!({
                    "id": n,
                    "title": format!("Movie {:02}", n),
                    "year": 1990 + (n % 30),
                    "runtime": 100,
                    "genres": ["drama"],
                    "version": 1,
                })
            })
            .collect();
        let last_page = (total + page_size - 1) / page_size;
        serde_json::json!({
            "movies": movies,
            "metadata": {
                "current_page": page,
                "page_size": page_size,
                "first_page": 1,
                "last_page": last_page,
                "total_records": total,
            },
        })
        .to_string()
    }

    #[test]
    fn test_parse_movies_page_two_of_45() {
        let json = movies_page_json(2, 20, 45);
        let list: MovieList = serde_json::from_str(&json).expect("movies envelope should parse");

        // Page 2 at page_size 20 over 45 records is exactly records 21-40.
        assert_eq!(list.movies.len(), 20);
        assert_eq!(list.movies.first().map(|m| m.id), Some(21));
        assert_eq!(list.movies.last().map(|m| m.id), Some(40));

        assert_eq!(
            list.metadata,
            Metadata {
                current_page: 2,
                page_size: 20,
                first_page: 1,
                last_page: 3,
                total_records: 45,
            }
        );
        assert!(list.metadata.has_previous_page());
        assert!(list.metadata.has_next_page());
    }

    #[test]
    fn test_parse_movies_final_partial_page() {
        let json = movies_page_json(3, 20, 45);
        let list: MovieList = serde_json::from_str(&json).expect("movies envelope should parse");
        assert_eq!(list.movies.len(), 5);
        assert_eq!(list.movies.first().map(|m| m.id), Some(41));
        assert!(!list.metadata.has_next_page());
    }

    #[test]
    fn test_parse_empty_movies_envelope() {
        // A filtered query matching nothing returns no movies array and an
        // empty metadata object.
        let list: MovieList =
            serde_json::from_str(r#"{"metadata": {}}"#).expect("empty envelope should parse");
        assert!(list.movies.is_empty());
        assert_eq!(list.metadata.total_records, 0);
    }

    #[test]
    fn test_parse_auth_token_envelope() {
        let json = r#"{
            "authentication_token": {
                "token": "X3LVDQIOGBPNP6TZ75IDWQVMLM",
                "expiry": "2026-09-01T12:00:00Z"
            }
        }"#;
        let envelope: TokenEnvelope = serde_json::from_str(json).expect("token envelope");
        assert_eq!(envelope.authentication_token.token, "X3LVDQIOGBPNP6TZ75IDWQVMLM");
    }

    #[test]
    fn test_parse_user_envelope() {
        let json = r#"{
            "user": {
                "id": 7,
                "created_at": "2026-08-01T09:30:00Z",
                "name": "Alice Smith",
                "email": "alice@example.com",
                "activated": false
            }
        }"#;
        let envelope: UserEnvelope = serde_json::from_str(json).expect("user envelope");
        assert_eq!(envelope.user.name, "Alice Smith");
        assert!(!envelope.user.activated);
    }
}
