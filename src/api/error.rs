use std::collections::HashMap;

use thiserror::Error;

/// Fallback message when the error body is missing, unparsable, or has no
/// usable `error` field.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "an unexpected error occurred";

/// Failure shape for every non-2xx API response plus transport errors.
///
/// The API reports errors as `{"error": "message"}` or
/// `{"error": {"field": "message", ...}}`; the two forms are mutually
/// exclusive in one response, so they get separate variants.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Response carried per-field validation messages.
    #[error("Validation error")]
    Validation {
        status: u16,
        errors: HashMap<String, String>,
    },

    /// Response carried a single error message (or none we could parse).
    #[error("{message}")]
    Message { status: u16, message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// Classify a non-2xx response body into the matching variant.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        #[derive(serde::Deserialize, Default)]
        struct ErrorBody {
            #[serde(default)]
            error: Option<serde_json::Value>,
        }

        let status = status.as_u16();
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();

        match parsed.error {
            Some(serde_json::Value::Object(map)) => {
                let errors = map
                    .into_iter()
                    .map(|(field, message)| {
                        let message = match message {
                            serde_json::Value::String(s) => s,
                            other => other.to_string(),
                        };
                        (field, message)
                    })
                    .collect();
                ApiError::Validation { status, errors }
            }
            Some(serde_json::Value::String(message)) => ApiError::Message { status, message },
            _ => ApiError::Message {
                status,
                message: UNEXPECTED_ERROR_MESSAGE.to_string(),
            },
        }
    }

    /// HTTP status code, when the server produced a response at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Validation { status, .. } | ApiError::Message { status, .. } => Some(*status),
            ApiError::Network(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Per-field validation messages, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&HashMap<String, String>> {
        match self {
            ApiError::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_validation_error_surfaces_field_map() {
        let err = ApiError::from_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"error": {"email": "already taken"}}"#,
        );
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.to_string(), "Validation error");
        let fields = err.field_errors().expect("expected field errors");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("email").map(String::as_str), Some("already taken"));
    }

    #[test]
    fn test_string_error_surfaces_message() {
        let err = ApiError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"error": "invalid credentials"}"#,
        );
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "invalid credentials");
        assert!(err.field_errors().is_none());
    }

    #[test]
    fn test_unparsable_body_surfaces_generic_message() {
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "<html>boom</html>");
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), UNEXPECTED_ERROR_MESSAGE);
        assert!(err.field_errors().is_none());
    }

    #[test]
    fn test_missing_error_field_surfaces_generic_message() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND, r#"{"detail": "gone"}"#);
        assert_eq!(err.to_string(), UNEXPECTED_ERROR_MESSAGE);
        assert!(err.field_errors().is_none());
    }

    #[test]
    fn test_non_string_error_value_surfaces_generic_message() {
        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, r#"{"error": 42}"#);
        assert_eq!(err.to_string(), UNEXPECTED_ERROR_MESSAGE);
    }

    #[test]
    fn test_unauthorized_detection() {
        let err = ApiError::from_status(StatusCode::UNAUTHORIZED, r#"{"error": "invalid or expired token"}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "invalid or expired token");
    }
}
