// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse};

use crate::database::StoreError;

/// HTTP API error with appropriate status codes and client-friendly messages.
///
/// Bodies are plain text; internal causes are logged, never echoed.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    ValidationError {
        message: String,
        fields: Vec<String>,
    },

    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::ValidationError { message, .. } => message,
            ApiError::Unauthorized(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
        }
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    /// 400 naming the offending form fields in the body
    pub fn validation_error(message: impl Into<String>, fields: Vec<String>) -> Self {
        ApiError::ValidationError {
            message: message.into(),
            fields,
        }
    }

    /// The gate's fixed rejection
    pub fn access_denied() -> Self {
        ApiError::Unauthorized("Access Denied".to_string())
    }

    pub fn note_not_found() -> Self {
        ApiError::NotFound("Note not found.".to_string())
    }

    pub fn internal_server_error() -> Self {
        ApiError::InternalServerError("Internal Server Error".to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        // Log the real error but return generic message
        tracing::error!("Note store error: {}", err);
        ApiError::internal_server_error()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = match &self {
            ApiError::ValidationError { message, fields } if !fields.is_empty() => {
                format!("{}: {}", message, fields.join(", "))
            }
            _ => self.message().to_string(),
        };
        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_become_generic_500() {
        let err: ApiError = StoreError::ConfigMissing("DATABASE_URL").into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Internal Server Error");
    }

    #[test]
    fn fixed_messages() {
        assert_eq!(ApiError::access_denied().status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::access_denied().message(), "Access Denied");
        assert_eq!(ApiError::note_not_found().status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::note_not_found().to_string(), "Note not found.");
    }

    #[test]
    fn validation_maps_to_400() {
        let err = ApiError::validation_error("Missing required fields", Vec::new());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn validation_body_names_the_fields() {
        let err = ApiError::validation_error("Missing required fields", vec!["title".into(), "body".into()]);
        assert_eq!(err.message(), "Missing required fields");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Missing required fields: title, body");
    }
}
