//! API error type and HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::crypto::CryptoError;

/// Result type for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors crossing the HTTP boundary as a JSON `{message}` payload.
#[derive(Debug)]
pub enum ApiError {
    /// 400: the client sent an unusable request.
    BadRequest(String),

    /// 500: the cipher core failed unexpectedly. The message stays
    /// generic; decrypt failures are never distinguished by cause.
    Internal(String),
}

impl From<CryptoError> for ApiError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::UnsupportedAlgorithm(_) => {
                Self::BadRequest("Invalid algorithm. Use 'aes', 'des', or 'rsa'".into())
            }
            CryptoError::MissingOrInvalidIv => {
                Self::BadRequest("IV is required (X-IV-Base64 header or iv field)".into())
            }
            CryptoError::KeyDerivation(_) | CryptoError::EncryptionFailed => {
                Self::Internal("Encryption failed".into())
            }
            CryptoError::DecryptionFailed => Self::Internal("Decryption failed".into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Internal(message) => {
                tracing::error!(%message, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        let err: ApiError = CryptoError::UnsupportedAlgorithm("blowfish".into()).into();
        assert!(matches!(err, ApiError::BadRequest(_)));

        let err: ApiError = CryptoError::MissingOrInvalidIv.into();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_cipher_failures_map_to_500_without_detail() {
        let err: ApiError = CryptoError::DecryptionFailed.into();
        match err {
            ApiError::Internal(message) => assert_eq!(message, "Decryption failed"),
            other => panic!("expected Internal, got {other:?}"),
        }
    }
}
