//! Stateless token verification.
//!
//! An external-collaborator endpoint: clients hand over an HS256 JWT and
//! get back whether it currently verifies. The crypto core does not
//! depend on this; it exists so stateless clients can check a session
//! token without a user-store round trip.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jsonwebtoken::{Algorithm as JwtAlgorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
use serde_json::json;

use crate::server::AppState;
use crate::server::error::{ApiError, ApiResult};

#[derive(Debug, Deserialize)]
pub(crate) struct VerifyTokenRequest {
    #[serde(default)]
    token: String,
}

/// `POST /api/verify-token`
pub(crate) async fn verify_token(
    State(state): State<AppState>,
    Json(body): Json<VerifyTokenRequest>,
) -> ApiResult<Response> {
    if body.token.is_empty() {
        return Err(ApiError::BadRequest("Token is required".into()));
    }

    let Some(jwt_secret) = state.jwt_secret.as_ref() else {
        return Err(ApiError::Internal("Token verification is not configured".into()));
    };

    let key = DecodingKey::from_secret(jwt_secret.expose_secret().as_bytes());
    let validation = Validation::new(JwtAlgorithm::HS256);

    match decode::<serde_json::Value>(&body.token, &key, &validation) {
        Ok(data) => Ok(Json(json!({ "valid": true, "decoded": data.claims })).into_response()),
        Err(_) => Ok((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "valid": false, "message": "Invalid token" })),
        )
            .into_response()),
    }
}
