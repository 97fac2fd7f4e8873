//! Encrypt, decrypt, and health handlers.
//!
//! Both cipher endpoints accept `multipart/form-data` with a `file` part
//! and an `algorithm` field. Metadata rides out-of-band: response headers
//! by default, or a JSON envelope when the client sends `response=json`.
//! Cipher work runs on the blocking pool; the handlers only shuttle bytes.

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;
use serde_json::json;

use crate::config::{HEADER_ALGORITHM, HEADER_IV_BASE64, HEADER_ORIGINAL_FILENAME};
use crate::crypto::Algorithm;
use crate::server::AppState;
use crate::server::error::{ApiError, ApiResult};
use crate::wire;

/// JSON envelope returned when the client asks for `response=json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EncryptEnvelope {
    algorithm: &'static str,
    filename: String,
    original_filename: String,
    iv_base64: String,
    ciphertext_base64: String,
}

/// Fields collected from a multipart upload.
#[derive(Default)]
struct Upload {
    file: Option<(String, Vec<u8>)>,
    algorithm: Option<String>,
    iv: Option<String>,
    response: Option<String>,
}

impl Upload {
    async fn from_multipart(mut multipart: Multipart) -> ApiResult<Self> {
        let mut upload = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|_| ApiError::BadRequest("Malformed multipart payload".into()))?
        {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            match name.as_str() {
                "file" => {
                    let filename =
                        field.file_name().map_or_else(|| "file".to_owned(), str::to_owned);
                    let bytes = field.bytes().await.map_err(|_| {
                        ApiError::BadRequest("Malformed multipart payload".into())
                    })?;
                    upload.file = Some((filename, bytes.to_vec()));
                }
                "algorithm" | "iv" | "response" => {
                    let value = field.text().await.map_err(|_| {
                        ApiError::BadRequest("Malformed multipart payload".into())
                    })?;
                    match name.as_str() {
                        "algorithm" => upload.algorithm = Some(value),
                        "iv" => upload.iv = Some(value),
                        _ => upload.response = Some(value),
                    }
                }
                // Unknown fields are ignored, matching lenient form handling.
                _ => {}
            }
        }

        Ok(upload)
    }

    fn wants_json(&self) -> bool {
        self.response.as_deref().is_some_and(|r| r.eq_ignore_ascii_case("json"))
    }
}

/// `POST /api/encrypt`
pub(crate) async fn encrypt(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Response> {
    let upload = Upload::from_multipart(multipart).await?;

    let (original_name, payload) = upload
        .file
        .as_ref()
        .cloned()
        .ok_or_else(|| ApiError::BadRequest("No file uploaded".into()))?;

    let algorithm = Algorithm::from_token(upload.algorithm.as_deref().unwrap_or_default())?;

    tracing::debug!(%algorithm, size = payload.len(), "encrypting upload");

    let engine = state.engine.clone();
    let artifact = tokio::task::spawn_blocking(move || engine.encrypt(&payload, algorithm))
        .await
        .map_err(|_| ApiError::Internal("Encryption failed".into()))??;

    let iv_base64 = wire::encode_iv(&artifact.iv);
    let encrypted_name = wire::encrypted_filename(&original_name);

    if upload.wants_json() {
        let envelope = EncryptEnvelope {
            algorithm: algorithm.token(),
            filename: encrypted_name,
            original_filename: original_name,
            iv_base64,
            ciphertext_base64: BASE64.encode(&artifact.ciphertext),
        };
        return Ok(Json(envelope).into_response());
    }

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/octet-stream"));
    headers.insert(
        HeaderName::from_static(HEADER_ALGORITHM),
        HeaderValue::from_static(algorithm.token()),
    );
    headers.insert(HeaderName::from_static(HEADER_IV_BASE64), text_header(&iv_base64)?);
    headers.insert(
        HeaderName::from_static(HEADER_ORIGINAL_FILENAME),
        text_header(&original_name)?,
    );
    headers.insert(CONTENT_DISPOSITION, attachment_header(&encrypted_name)?);

    Ok((StatusCode::OK, headers, artifact.ciphertext).into_response())
}

/// `POST /api/decrypt`
///
/// The IV arrives base64-encoded, through the `X-IV-Base64` header (which
/// wins) or the `iv` form field.
pub(crate) async fn decrypt(
    State(state): State<AppState>,
    request_headers: HeaderMap,
    multipart: Multipart,
) -> ApiResult<Response> {
    let upload = Upload::from_multipart(multipart).await?;

    let (uploaded_name, payload) = upload
        .file
        .as_ref()
        .cloned()
        .ok_or_else(|| ApiError::BadRequest("No file uploaded".into()))?;

    let algorithm = Algorithm::from_token(upload.algorithm.as_deref().unwrap_or_default())?;

    let iv_encoded = request_headers
        .get(HEADER_IV_BASE64)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .or(upload.iv)
        .ok_or_else(|| {
            ApiError::BadRequest("IV is required (X-IV-Base64 header or iv field)".into())
        })?;
    let iv = wire::decode_iv(&iv_encoded)?;

    tracing::debug!(%algorithm, size = payload.len(), "decrypting upload");

    let engine = state.engine.clone();
    let plaintext =
        tokio::task::spawn_blocking(move || engine.decrypt(&payload, algorithm, &iv))
            .await
            .map_err(|_| ApiError::Internal("Decryption failed".into()))??;

    let restored_name = wire::restored_filename(&uploaded_name).to_owned();

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/octet-stream"));
    headers.insert(CONTENT_DISPOSITION, attachment_header(&restored_name)?);

    Ok((StatusCode::OK, headers, plaintext).into_response())
}

/// `GET /api/health`
pub(crate) async fn health() -> Response {
    Json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
    .into_response()
}

fn text_header(value: &str) -> ApiResult<HeaderValue> {
    HeaderValue::try_from(value)
        .map_err(|_| ApiError::BadRequest("Filename contains unsupported characters".into()))
}

fn attachment_header(filename: &str) -> ApiResult<HeaderValue> {
    // Quotes and control characters would corrupt the header.
    let sanitized: String =
        filename.chars().filter(|c| !c.is_control() && *c != '"').collect();
    text_header(&format!("attachment; filename=\"{sanitized}\""))
}
