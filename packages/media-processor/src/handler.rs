use axum::extract::{Query, State};
use axum::http::{HeaderName, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::AppState;
use media_core::{MediaError, ProcessingRequest};

const CACHE_CONTROL_IMMUTABLE: &str = "public, max-age=31536000, immutable";
const X_CACHE: &str = "x-cache";

/// 数値でない値も検証まで届くよう、すべて文字列で受け取る
#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    pub filename: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub format: Option<String>,
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn get_image(
    State(state): State<AppState>,
    Query(query): Query<ImageQuery>,
) -> Result<Response, AppError> {
    let request = ProcessingRequest::parse(
        query.filename.as_deref(),
        query.width.as_deref(),
        query.height.as_deref(),
        query.format.as_deref(),
    )?;

    let artifact = state.service.process(&request).await?;

    let body = tokio::fs::read(&artifact.path).await.map_err(|e| {
        AppError::Internal(format!("failed to read {}: {e}", artifact.path.display()))
    })?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, artifact.format.content_type()),
            (header::CACHE_CONTROL, CACHE_CONTROL_IMMUTABLE),
            (HeaderName::from_static(X_CACHE), if artifact.cached { "HIT" } else { "MISS" }),
        ],
        body,
    )
        .into_response())
}

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<MediaError> for AppError {
    fn from(err: MediaError) -> Self {
        if err.is_client_error() {
            tracing::warn!(error = %err, "rejected request");
        }

        match err {
            MediaError::MissingParameter(name) => {
                AppError::BadRequest(format!("Missing required parameter: {name}"))
            }
            MediaError::InvalidDimension => {
                AppError::BadRequest("Width and height must be positive numbers".to_string())
            }
            MediaError::InvalidFilename(_) => AppError::BadRequest("Invalid filename".to_string()),
            MediaError::UnsupportedFormat(ext) => {
                AppError::BadRequest(format!("Unsupported image format: {ext}"))
            }
            MediaError::SourceNotFound { filename } => {
                AppError::NotFound(format!("Image not found: {filename}"))
            }
            err @ (MediaError::Storage(_) | MediaError::Transform(_)) => {
                AppError::Internal(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Internal server error: {msg}"),
                )
                    .into_response()
            }
        }
    }
}
