//! HTTP surface: `GET /` liveness and `POST /predict`.

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::service::{ClassificationResult, ClassificationService};

/// Name of the multipart field carrying the image.
pub const UPLOAD_FIELD: &str = "file";

pub const LIVENESS_MESSAGE: &str = "Waste classification API is running. Use POST /predict";

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ClassificationService>,
}

#[derive(Debug, Deserialize)]
pub struct PredictParams {
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Every failure is reported the same way: status 500 and `{"error": ...}`.
#[derive(Debug)]
pub struct ApiError(String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: self.0 })).into_response()
    }
}

impl<E: std::error::Error> From<E> for ApiError {
    fn from(err: E) -> Self {
        ApiError(err.to_string())
    }
}

pub fn router(service: Arc<ClassificationService>, body_limit_bytes: usize) -> Router {
    Router::new()
        .route("/", get(liveness))
        .route("/predict", post(predict))
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .with_state(AppState { service })
}

async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": LIVENESS_MESSAGE }))
}

async fn predict(
    State(state): State<AppState>,
    Query(params): Query<PredictParams>,
    mut multipart: Multipart,
) -> Result<Json<ClassificationResult>, ApiError> {
    let language = params.language.unwrap_or_else(|| "en".to_string());

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(UPLOAD_FIELD) {
            upload = Some(field.bytes().await?);
            break;
        }
    }
    let bytes = upload.ok_or_else(|| ApiError("No file uploaded".to_string()))?;

    let service = Arc::clone(&state.service);
    let lang = language.clone();
    let outcome = tokio::task::spawn_blocking(move || service.classify(&bytes, &lang)).await?;

    match outcome {
        Ok(result) => {
            log::info!(
                "Classified upload as '{}' ({:?}, confidence {:.3}, language {})",
                result.category,
                result.source,
                result.confidence,
                language
            );
            Ok(Json(result))
        }
        Err(e) => {
            log::warn!("Classification failed: {}", e);
            Err(e.into())
        }
    }
}
