use actix_web::{post, web, HttpResponse};

use crate::error::ApiError;
use crate::image;
use crate::models::{DevUploadRequest, UploadByLinkRequest};
use crate::state::AppState;

#[post("/api/uploadByLink")]
pub async fn upload_by_link(
    state: web::Data<AppState>,
    body: web::Json<UploadByLinkRequest>,
) -> Result<HttpResponse, ApiError> {
    let base64 = image::fetch_as_inline(&state.http, &body.link).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "base64": base64 })))
}

/// Persists already-encoded images as a single document.
#[post("/api/devupload")]
pub async fn dev_upload(
    state: web::Data<AppState>,
    body: web::Json<DevUploadRequest>,
) -> Result<HttpResponse, ApiError> {
    if body.images.is_empty() {
        return Err(ApiError::Validation("at least one image is required".into()));
    }

    let stored = state.store.store_images(body.into_inner().images).await?;
    Ok(HttpResponse::Created().json(stored))
}
