use actix_web::{get, post, put, web, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::auth;
use crate::error::ApiError;
use crate::models::{PlaceData, UpdatePlaceRequest};
use crate::state::AppState;

#[post("/api/places")]
pub async fn create_place(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<PlaceData>,
) -> Result<HttpResponse, ApiError> {
    let identity = auth::require_user(&req, &state.config.jwt_secret)?;
    let place = state
        .store
        .create_place(identity.user_id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(place))
}

#[get("/api/userplaces")]
pub async fn user_places(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let identity = auth::require_user(&req, &state.config.jwt_secret)?;
    let places = state.store.places_by_owner(identity.user_id).await?;
    Ok(HttpResponse::Ok().json(places))
}

#[get("/api/places/{id}")]
pub async fn get_place(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let place = state
        .store
        .place_by_id(id.into_inner())
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(place))
}

/// Owner-only full-field replace.
#[put("/api/places")]
pub async fn update_place(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<UpdatePlaceRequest>,
) -> Result<HttpResponse, ApiError> {
    let identity = auth::require_user(&req, &state.config.jwt_secret)?;
    let UpdatePlaceRequest { id, fields } = body.into_inner();
    state.store.update_place(id, identity.user_id, fields).await?;
    Ok(HttpResponse::Ok().json("ok"))
}

/// Unauthenticated, unpaginated index listing.
#[get("/api/places")]
pub async fn list_places(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(state.store.all_places().await?))
}
