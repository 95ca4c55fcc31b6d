use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::auth;
use crate::error::ApiError;
use crate::models::BookingData;
use crate::state::AppState;

/// Accepts any authenticated booking; availability against existing
/// bookings for the same place and dates is not checked.
#[post("/api/bookings")]
pub async fn create_booking(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<BookingData>,
) -> Result<HttpResponse, ApiError> {
    let identity = auth::require_user(&req, &state.config.jwt_secret)?;
    let booking = state
        .store
        .create_booking(identity.user_id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(booking))
}

#[get("/api/bookings")]
pub async fn list_bookings(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let identity = auth::require_user(&req, &state.config.jwt_secret)?;
    let bookings = state.store.bookings_for_user(identity.user_id).await?;
    Ok(HttpResponse::Ok().json(bookings))
}
