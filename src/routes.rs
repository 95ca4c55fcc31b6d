use actix_web::{get, web, HttpResponse, Responder};

use crate::{booking_handlers, place_handlers, upload_handlers, user_handlers};

/// Registers every service; shared by `main` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(user_handlers::register)
        .service(user_handlers::login)
        .service(user_handlers::profile)
        .service(user_handlers::logout)
        .service(upload_handlers::upload_by_link)
        .service(upload_handlers::dev_upload)
        .service(place_handlers::create_place)
        .service(place_handlers::user_places)
        .service(place_handlers::get_place)
        .service(place_handlers::update_place)
        .service(place_handlers::list_places)
        .service(booking_handlers::create_booking)
        .service(booking_handlers::list_bookings)
        .service(dev_check);
}

/// Simple liveness check.
#[get("/api/dev")]
async fn dev_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "message": "OK" }))
}
