use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use bcrypt::{hash, verify, DEFAULT_COST};
use serde_json::json;

use crate::auth;
use crate::error::ApiError;
use crate::models::{LoginRequest, RegisterRequest, UserOut};
use crate::state::AppState;

#[post("/api/register")]
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let RegisterRequest {
        name,
        email,
        password,
    } = body.into_inner();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "name, email and password are required".into(),
        ));
    }

    let password_hash = hash(&password, DEFAULT_COST)?;
    let user = state.store.create_user(&name, &email, &password_hash).await?;
    Ok(HttpResponse::Ok().json(UserOut::from(&user)))
}

#[post("/api/login")]
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = state
        .store
        .user_by_email(&body.email)
        .await?
        .ok_or(ApiError::NoSuchAccount)?;
    if !verify(&body.password, &user.password_hash)? {
        return Err(ApiError::WrongPassword);
    }

    let token = auth::issue_token(&user, &state.config.jwt_secret)?;
    Ok(HttpResponse::Ok()
        .cookie(auth::session_cookie(token.clone()))
        .json(json!({ "status": "ok", "token": token, "user": UserOut::from(&user) })))
}

/// Authentication-optional read: an anonymous caller gets the literal
/// "null" the client expects rather than an error.
#[get("/api/profile")]
pub async fn profile(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    match auth::optional_user(&req, &state.config.jwt_secret) {
        Some(identity) => {
            let user = state
                .store
                .user_by_id(identity.user_id)
                .await?
                .ok_or(ApiError::NotFound)?;
            Ok(HttpResponse::Ok().json(UserOut::from(&user)))
        }
        None => Ok(HttpResponse::Ok().json("null")),
    }
}

#[post("/api/logout")]
pub async fn logout() -> impl Responder {
    HttpResponse::Ok()
        .cookie(auth::expired_cookie())
        .json("deleted")
}
