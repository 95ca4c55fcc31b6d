use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::HttpRequest;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{Claims, User};

/// Name of the cookie carrying the signed token.
pub const TOKEN_COOKIE: &str = "token";

/// Validity window of an issued token, in hours.
pub const TOKEN_TTL_HOURS: i64 = 5;

/// Caller identity decoded from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
}

pub fn issue_token(user: &User, secret: &str) -> Result<String, ApiError> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::hours(TOKEN_TTL_HOURS))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: user.email.clone(),
        uid: user.id,
        exp: expiration,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?)
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

/// Lenient entry point: a missing, malformed or expired token means an
/// anonymous caller, never an error.
pub fn optional_user(req: &HttpRequest, secret: &str) -> Option<Identity> {
    let cookie = req.cookie(TOKEN_COOKIE)?;
    let claims = verify_token(cookie.value(), secret).ok()?;
    Some(Identity {
        user_id: claims.uid,
        email: claims.sub,
    })
}

/// Strict entry point for routes that reject anonymous callers.
pub fn require_user(req: &HttpRequest, secret: &str) -> Result<Identity, ApiError> {
    optional_user(req, secret).ok_or(ApiError::Unauthenticated)
}

pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build(TOKEN_COOKIE, token)
        .path("/")
        .http_only(false)
        .secure(true)
        .same_site(SameSite::None)
        .max_age(CookieDuration::hours(TOKEN_TTL_HOURS))
        .finish()
}

/// Already-expired replacement cookie; the client discards the credential
/// immediately.
pub fn expired_cookie() -> Cookie<'static> {
    Cookie::build(TOKEN_COOKIE, "")
        .path("/")
        .http_only(false)
        .secure(true)
        .same_site(SameSite::None)
        .max_age(CookieDuration::ZERO)
        .finish()
}
