use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Every failure a handler can produce. Handlers return
/// `Result<HttpResponse, ApiError>` and the `ResponseError` impl below maps
/// each class to its status, so failures never propagate past the API layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("a user with this email already exists")]
    DuplicateEmail,

    // Login keeps the distinct unknown-account and bad-password messages.
    #[error("Not Found")]
    NoSuchAccount,

    #[error("Wrong Password")]
    WrongPassword,

    #[error("authentication required")]
    Unauthenticated,

    #[error("only the owner may modify this resource")]
    Forbidden,

    #[error("no such document")]
    NotFound,

    #[error("unsupported file type, only jpg, jpeg and png are accepted")]
    UnsupportedType,

    #[error("failed to download image: {0}")]
    DownloadFailed(String),

    #[error("store error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::DuplicateEmail
            | ApiError::NoSuchAccount
            | ApiError::WrongPassword => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::UnsupportedType | ApiError::DownloadFailed(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_)
            | ApiError::Hash(_)
            | ApiError::Token(_)
            | ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_error_class() {
        assert_eq!(
            ApiError::Validation("bad".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::DuplicateEmail.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::WrongPassword.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::UnsupportedType.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::DownloadFailed("timeout".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn login_failures_stay_distinguishable() {
        assert_ne!(
            ApiError::NoSuchAccount.to_string(),
            ApiError::WrongPassword.to_string()
        );
    }

    #[test]
    fn error_body_is_tagged_json() {
        let resp = ApiError::Unauthenticated.error_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
