use std::env;

/// Process configuration, read from the environment once at startup and
/// passed into the API layer through the shared state.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub mongo_url: String,
    pub db_name: String,
    pub jwt_secret: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4000),
            mongo_url: env::var("MONGO_URL")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            db_name: env::var("MONGO_DB").unwrap_or_else(|_| "roost".to_string()),
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| "secret".to_string()),
        }
    }
}
