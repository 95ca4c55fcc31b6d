pub mod auth;
pub mod booking_handlers;
pub mod config;
pub mod db;
pub mod error;
pub mod image;
pub mod models;
pub mod place_handlers;
pub mod routes;
pub mod state;
pub mod upload_handlers;
pub mod user_handlers;
