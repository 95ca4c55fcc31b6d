use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{Booking, BookingData, BookingWithPlace, ImageSet, Place, PlaceData, User};

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Persistence seam. The production implementation is backed by the
/// document store; [`MemoryStore`] serves the test suite and local runs.
/// Both enforce the same email-uniqueness rule.
#[async_trait]
pub trait Store: Send + Sync {
    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, ApiError>;
    async fn user_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;
    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError>;

    async fn create_place(&self, owner: Uuid, fields: PlaceData) -> Result<Place, ApiError>;
    /// Full-field replace. Rejects callers that are not the stored owner;
    /// the stored document is left untouched in that case.
    async fn update_place(
        &self,
        id: Uuid,
        caller: Uuid,
        fields: PlaceData,
    ) -> Result<Place, ApiError>;
    async fn place_by_id(&self, id: Uuid) -> Result<Option<Place>, ApiError>;
    async fn places_by_owner(&self, owner: Uuid) -> Result<Vec<Place>, ApiError>;
    /// Unpaginated; returns every stored place.
    async fn all_places(&self) -> Result<Vec<Place>, ApiError>;

    /// No availability check is performed; overlapping bookings for the
    /// same place are accepted.
    async fn create_booking(&self, user: Uuid, fields: BookingData) -> Result<Booking, ApiError>;
    /// Bookings owned by the caller, each joined with its referenced place.
    async fn bookings_for_user(&self, user: Uuid) -> Result<Vec<BookingWithPlace>, ApiError>;

    async fn store_images(&self, images: Vec<String>) -> Result<ImageSet, ApiError>;
}
