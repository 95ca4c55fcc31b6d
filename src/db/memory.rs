use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::Store;
use crate::error::ApiError;
use crate::models::{Booking, BookingData, BookingWithPlace, ImageSet, Place, PlaceData, User};

/// HashMap-backed store for the test suite and local runs without a
/// document store.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<HashMap<Uuid, User>>,
    places: Mutex<HashMap<Uuid, Place>>,
    bookings: Mutex<HashMap<Uuid, Booking>>,
    images: Mutex<HashMap<Uuid, ImageSet>>,
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, ApiError> {
        let mut users = self.users.lock().await;
        if users.values().any(|u| u.email == email) {
            return Err(ApiError::DuplicateEmail);
        }

        let user = User {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let users = self.users.lock().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        Ok(self.users.lock().await.get(&id).cloned())
    }

    async fn create_place(&self, owner: Uuid, fields: PlaceData) -> Result<Place, ApiError> {
        let place = Place::from_fields(Uuid::new_v4(), owner, fields);
        self.places.lock().await.insert(place.id, place.clone());
        Ok(place)
    }

    async fn update_place(
        &self,
        id: Uuid,
        caller: Uuid,
        fields: PlaceData,
    ) -> Result<Place, ApiError> {
        let mut places = self.places.lock().await;
        let current = places.get(&id).ok_or(ApiError::NotFound)?;
        if current.owner != caller {
            return Err(ApiError::Forbidden);
        }

        let updated = Place::from_fields(id, current.owner, fields);
        places.insert(id, updated.clone());
        Ok(updated)
    }

    async fn place_by_id(&self, id: Uuid) -> Result<Option<Place>, ApiError> {
        Ok(self.places.lock().await.get(&id).cloned())
    }

    async fn places_by_owner(&self, owner: Uuid) -> Result<Vec<Place>, ApiError> {
        let places = self.places.lock().await;
        Ok(places.values().filter(|p| p.owner == owner).cloned().collect())
    }

    async fn all_places(&self) -> Result<Vec<Place>, ApiError> {
        Ok(self.places.lock().await.values().cloned().collect())
    }

    async fn create_booking(&self, user: Uuid, fields: BookingData) -> Result<Booking, ApiError> {
        let booking = Booking::from_fields(Uuid::new_v4(), user, fields);
        self.bookings.lock().await.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn bookings_for_user(&self, user: Uuid) -> Result<Vec<BookingWithPlace>, ApiError> {
        let bookings = self.bookings.lock().await;
        let places = self.places.lock().await;
        Ok(bookings
            .values()
            .filter(|b| b.user == user)
            .cloned()
            .map(|b| {
                let place = places.get(&b.place).cloned();
                BookingWithPlace::new(b, place)
            })
            .collect())
    }

    async fn store_images(&self, images: Vec<String>) -> Result<ImageSet, ApiError> {
        let set = ImageSet {
            id: Uuid::new_v4(),
            images,
        };
        self.images.lock().await.insert(set.id, set.clone());
        Ok(set)
    }
}
