use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};
use uuid::Uuid;

use super::Store;
use crate::error::ApiError;
use crate::models::{Booking, BookingData, BookingWithPlace, ImageSet, Place, PlaceData, User};

/// Document-store backend. One client per process, connected before the
/// server starts serving and closed by the entry point on shutdown.
pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    pub async fn connect(url: &str, db_name: &str) -> Result<Self, ApiError> {
        let client = Client::with_uri_str(url).await?;
        let db = client.database(db_name);

        // Email uniqueness is enforced by the store itself.
        let unique_email = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        db.collection::<User>("users")
            .create_index(unique_email)
            .await?;

        log::info!("connected to document store at {url}");
        Ok(Self { client, db })
    }

    pub async fn close(&self) {
        self.client.clone().shutdown().await;
    }

    fn users(&self) -> Collection<User> {
        self.db.collection("users")
    }

    fn places(&self) -> Collection<Place> {
        self.db.collection("places")
    }

    fn bookings(&self) -> Collection<Booking> {
        self.db.collection("bookings")
    }

    fn images(&self) -> Collection<ImageSet> {
        self.db.collection("images")
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref e)) if e.code == 11000
    )
}

#[async_trait]
impl Store for MongoStore {
    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, ApiError> {
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
        };
        self.users().insert_one(&user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                ApiError::DuplicateEmail
            } else {
                ApiError::Database(e)
            }
        })?;
        Ok(user)
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self.users().find_one(doc! { "email": email }).await?)
    }

    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        Ok(self
            .users()
            .find_one(doc! { "id": id.to_string() })
            .await?)
    }

    async fn create_place(&self, owner: Uuid, fields: PlaceData) -> Result<Place, ApiError> {
        let place = Place::from_fields(Uuid::new_v4(), owner, fields);
        self.places().insert_one(&place).await?;
        Ok(place)
    }

    async fn update_place(
        &self,
        id: Uuid,
        caller: Uuid,
        fields: PlaceData,
    ) -> Result<Place, ApiError> {
        let current = self.place_by_id(id).await?.ok_or(ApiError::NotFound)?;
        if current.owner != caller {
            return Err(ApiError::Forbidden);
        }

        // Full-field replace, last write wins.
        let updated = Place::from_fields(id, current.owner, fields);
        self.places()
            .replace_one(doc! { "id": id.to_string() }, &updated)
            .await?;
        Ok(updated)
    }

    async fn place_by_id(&self, id: Uuid) -> Result<Option<Place>, ApiError> {
        Ok(self
            .places()
            .find_one(doc! { "id": id.to_string() })
            .await?)
    }

    async fn places_by_owner(&self, owner: Uuid) -> Result<Vec<Place>, ApiError> {
        let cursor = self
            .places()
            .find(doc! { "owner": owner.to_string() })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn all_places(&self) -> Result<Vec<Place>, ApiError> {
        let cursor = self.places().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn create_booking(&self, user: Uuid, fields: BookingData) -> Result<Booking, ApiError> {
        let booking = Booking::from_fields(Uuid::new_v4(), user, fields);
        self.bookings().insert_one(&booking).await?;
        Ok(booking)
    }

    async fn bookings_for_user(&self, user: Uuid) -> Result<Vec<BookingWithPlace>, ApiError> {
        let cursor = self
            .bookings()
            .find(doc! { "user": user.to_string() })
            .await?;
        let bookings: Vec<Booking> = cursor.try_collect().await?;

        let mut expanded = Vec::with_capacity(bookings.len());
        for booking in bookings {
            let place = self.place_by_id(booking.place).await?;
            expanded.push(BookingWithPlace::new(booking, place));
        }
        Ok(expanded)
    }

    async fn store_images(&self, images: Vec<String>) -> Result<ImageSet, ApiError> {
        let set = ImageSet {
            id: Uuid::new_v4(),
            images,
        };
        self.images().insert_one(&set).await?;
        Ok(set)
    }
}
