use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered account. The bcrypt hash lives next to the profile fields in
/// the stored document; API responses go through [`UserOut`] so the hash
/// never leaves the store layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Public view of a [`User`].
#[derive(Debug, Serialize)]
pub struct UserOut {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserOut {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// A rentable listing owned by one user. Mutation is a full-field replace
/// by the owner; there is no delete operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: Uuid,
    pub owner: Uuid,
    pub title: String,
    pub address: String,
    pub description: String,
    pub extra_info: String,
    pub perks: Vec<String>,
    pub check_in: String,
    pub check_out: String,
    pub max_guests: i64,
    pub price: f64,
    pub photos: Vec<String>,
}

impl Place {
    pub fn from_fields(id: Uuid, owner: Uuid, fields: PlaceData) -> Self {
        Self {
            id,
            owner,
            title: fields.title,
            address: fields.address,
            description: fields.description,
            extra_info: fields.extra_info,
            perks: fields.perks,
            check_in: fields.check_in,
            check_out: fields.check_out,
            max_guests: fields.max_guests,
            price: fields.price,
            photos: fields.added_photos,
        }
    }
}

/// Listing fields as submitted by the client. Every field is optional at
/// the storage layer; absent fields are stored empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceData {
    pub title: String,
    pub address: String,
    pub added_photos: Vec<String>,
    pub perks: Vec<String>,
    pub description: String,
    pub extra_info: String,
    pub check_in: String,
    pub check_out: String,
    pub max_guests: i64,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlaceRequest {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: PlaceData,
}

/// A reservation referencing a [`Place`] and the booking user. Read-only
/// once created; no availability check is performed against other bookings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub place: Uuid,
    pub user: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub number_of_guests: i64,
    pub name: String,
    pub phone: String,
    pub price: f64,
}

impl Booking {
    pub fn from_fields(id: Uuid, user: Uuid, fields: BookingData) -> Self {
        Self {
            id,
            place: fields.place,
            user,
            check_in: fields.check_in,
            check_out: fields.check_out,
            number_of_guests: fields.number_of_guests,
            name: fields.name,
            phone: fields.phone,
            price: fields.price,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingData {
    pub place: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub number_of_guests: i64,
    pub name: String,
    pub phone: String,
    pub price: f64,
}

/// Booking joined with its referenced place, the shape the listing endpoint
/// returns. `place` is `None` when the referenced document is gone.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithPlace {
    pub id: Uuid,
    pub place: Option<Place>,
    pub user: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub number_of_guests: i64,
    pub name: String,
    pub phone: String,
    pub price: f64,
}

impl BookingWithPlace {
    pub fn new(booking: Booking, place: Option<Place>) -> Self {
        Self {
            id: booking.id,
            place,
            user: booking.user,
            check_in: booking.check_in,
            check_out: booking.check_out,
            number_of_guests: booking.number_of_guests,
            name: booking.name,
            phone: booking.phone,
            price: booking.price,
        }
    }
}

/// Inline base64 images persisted as a single document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSet {
    pub id: Uuid,
    pub images: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UploadByLinkRequest {
    pub link: String,
}

#[derive(Debug, Deserialize)]
pub struct DevUploadRequest {
    pub images: Vec<String>,
}

/// JWT claims carried by the `token` cookie.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub uid: Uuid,
    pub exp: usize,
}
