//! Place: a rentable listing, hosted by a [`User`](crate::user::User) in a
//! [`City`](crate::city::City).

use serde::{Deserialize, Serialize};

use crate::id::{CityId, PlaceId, UserId};
use crate::model::Model;
use crate::time::Timestamp;

/// A listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub city_id: CityId,
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub number_rooms: u32,
    pub number_bathrooms: u32,
    pub max_guest: u32,
    pub price_by_night: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields accepted when creating a [`Place`].
///
/// `city_id` comes from the request path and `user_id` is resolved separately
/// before the draft is decoded, so neither appears here.
#[derive(Debug, Deserialize)]
pub struct NewPlace {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub number_rooms: u32,
    #[serde(default)]
    pub number_bathrooms: u32,
    #[serde(default)]
    pub max_guest: u32,
    #[serde(default)]
    pub price_by_night: u32,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

/// Fields a client may overwrite on an existing [`Place`].
#[derive(Debug, Default, Deserialize)]
pub struct PlacePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub number_rooms: Option<u32>,
    pub number_bathrooms: Option<u32>,
    pub max_guest: Option<u32>,
    pub price_by_night: Option<u32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Place {
    /// Keys that must be present in a creation payload, in check order.
    pub const REQUIRED: &'static [&'static str] = &["user_id", "name"];

    #[must_use]
    pub fn create(city_id: CityId, user_id: UserId, draft: NewPlace, now: Timestamp) -> Self {
        Self {
            id: PlaceId::new(),
            city_id,
            user_id,
            name: draft.name,
            description: draft.description,
            number_rooms: draft.number_rooms,
            number_bathrooms: draft.number_bathrooms,
            max_guest: draft.max_guest,
            price_by_night: draft.price_by_night,
            latitude: draft.latitude,
            longitude: draft.longitude,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: PlacePatch, now: Timestamp) {
        let PlacePatch {
            name,
            description,
            number_rooms,
            number_bathrooms,
            max_guest,
            price_by_night,
            latitude,
            longitude,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        self.number_rooms = number_rooms.unwrap_or(self.number_rooms);
        self.number_bathrooms = number_bathrooms.unwrap_or(self.number_bathrooms);
        self.max_guest = max_guest.unwrap_or(self.max_guest);
        self.price_by_night = price_by_night.unwrap_or(self.price_by_night);
        self.latitude = latitude.unwrap_or(self.latitude);
        self.longitude = longitude.unwrap_or(self.longitude);
        self.updated_at = now;
    }
}

impl Model for Place {
    const CLASS: &'static str = "Place";
    type Id = PlaceId;
}
