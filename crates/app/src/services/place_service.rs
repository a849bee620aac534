//! Place service: use-cases for managing the places listed in a city.

use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{CityId, PlaceId, UserId};
use hbnb_domain::payload::{self, Payload};
use hbnb_domain::place::{NewPlace, Place, PlacePatch};
use hbnb_domain::time::now;
use hbnb_domain::user::User;

use super::found;
use crate::ports::{CityRepository, PlaceRepository, UserRepository};

/// Application service for place CRUD operations.
///
/// A place belongs to a city and is hosted by a user; both are resolved on
/// creation.
pub struct PlaceService<PR, CR, UR> {
    places: PR,
    cities: CR,
    users: UR,
}

impl<PR, CR, UR> PlaceService<PR, CR, UR>
where
    PR: PlaceRepository,
    CR: CityRepository,
    UR: UserRepository,
{
    pub fn new(places: PR, cities: CR, users: UR) -> Self {
        Self {
            places,
            cities,
            users,
        }
    }

    async fn require_city(&self, id: CityId) -> Result<City, HbnbError> {
        found(id, self.cities.get_by_id(id).await?)
    }

    async fn require_user(&self, id: UserId) -> Result<User, HbnbError> {
        found(id, self.users.get_by_id(id).await?)
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the city does not exist, or a
    /// storage error.
    pub async fn list_places_of_city(&self, city_id: CityId) -> Result<Vec<Place>, HbnbError> {
        self.require_city(city_id).await?;
        self.places.find_by_city_id(city_id).await
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no place with `id` exists, or a
    /// storage error.
    pub async fn get_place(&self, id: PlaceId) -> Result<Place, HbnbError> {
        found(id, self.places.get_by_id(id).await?)
    }

    /// Validate `body` and list a new place in `city_id`.
    ///
    /// Checks run in order: the city exists, the body is an object, `user_id`
    /// then `name` are present, the host user exists, the field types match.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] for an unknown city or host,
    /// [`HbnbError::Validation`] when the body is rejected, or a storage error.
    #[tracing::instrument(skip(self, body))]
    pub async fn create_place(
        &self,
        city_id: CityId,
        body: Option<Payload>,
    ) -> Result<Place, HbnbError> {
        self.require_city(city_id).await?;
        let body = payload::require_object(body)?;
        payload::require_fields(&body, Place::REQUIRED)?;
        let user_id = payload::reference::<User>(&body, "user_id")?;
        self.require_user(user_id).await?;
        let draft: NewPlace = payload::decode::<Place, _>(body)?;

        let place = self
            .places
            .create(Place::create(city_id, user_id, draft, now()))
            .await?;
        tracing::info!(place_id = %place.id, %city_id, %user_id, "place created");
        Ok(place)
    }

    /// Apply the keys of `body` to an existing place. The owning city and the
    /// host never change.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the place does not exist,
    /// [`HbnbError::Validation`] when the body is rejected, or a storage error.
    #[tracing::instrument(skip(self, body))]
    pub async fn update_place(
        &self,
        id: PlaceId,
        body: Option<Payload>,
    ) -> Result<Place, HbnbError> {
        let mut place = self.get_place(id).await?;
        let body = payload::require_object(body)?;
        let patch: PlacePatch = payload::decode::<Place, _>(body)?;

        place.apply(patch, now());
        self.places.update(place).await
    }

    /// Delete a place and its reviews.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the place does not exist, or a
    /// storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_place(&self, id: PlaceId) -> Result<(), HbnbError> {
        self.get_place(id).await?;
        self.places.delete(id).await?;
        tracing::info!(place_id = %id, "place deleted");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_places(&self) -> Result<u64, HbnbError> {
        self.places.count().await
    }
}
