//! City service: use-cases for managing the cities of a state.

use hbnb_domain::city::{City, CityPatch, NewCity};
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{CityId, StateId};
use hbnb_domain::payload::{self, Payload};
use hbnb_domain::state::State;
use hbnb_domain::time::now;

use super::found;
use crate::ports::{CityRepository, StateRepository};

/// Application service for city CRUD operations.
///
/// Needs the state repository to resolve the owning state.
pub struct CityService<CR, SR> {
    cities: CR,
    states: SR,
}

impl<CR, SR> CityService<CR, SR>
where
    CR: CityRepository,
    SR: StateRepository,
{
    pub fn new(cities: CR, states: SR) -> Self {
        Self { cities, states }
    }

    async fn require_state(&self, id: StateId) -> Result<State, HbnbError> {
        found(id, self.states.get_by_id(id).await?)
    }

    /// List every city regardless of state.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_cities(&self) -> Result<Vec<City>, HbnbError> {
        self.cities.get_all().await
    }

    /// List the cities of one state.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the state does not exist, even if
    /// it would have had no cities, or a storage error.
    pub async fn list_cities_of_state(&self, state_id: StateId) -> Result<Vec<City>, HbnbError> {
        self.require_state(state_id).await?;
        self.cities.find_by_state_id(state_id).await
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no city with `id` exists, or a
    /// storage error.
    pub async fn get_city(&self, id: CityId) -> Result<City, HbnbError> {
        found(id, self.cities.get_by_id(id).await?)
    }

    /// Validate `body` and create a city inside `state_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the state does not exist (checked
    /// before the body), [`HbnbError::Validation`] when the body is rejected,
    /// or a storage error.
    #[tracing::instrument(skip(self, body))]
    pub async fn create_city(
        &self,
        state_id: StateId,
        body: Option<Payload>,
    ) -> Result<City, HbnbError> {
        self.require_state(state_id).await?;
        let body = payload::require_object(body)?;
        payload::require_fields(&body, City::REQUIRED)?;
        let draft: NewCity = payload::decode::<City, _>(body)?;

        let city = self
            .cities
            .create(City::create(state_id, draft, now()))
            .await?;
        tracing::info!(city_id = %city.id, "city created");
        Ok(city)
    }

    /// Apply the keys of `body` to an existing city. `state_id` never changes.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the city does not exist,
    /// [`HbnbError::Validation`] when the body is rejected, or a storage error.
    #[tracing::instrument(skip(self, body))]
    pub async fn update_city(&self, id: CityId, body: Option<Payload>) -> Result<City, HbnbError> {
        let mut city = self.get_city(id).await?;
        let body = payload::require_object(body)?;
        let patch: CityPatch = payload::decode::<City, _>(body)?;

        city.apply(patch, now());
        self.cities.update(city).await
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the city does not exist, or a
    /// storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_city(&self, id: CityId) -> Result<(), HbnbError> {
        self.get_city(id).await?;
        self.cities.delete(id).await?;
        tracing::info!(city_id = %id, "city deleted");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_cities(&self) -> Result<u64, HbnbError> {
        self.cities.count().await
    }
}
