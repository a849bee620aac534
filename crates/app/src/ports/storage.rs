//! Storage port: repository traits for persistence.
//!
//! Every repository offers `create`, `get_by_id`, `update`, `delete` and
//! `count`. Resources listed at the top level also offer `get_all`; owned
//! resources list the children of one parent instead.
//!
//! Deleting a parent removes its children (state → cities → places → reviews,
//! user → places and reviews).

use std::future::Future;

use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{AmenityId, CityId, PlaceId, ReviewId, StateId, UserId};
use hbnb_domain::place::Place;
use hbnb_domain::review::Review;
use hbnb_domain::state::State;
use hbnb_domain::user::User;

/// Repository for persisting and querying [`State`]s.
pub trait StateRepository {
    /// Persist a new state.
    fn create(&self, state: State) -> impl Future<Output = Result<State, HbnbError>> + Send;

    /// Get a state by its unique identifier.
    fn get_by_id(
        &self,
        id: StateId,
    ) -> impl Future<Output = Result<Option<State>, HbnbError>> + Send;

    /// Get all states, oldest first.
    fn get_all(&self) -> impl Future<Output = Result<Vec<State>, HbnbError>> + Send;

    /// Overwrite a stored state.
    ///
    /// Fails with [`HbnbError::NotFound`] when the state is no longer stored.
    fn update(&self, state: State) -> impl Future<Output = Result<State, HbnbError>> + Send;

    /// Delete a state and everything it owns.
    fn delete(&self, id: StateId) -> impl Future<Output = Result<(), HbnbError>> + Send;

    /// Number of stored states.
    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send;
}

/// Repository for persisting and querying [`City`]s.
pub trait CityRepository {
    fn create(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send;

    fn get_by_id(&self, id: CityId)
    -> impl Future<Output = Result<Option<City>, HbnbError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send;

    /// Get the cities of one state, oldest first.
    fn find_by_state_id(
        &self,
        state_id: StateId,
    ) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send;

    fn update(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send;

    fn delete(&self, id: CityId) -> impl Future<Output = Result<(), HbnbError>> + Send;

    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send;
}

/// Repository for persisting and querying [`Amenity`] records.
pub trait AmenityRepository {
    fn create(&self, amenity: Amenity)
    -> impl Future<Output = Result<Amenity, HbnbError>> + Send;

    fn get_by_id(
        &self,
        id: AmenityId,
    ) -> impl Future<Output = Result<Option<Amenity>, HbnbError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Amenity>, HbnbError>> + Send;

    fn update(&self, amenity: Amenity)
    -> impl Future<Output = Result<Amenity, HbnbError>> + Send;

    fn delete(&self, id: AmenityId) -> impl Future<Output = Result<(), HbnbError>> + Send;

    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send;
}

/// Repository for persisting and querying [`User`]s.
pub trait UserRepository {
    fn create(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send;

    fn get_by_id(&self, id: UserId)
    -> impl Future<Output = Result<Option<User>, HbnbError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HbnbError>> + Send;

    fn update(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send;

    /// Delete a user together with the places they host and the reviews they wrote.
    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), HbnbError>> + Send;

    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send;
}

/// Repository for persisting and querying [`Place`]s.
pub trait PlaceRepository {
    fn create(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send;

    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, HbnbError>> + Send;

    /// Get the places of one city, oldest first.
    fn find_by_city_id(
        &self,
        city_id: CityId,
    ) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send;

    fn update(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send;

    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<(), HbnbError>> + Send;

    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send;
}

/// Repository for persisting and querying [`Review`]s.
pub trait ReviewRepository {
    fn create(&self, review: Review) -> impl Future<Output = Result<Review, HbnbError>> + Send;

    fn get_by_id(
        &self,
        id: ReviewId,
    ) -> impl Future<Output = Result<Option<Review>, HbnbError>> + Send;

    /// Get the reviews of one place, oldest first.
    fn find_by_place_id(
        &self,
        place_id: PlaceId,
    ) -> impl Future<Output = Result<Vec<Review>, HbnbError>> + Send;

    fn update(&self, review: Review) -> impl Future<Output = Result<Review, HbnbError>> + Send;

    fn delete(&self, id: ReviewId) -> impl Future<Output = Result<(), HbnbError>> + Send;

    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send;
}
