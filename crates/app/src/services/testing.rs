//! In-memory implementation of every storage port, shared by the service tests.

use std::sync::{Arc, Mutex};

use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{AmenityId, CityId, PlaceId, ReviewId, StateId, UserId};
use hbnb_domain::payload::Payload;
use hbnb_domain::place::Place;
use hbnb_domain::review::Review;
use hbnb_domain::state::State;
use hbnb_domain::user::User;

use crate::ports::{
    AmenityRepository, CityRepository, PlaceRepository, ReviewRepository, StateRepository,
    UserRepository,
};

#[derive(Default)]
struct Tables {
    states: Vec<State>,
    cities: Vec<City>,
    amenities: Vec<Amenity>,
    users: Vec<User>,
    places: Vec<Place>,
    reviews: Vec<Review>,
}

impl Tables {
    fn drop_place(&mut self, id: PlaceId) {
        self.places.retain(|p| p.id != id);
        self.reviews.retain(|r| r.place_id != id);
    }

    fn drop_city(&mut self, id: CityId) {
        let places: Vec<PlaceId> = self
            .places
            .iter()
            .filter(|p| p.city_id == id)
            .map(|p| p.id)
            .collect();
        for place in places {
            self.drop_place(place);
        }
        self.cities.retain(|c| c.id != id);
    }
}

/// One shared store; clones see the same data.
#[derive(Clone, Default)]
pub(crate) struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

/// Build a payload from a `json!` object literal.
pub(crate) fn body(value: serde_json::Value) -> Option<Payload> {
    match value {
        serde_json::Value::Object(map) => Some(map),
        _ => None,
    }
}

fn upsert<T: Clone, K: PartialEq>(rows: &mut Vec<T>, row: &T, key: impl Fn(&T) -> K) {
    match rows.iter_mut().find(|r| key(r) == key(row)) {
        Some(slot) => *slot = row.clone(),
        None => rows.push(row.clone()),
    }
}

impl StateRepository for InMemoryStore {
    async fn create(&self, state: State) -> Result<State, HbnbError> {
        self.tables.lock().unwrap().states.push(state.clone());
        Ok(state)
    }

    async fn get_by_id(&self, id: StateId) -> Result<Option<State>, HbnbError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.states.iter().find(|s| s.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<State>, HbnbError> {
        Ok(self.tables.lock().unwrap().states.clone())
    }

    async fn update(&self, state: State) -> Result<State, HbnbError> {
        upsert(&mut self.tables.lock().unwrap().states, &state, |s| s.id);
        Ok(state)
    }

    async fn delete(&self, id: StateId) -> Result<(), HbnbError> {
        let mut tables = self.tables.lock().unwrap();
        let cities: Vec<CityId> = tables
            .cities
            .iter()
            .filter(|c| c.state_id == id)
            .map(|c| c.id)
            .collect();
        for city in cities {
            tables.drop_city(city);
        }
        tables.states.retain(|s| s.id != id);
        Ok(())
    }

    async fn count(&self) -> Result<u64, HbnbError> {
        Ok(self.tables.lock().unwrap().states.len() as u64)
    }
}

impl CityRepository for InMemoryStore {
    async fn create(&self, city: City) -> Result<City, HbnbError> {
        self.tables.lock().unwrap().cities.push(city.clone());
        Ok(city)
    }

    async fn get_by_id(&self, id: CityId) -> Result<Option<City>, HbnbError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.cities.iter().find(|c| c.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<City>, HbnbError> {
        Ok(self.tables.lock().unwrap().cities.clone())
    }

    async fn find_by_state_id(&self, state_id: StateId) -> Result<Vec<City>, HbnbError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .cities
            .iter()
            .filter(|c| c.state_id == state_id)
            .cloned()
            .collect())
    }

    async fn update(&self, city: City) -> Result<City, HbnbError> {
        upsert(&mut self.tables.lock().unwrap().cities, &city, |c| c.id);
        Ok(city)
    }

    async fn delete(&self, id: CityId) -> Result<(), HbnbError> {
        self.tables.lock().unwrap().drop_city(id);
        Ok(())
    }

    async fn count(&self) -> Result<u64, HbnbError> {
        Ok(self.tables.lock().unwrap().cities.len() as u64)
    }
}

impl AmenityRepository for InMemoryStore {
    async fn create(&self, amenity: Amenity) -> Result<Amenity, HbnbError> {
        self.tables.lock().unwrap().amenities.push(amenity.clone());
        Ok(amenity)
    }

    async fn get_by_id(&self, id: AmenityId) -> Result<Option<Amenity>, HbnbError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.amenities.iter().find(|a| a.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Amenity>, HbnbError> {
        Ok(self.tables.lock().unwrap().amenities.clone())
    }

    async fn update(&self, amenity: Amenity) -> Result<Amenity, HbnbError> {
        upsert(&mut self.tables.lock().unwrap().amenities, &amenity, |a| a.id);
        Ok(amenity)
    }

    async fn delete(&self, id: AmenityId) -> Result<(), HbnbError> {
        self.tables.lock().unwrap().amenities.retain(|a| a.id != id);
        Ok(())
    }

    async fn count(&self) -> Result<u64, HbnbError> {
        Ok(self.tables.lock().unwrap().amenities.len() as u64)
    }
}

impl UserRepository for InMemoryStore {
    async fn create(&self, user: User) -> Result<User, HbnbError> {
        self.tables.lock().unwrap().users.push(user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, HbnbError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<User>, HbnbError> {
        Ok(self.tables.lock().unwrap().users.clone())
    }

    async fn update(&self, user: User) -> Result<User, HbnbError> {
        upsert(&mut self.tables.lock().unwrap().users, &user, |u| u.id);
        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<(), HbnbError> {
        let mut tables = self.tables.lock().unwrap();
        let places: Vec<PlaceId> = tables
            .places
            .iter()
            .filter(|p| p.user_id == id)
            .map(|p| p.id)
            .collect();
        for place in places {
            tables.drop_place(place);
        }
        tables.reviews.retain(|r| r.user_id != id);
        tables.users.retain(|u| u.id != id);
        Ok(())
    }

    async fn count(&self) -> Result<u64, HbnbError> {
        Ok(self.tables.lock().unwrap().users.len() as u64)
    }
}

impl PlaceRepository for InMemoryStore {
    async fn create(&self, place: Place) -> Result<Place, HbnbError> {
        self.tables.lock().unwrap().places.push(place.clone());
        Ok(place)
    }

    async fn get_by_id(&self, id: PlaceId) -> Result<Option<Place>, HbnbError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.places.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_city_id(&self, city_id: CityId) -> Result<Vec<Place>, HbnbError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .places
            .iter()
            .filter(|p| p.city_id == city_id)
            .cloned()
            .collect())
    }

    async fn update(&self, place: Place) -> Result<Place, HbnbError> {
        upsert(&mut self.tables.lock().unwrap().places, &place, |p| p.id);
        Ok(place)
    }

    async fn delete(&self, id: PlaceId) -> Result<(), HbnbError> {
        self.tables.lock().unwrap().drop_place(id);
        Ok(())
    }

    async fn count(&self) -> Result<u64, HbnbError> {
        Ok(self.tables.lock().unwrap().places.len() as u64)
    }
}

impl ReviewRepository for InMemoryStore {
    async fn create(&self, review: Review) -> Result<Review, HbnbError> {
        self.tables.lock().unwrap().reviews.push(review.clone());
        Ok(review)
    }

    async fn get_by_id(&self, id: ReviewId) -> Result<Option<Review>, HbnbError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.reviews.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_place_id(&self, place_id: PlaceId) -> Result<Vec<Review>, HbnbError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .reviews
            .iter()
            .filter(|r| r.place_id == place_id)
            .cloned()
            .collect())
    }

    async fn update(&self, review: Review) -> Result<Review, HbnbError> {
        upsert(&mut self.tables.lock().unwrap().reviews, &review, |r| r.id);
        Ok(review)
    }

    async fn delete(&self, id: ReviewId) -> Result<(), HbnbError> {
        self.tables.lock().unwrap().reviews.retain(|r| r.id != id);
        Ok(())
    }

    async fn count(&self) -> Result<u64, HbnbError> {
        Ok(self.tables.lock().unwrap().reviews.len() as u64)
    }
}
