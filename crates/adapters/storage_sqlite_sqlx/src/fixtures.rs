//! Seed rows for repository tests.

use sqlx::SqlitePool;

use hbnb_app::ports::{CityRepository, StateRepository, UserRepository};
use hbnb_domain::city::{City, NewCity};
use hbnb_domain::id::{CityId, UserId};
use hbnb_domain::state::{NewState, State};
use hbnb_domain::time::now;
use hbnb_domain::user::{NewUser, User};

use crate::city_repo::SqliteCityRepository;
use crate::state_repo::SqliteStateRepository;
use crate::user_repo::SqliteUserRepository;

pub(crate) fn user(email: &str) -> User {
    User::create(
        NewUser {
            email: email.to_string(),
            password: "secret".to_string(),
            first_name: "Bob".to_string(),
            last_name: String::new(),
        },
        now(),
    )
}

/// Insert a state, one of its cities and a user; return the city and user ids.
pub(crate) async fn seed_city_and_user(pool: &SqlitePool) -> (CityId, UserId) {
    let state = State::create(
        NewState {
            name: "California".to_string(),
        },
        now(),
    );
    let city = City::create(
        state.id,
        NewCity {
            name: "San Francisco".to_string(),
        },
        now(),
    );
    let user = user("host@example.com");
    let ids = (city.id, user.id);

    SqliteStateRepository::new(pool.clone())
        .create(state)
        .await
        .unwrap();
    SqliteCityRepository::new(pool.clone())
        .create(city)
        .await
        .unwrap();
    SqliteUserRepository::new(pool.clone())
        .create(user)
        .await
        .unwrap();
    ids
}
