//! `SQLite` implementation of [`CityRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::CityRepository;
use hbnb_domain::city::City;
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::{CityId, StateId};
use hbnb_domain::model::Model;
use hbnb_domain::time::to_fixed_rfc3339;

use crate::error::StorageError;
use crate::row;

struct Wrapper(City);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<City> {
        value.map(|w| w.0)
    }

    fn unwrap_all(rows: Vec<Self>) -> Vec<City> {
        rows.into_iter().map(|w| w.0).collect()
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(City {
            id: row::id(row, "id")?,
            state_id: row::id(row, "state_id")?,
            name: row.try_get("name")?,
            created_at: row::timestamp(row, "created_at")?,
            updated_at: row::timestamp(row, "updated_at")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO cities (id, state_id, name, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM cities WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM cities ORDER BY created_at, id";
const SELECT_BY_STATE: &str = "SELECT * FROM cities WHERE state_id = ? ORDER BY created_at, id";
const UPDATE: &str = "UPDATE cities SET name = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM cities WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM cities";

/// `SQLite`-backed city repository.
#[derive(Clone)]
pub struct SqliteCityRepository {
    pool: SqlitePool,
}

impl SqliteCityRepository {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CityRepository for SqliteCityRepository {
    fn create(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(city.id.to_string())
                .bind(city.state_id.to_string())
                .bind(&city.name)
                .bind(to_fixed_rfc3339(city.created_at))
                .bind(to_fixed_rfc3339(city.updated_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(city)
        }
    }

    fn get_by_id(
        &self,
        id: CityId,
    ) -> impl Future<Output = Result<Option<City>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::unwrap_all(rows))
        }
    }

    fn find_by_state_id(
        &self,
        state_id: StateId,
    ) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_STATE)
                .bind(state_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::unwrap_all(rows))
        }
    }

    fn update(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&city.name)
                .bind(to_fixed_rfc3339(city.updated_at))
                .bind(city.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError::new(City::CLASS, city.id).into());
            }

            Ok(city)
        }
    }

    fn delete(&self, id: CityId) -> impl Future<Output = Result<(), HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let count: i64 = sqlx::query_scalar(COUNT)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row::count(count))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::memory_pool;
    use crate::state_repo::SqliteStateRepository;
    use hbnb_app::ports::StateRepository;
    use hbnb_domain::city::NewCity;
    use hbnb_domain::state::{NewState, State};
    use hbnb_domain::time::now;

    struct Fixture {
        states: SqliteStateRepository,
        cities: SqliteCityRepository,
        state_id: StateId,
    }

    async fn setup() -> Fixture {
        let pool = memory_pool().await;
        let states = SqliteStateRepository::new(pool.clone());
        let state = State::create(
            NewState {
                name: "California".to_string(),
            },
            now(),
        );
        let state_id = state.id;
        states.create(state).await.unwrap();

        Fixture {
            states,
            cities: SqliteCityRepository::new(pool),
            state_id,
        }
    }

    fn test_city(state_id: StateId, name: &str) -> City {
        City::create(
            state_id,
            NewCity {
                name: name.to_string(),
            },
            now(),
        )
    }

    #[tokio::test]
    async fn should_create_and_retrieve_city_when_valid() {
        let fx = setup().await;
        let city = test_city(fx.state_id, "Fresno");

        fx.cities.create(city.clone()).await.unwrap();

        let fetched = fx.cities.get_by_id(city.id).await.unwrap().unwrap();
        assert_eq!(fetched, city);
    }

    #[tokio::test]
    async fn should_reject_city_of_unknown_state() {
        let fx = setup().await;
        let result = fx.cities.create(test_city(StateId::new(), "Nowhere")).await;
        assert!(matches!(result, Err(HbnbError::Storage(_))));
    }

    #[tokio::test]
    async fn should_find_cities_by_state() {
        let fx = setup().await;
        let city = test_city(fx.state_id, "Fresno");
        fx.cities.create(city.clone()).await.unwrap();

        let found = fx.cities.find_by_state_id(fx.state_id).await.unwrap();
        assert_eq!(found, vec![city]);
        assert!(
            fx.cities
                .find_by_state_id(StateId::new())
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn should_cascade_when_state_deleted() {
        let fx = setup().await;
        fx.cities
            .create(test_city(fx.state_id, "Fresno"))
            .await
            .unwrap();
        fx.cities
            .create(test_city(fx.state_id, "Napa"))
            .await
            .unwrap();
        assert_eq!(fx.cities.count().await.unwrap(), 2);

        fx.states.delete(fx.state_id).await.unwrap();

        assert_eq!(fx.cities.count().await.unwrap(), 0);
        assert!(fx.cities.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_update_name_when_exists() {
        let fx = setup().await;
        let mut city = test_city(fx.state_id, "Fresno");
        fx.cities.create(city.clone()).await.unwrap();

        city.name = "Napa".to_string();
        fx.cities.update(city.clone()).await.unwrap();

        let fetched = fx.cities.get_by_id(city.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Napa");
    }
}
