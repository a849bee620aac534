//! `SQLite` implementation of [`PlaceRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::PlaceRepository;
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::{CityId, PlaceId};
use hbnb_domain::model::Model;
use hbnb_domain::place::Place;
use hbnb_domain::time::to_fixed_rfc3339;

use crate::error::StorageError;
use crate::row;

struct Wrapper(Place);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Place> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Place {
            id: row::id(row, "id")?,
            city_id: row::id(row, "city_id")?,
            user_id: row::id(row, "user_id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            number_rooms: row.try_get("number_rooms")?,
            number_bathrooms: row.try_get("number_bathrooms")?,
            max_guest: row.try_get("max_guest")?,
            price_by_night: row.try_get("price_by_night")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            created_at: row::timestamp(row, "created_at")?,
            updated_at: row::timestamp(row, "updated_at")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO places (
        id, city_id, user_id, name, description,
        number_rooms, number_bathrooms, max_guest, price_by_night,
        latitude, longitude, created_at, updated_at
    )
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM places WHERE id = ?";
const SELECT_BY_CITY: &str = "SELECT * FROM places WHERE city_id = ? ORDER BY created_at, id";
const UPDATE: &str = r"
    UPDATE places
    SET name = ?, description = ?,
        number_rooms = ?, number_bathrooms = ?, max_guest = ?, price_by_night = ?,
        latitude = ?, longitude = ?, updated_at = ?
    WHERE id = ?
";
const DELETE_BY_ID: &str = "DELETE FROM places WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM places";

/// `SQLite`-backed place repository.
#[derive(Clone)]
pub struct SqlitePlaceRepository {
    pool: SqlitePool,
}

impl SqlitePlaceRepository {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlaceRepository for SqlitePlaceRepository {
    fn create(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(place.id.to_string())
                .bind(place.city_id.to_string())
                .bind(place.user_id.to_string())
                .bind(&place.name)
                .bind(&place.description)
                .bind(place.number_rooms)
                .bind(place.number_bathrooms)
                .bind(place.max_guest)
                .bind(place.price_by_night)
                .bind(place.latitude)
                .bind(place.longitude)
                .bind(to_fixed_rfc3339(place.created_at))
                .bind(to_fixed_rfc3339(place.updated_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(place)
        }
    }

    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, HbnbError>> + Send {
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

    fn find_by_city_id(
        &self,
        city_id: CityId,
    ) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_CITY)
                .bind(city_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&place.name)
                .bind(&place.description)
                .bind(place.number_rooms)
                .bind(place.number_bathrooms)
                .bind(place.max_guest)
                .bind(place.price_by_night)
                .bind(place.latitude)
                .bind(place.longitude)
                .bind(to_fixed_rfc3339(place.updated_at))
                .bind(place.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError::new(Place::CLASS, place.id).into());
            }

            Ok(place)
        }
    }

    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<(), HbnbError>> + Send {
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
