//! `SQLite` implementation of [`AmenityRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::AmenityRepository;
use hbnb_domain::amenity::Amenity;
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::AmenityId;
use hbnb_domain::model::Model;
use hbnb_domain::time::to_fixed_rfc3339;

use crate::error::StorageError;
use crate::row;

struct Wrapper(Amenity);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Amenity> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Amenity {
            id: row::id(row, "id")?,
            name: row.try_get("name")?,
            created_at: row::timestamp(row, "created_at")?,
            updated_at: row::timestamp(row, "updated_at")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO amenities (id, name, created_at, updated_at) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM amenities WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM amenities ORDER BY created_at, id";
const UPDATE: &str = "UPDATE amenities SET name = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM amenities WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM amenities";

/// `SQLite`-backed amenity repository.
#[derive(Clone)]
pub struct SqliteAmenityRepository {
    pool: SqlitePool,
}

impl SqliteAmenityRepository {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AmenityRepository for SqliteAmenityRepository {
    fn create(
        &self,
        amenity: Amenity,
    ) -> impl Future<Output = Result<Amenity, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(amenity.id.to_string())
                .bind(&amenity.name)
                .bind(to_fixed_rfc3339(amenity.created_at))
                .bind(to_fixed_rfc3339(amenity.updated_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(amenity)
        }
    }

    fn get_by_id(
        &self,
        id: AmenityId,
    ) -> impl Future<Output = Result<Option<Amenity>, HbnbError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Amenity>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        amenity: Amenity,
    ) -> impl Future<Output = Result<Amenity, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&amenity.name)
                .bind(to_fixed_rfc3339(amenity.updated_at))
                .bind(amenity.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError::new(Amenity::CLASS, amenity.id).into());
            }

            Ok(amenity)
        }
    }

    fn delete(&self, id: AmenityId) -> impl Future<Output = Result<(), HbnbError>> + Send {
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
