//! `SQLite` implementation of [`ReviewRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::ReviewRepository;
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::{PlaceId, ReviewId};
use hbnb_domain::model::Model;
use hbnb_domain::review::Review;
use hbnb_domain::time::to_fixed_rfc3339;

use crate::error::StorageError;
use crate::row;

struct Wrapper(Review);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Review> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Review {
            id: row::id(row, "id")?,
            place_id: row::id(row, "place_id")?,
            user_id: row::id(row, "user_id")?,
            text: row.try_get("text")?,
            created_at: row::timestamp(row, "created_at")?,
            updated_at: row::timestamp(row, "updated_at")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO reviews (id, place_id, user_id, text, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM reviews WHERE id = ?";
const SELECT_BY_PLACE: &str = "SELECT * FROM reviews WHERE place_id = ? ORDER BY created_at, id";
const UPDATE: &str = "UPDATE reviews SET text = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM reviews WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM reviews";

/// `SQLite`-backed review repository.
#[derive(Clone)]
pub struct SqliteReviewRepository {
    pool: SqlitePool,
}

impl SqliteReviewRepository {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReviewRepository for SqliteReviewRepository {
    fn create(&self, review: Review) -> impl Future<Output = Result<Review, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(review.id.to_string())
                .bind(review.place_id.to_string())
                .bind(review.user_id.to_string())
                .bind(&review.text)
                .bind(to_fixed_rfc3339(review.created_at))
                .bind(to_fixed_rfc3339(review.updated_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(review)
        }
    }

    fn get_by_id(
        &self,
        id: ReviewId,
    ) -> impl Future<Output = Result<Option<Review>, HbnbError>> + Send {
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

    fn find_by_place_id(
        &self,
        place_id: PlaceId,
    ) -> impl Future<Output = Result<Vec<Review>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_PLACE)
                .bind(place_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, review: Review) -> impl Future<Output = Result<Review, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&review.text)
                .bind(to_fixed_rfc3339(review.updated_at))
                .bind(review.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError::new(Review::CLASS, review.id).into());
            }

            Ok(review)
        }
    }

    fn delete(&self, id: ReviewId) -> impl Future<Output = Result<(), HbnbError>> + Send {
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
