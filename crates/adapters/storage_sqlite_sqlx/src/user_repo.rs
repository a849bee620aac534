//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::UserRepository;
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::UserId;
use hbnb_domain::model::Model;
use hbnb_domain::time::to_fixed_rfc3339;
use hbnb_domain::user::User;

use crate::error::StorageError;
use crate::row;

struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(User {
            id: row::id(row, "id")?,
            email: row.try_get("email")?,
            password: row.try_get("password")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            created_at: row::timestamp(row, "created_at")?,
            updated_at: row::timestamp(row, "updated_at")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO users (id, email, password, first_name, last_name, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM users WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM users ORDER BY created_at, id";
const UPDATE: &str = r"
    UPDATE users
    SET password = ?, first_name = ?, last_name = ?, updated_at = ?
    WHERE id = ?
";
const DELETE_BY_ID: &str = "DELETE FROM users WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM users";

/// `SQLite`-backed user repository.
///
/// Deleting a user removes the places they host and the reviews they wrote.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn create(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(user.id.to_string())
                .bind(&user.email)
                .bind(&user.password)
                .bind(&user.first_name)
                .bind(&user.last_name)
                .bind(to_fixed_rfc3339(user.created_at))
                .bind(to_fixed_rfc3339(user.updated_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(user)
        }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, HbnbError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&user.password)
                .bind(&user.first_name)
                .bind(&user.last_name)
                .bind(to_fixed_rfc3339(user.updated_at))
                .bind(user.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError::new(User::CLASS, user.id).into());
            }

            Ok(user)
        }
    }

    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), HbnbError>> + Send {
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
