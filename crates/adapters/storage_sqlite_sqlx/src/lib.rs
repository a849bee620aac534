//! # hbnb-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `hbnb-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! Cascading deletes are delegated to `ON DELETE CASCADE` foreign keys.
//!
//! ## Dependency rule
//! Depends on `hbnb-app` (for port traits) and `hbnb-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod amenity_repo;
mod city_repo;
mod error;
#[cfg(test)]
mod fixtures;
mod place_repo;
mod pool;
mod review_repo;
mod row;
mod state_repo;
mod user_repo;

pub use amenity_repo::SqliteAmenityRepository;
pub use city_repo::SqliteCityRepository;
pub use error::StorageError;
pub use place_repo::SqlitePlaceRepository;
pub use pool::{Config, Database};
pub use review_repo::SqliteReviewRepository;
pub use state_repo::SqliteStateRepository;
pub use user_repo::SqliteUserRepository;
