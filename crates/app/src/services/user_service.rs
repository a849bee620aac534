//! User service: use-cases for managing user accounts.

use hbnb_domain::error::HbnbError;
use hbnb_domain::id::UserId;
use hbnb_domain::payload::{self, Payload};
use hbnb_domain::time::now;
use hbnb_domain::user::{NewUser, User, UserPatch};

use super::found;
use crate::ports::UserRepository;

/// Application service for user CRUD operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, HbnbError> {
        self.repo.get_all().await
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no user with `id` exists, or a
    /// storage error.
    pub async fn get_user(&self, id: UserId) -> Result<User, HbnbError> {
        found(id, self.repo.get_by_id(id).await?)
    }

    /// Validate `body` and register a new user. `email` is checked before
    /// `password`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when the body is rejected, or a
    /// storage error.
    #[tracing::instrument(skip(self, body))]
    pub async fn create_user(&self, body: Option<Payload>) -> Result<User, HbnbError> {
        let body = payload::require_object(body)?;
        payload::require_fields(&body, User::REQUIRED)?;
        let draft: NewUser = payload::decode::<User, _>(body)?;

        let user = self.repo.create(User::create(draft, now())).await?;
        tracing::info!(user_id = %user.id, "user created");
        Ok(user)
    }

    /// Apply the keys of `body` to an existing user. `email` never changes.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the user does not exist,
    /// [`HbnbError::Validation`] when the body is rejected, or a storage error.
    #[tracing::instrument(skip(self, body))]
    pub async fn update_user(&self, id: UserId, body: Option<Payload>) -> Result<User, HbnbError> {
        let mut user = self.get_user(id).await?;
        let body = payload::require_object(body)?;
        let patch: UserPatch = payload::decode::<User, _>(body)?;

        user.apply(patch, now());
        self.repo.update(user).await
    }

    /// Delete a user along with the places they host and the reviews they wrote.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the user does not exist, or a
    /// storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<(), HbnbError> {
        self.get_user(id).await?;
        self.repo.delete(id).await?;
        tracing::info!(user_id = %id, "user deleted");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_users(&self) -> Result<u64, HbnbError> {
        self.repo.count().await
    }
}
