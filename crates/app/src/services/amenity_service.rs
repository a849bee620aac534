//! Amenity service: use-cases for managing amenities.

use hbnb_domain::amenity::{Amenity, AmenityPatch, NewAmenity};
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::AmenityId;
use hbnb_domain::payload::{self, Payload};
use hbnb_domain::time::now;

use super::found;
use crate::ports::AmenityRepository;

/// Application service for amenity CRUD operations.
pub struct AmenityService<R> {
    repo: R,
}

impl<R: AmenityRepository> AmenityService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_amenities(&self) -> Result<Vec<Amenity>, HbnbError> {
        self.repo.get_all().await
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no amenity with `id` exists, or a
    /// storage error.
    pub async fn get_amenity(&self, id: AmenityId) -> Result<Amenity, HbnbError> {
        found(id, self.repo.get_by_id(id).await?)
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when the body is rejected, or a
    /// storage error.
    #[tracing::instrument(skip(self, body))]
    pub async fn create_amenity(&self, body: Option<Payload>) -> Result<Amenity, HbnbError> {
        let body = payload::require_object(body)?;
        payload::require_fields(&body, Amenity::REQUIRED)?;
        let draft: NewAmenity = payload::decode::<Amenity, _>(body)?;

        let amenity = self.repo.create(Amenity::create(draft, now())).await?;
        tracing::info!(amenity_id = %amenity.id, "amenity created");
        Ok(amenity)
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the amenity does not exist,
    /// [`HbnbError::Validation`] when the body is rejected, or a storage error.
    #[tracing::instrument(skip(self, body))]
    pub async fn update_amenity(
        &self,
        id: AmenityId,
        body: Option<Payload>,
    ) -> Result<Amenity, HbnbError> {
        let mut amenity = self.get_amenity(id).await?;
        let body = payload::require_object(body)?;
        let patch: AmenityPatch = payload::decode::<Amenity, _>(body)?;

        amenity.apply(patch, now());
        self.repo.update(amenity).await
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the amenity does not exist, or a
    /// storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_amenity(&self, id: AmenityId) -> Result<(), HbnbError> {
        self.get_amenity(id).await?;
        self.repo.delete(id).await?;
        tracing::info!(amenity_id = %id, "amenity deleted");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_amenities(&self) -> Result<u64, HbnbError> {
        self.repo.count().await
    }
}
