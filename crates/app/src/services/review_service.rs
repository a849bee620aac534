//! Review service: use-cases for managing reviews of a place.

use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{PlaceId, ReviewId, UserId};
use hbnb_domain::payload::{self, Payload};
use hbnb_domain::place::Place;
use hbnb_domain::review::{NewReview, Review, ReviewPatch};
use hbnb_domain::time::now;
use hbnb_domain::user::User;

use super::found;
use crate::ports::{PlaceRepository, ReviewRepository, UserRepository};

/// Application service for review CRUD operations.
pub struct ReviewService<RR, PR, UR> {
    reviews: RR,
    places: PR,
    users: UR,
}

impl<RR, PR, UR> ReviewService<RR, PR, UR>
where
    RR: ReviewRepository,
    PR: PlaceRepository,
    UR: UserRepository,
{
    pub fn new(reviews: RR, places: PR, users: UR) -> Self {
        Self {
            reviews,
            places,
            users,
        }
    }

    async fn require_place(&self, id: PlaceId) -> Result<Place, HbnbError> {
        found(id, self.places.get_by_id(id).await?)
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the place does not exist, or a
    /// storage error.
    pub async fn list_reviews_of_place(
        &self,
        place_id: PlaceId,
    ) -> Result<Vec<Review>, HbnbError> {
        self.require_place(place_id).await?;
        self.reviews.find_by_place_id(place_id).await
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no review with `id` exists, or a
    /// storage error.
    pub async fn get_review(&self, id: ReviewId) -> Result<Review, HbnbError> {
        found(id, self.reviews.get_by_id(id).await?)
    }

    /// Validate `body` and attach a new review to `place_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] for an unknown place or author,
    /// [`HbnbError::Validation`] when the body is rejected, or a storage error.
    #[tracing::instrument(skip(self, body))]
    pub async fn create_review(
        &self,
        place_id: PlaceId,
        body: Option<Payload>,
    ) -> Result<Review, HbnbError> {
        self.require_place(place_id).await?;
        let body = payload::require_object(body)?;
        payload::require_fields(&body, Review::REQUIRED)?;
        let user_id: UserId = payload::reference::<User>(&body, "user_id")?;
        found(user_id, self.users.get_by_id(user_id).await?)?;
        let draft: NewReview = payload::decode::<Review, _>(body)?;

        let review = self
            .reviews
            .create(Review::create(place_id, user_id, draft, now()))
            .await?;
        tracing::info!(review_id = %review.id, %place_id, "review created");
        Ok(review)
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the review does not exist,
    /// [`HbnbError::Validation`] when the body is rejected, or a storage error.
    #[tracing::instrument(skip(self, body))]
    pub async fn update_review(
        &self,
        id: ReviewId,
        body: Option<Payload>,
    ) -> Result<Review, HbnbError> {
        let mut review = self.get_review(id).await?;
        let body = payload::require_object(body)?;
        let patch: ReviewPatch = payload::decode::<Review, _>(body)?;

        review.apply(patch, now());
        self.reviews.update(review).await
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the review does not exist, or a
    /// storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_review(&self, id: ReviewId) -> Result<(), HbnbError> {
        self.get_review(id).await?;
        self.reviews.delete(id).await?;
        tracing::info!(review_id = %id, "review deleted");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_reviews(&self) -> Result<u64, HbnbError> {
        self.reviews.count().await
    }
}
