//! Review: a user's text review of a [`Place`](crate::place::Place).

use serde::{Deserialize, Serialize};

use crate::id::{PlaceId, ReviewId, UserId};
use crate::model::Model;
use crate::time::Timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub place_id: PlaceId,
    pub user_id: UserId,
    pub text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct NewReview {
    pub text: String,
}

/// Fields a client may overwrite on an existing [`Review`]. The author and
/// the reviewed place are fixed at creation.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewPatch {
    pub text: Option<String>,
}

impl Review {
    pub const REQUIRED: &'static [&'static str] = &["user_id", "text"];

    #[must_use]
    pub fn create(place_id: PlaceId, user_id: UserId, draft: NewReview, now: Timestamp) -> Self {
        Self {
            id: ReviewId::new(),
            place_id,
            user_id,
            text: draft.text,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: ReviewPatch, now: Timestamp) {
        if let Some(text) = patch.text {
            self.text = text;
        }
        self.updated_at = now;
    }
}

impl Model for Review {
    const CLASS: &'static str = "Review";
    type Id = ReviewId;
}
