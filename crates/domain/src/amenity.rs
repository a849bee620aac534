//! Amenity: a feature a place can offer (wifi, pool, …).

use serde::{Deserialize, Serialize};

use crate::id::AmenityId;
use crate::model::Model;
use crate::time::Timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: AmenityId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct NewAmenity {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct AmenityPatch {
    pub name: Option<String>,
}

impl Amenity {
    pub const REQUIRED: &'static [&'static str] = &["name"];

    #[must_use]
    pub fn create(draft: NewAmenity, now: Timestamp) -> Self {
        Self {
            id: AmenityId::new(),
            name: draft.name,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: AmenityPatch, now: Timestamp) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        self.updated_at = now;
    }
}

impl Model for Amenity {
    const CLASS: &'static str = "Amenity";
    type Id = AmenityId;
}
