//! City: belongs to a [`State`](crate::state::State) and owns places.

use serde::{Deserialize, Serialize};

use crate::id::{CityId, StateId};
use crate::model::Model;
use crate::time::Timestamp;

/// A city inside a state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub state_id: StateId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields accepted when creating a [`City`]. The owning state comes from the
/// request path, not the body.
#[derive(Debug, Deserialize)]
pub struct NewCity {
    pub name: String,
}

/// Fields a client may overwrite on an existing [`City`]. `state_id` is fixed
/// at creation.
#[derive(Debug, Default, Deserialize)]
pub struct CityPatch {
    pub name: Option<String>,
}

impl City {
    pub const REQUIRED: &'static [&'static str] = &["name"];

    #[must_use]
    pub fn create(state_id: StateId, draft: NewCity, now: Timestamp) -> Self {
        Self {
            id: CityId::new(),
            state_id,
            name: draft.name,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: CityPatch, now: Timestamp) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        self.updated_at = now;
    }
}

impl Model for City {
    const CLASS: &'static str = "City";
    type Id = CityId;
}
