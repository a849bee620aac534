//! State: a top-level region that owns cities.

use serde::{Deserialize, Serialize};

use crate::id::StateId;
use crate::model::Model;
use crate::time::Timestamp;

/// A state or province.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub id: StateId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields accepted when creating a [`State`].
#[derive(Debug, Deserialize)]
pub struct NewState {
    pub name: String,
}

/// Fields a client may overwrite on an existing [`State`].
///
/// `id`, `created_at` and `updated_at` are not represented and are therefore
/// never applied.
#[derive(Debug, Default, Deserialize)]
pub struct StatePatch {
    pub name: Option<String>,
}

impl State {
    /// Keys that must be present in a creation payload, in check order.
    pub const REQUIRED: &'static [&'static str] = &["name"];

    /// Build a new state with a fresh id, stamped at `now`.
    #[must_use]
    pub fn create(draft: NewState, now: Timestamp) -> Self {
        Self {
            id: StateId::new(),
            name: draft.name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the patched fields and advance `updated_at`.
    pub fn apply(&mut self, patch: StatePatch, now: Timestamp) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        self.updated_at = now;
    }
}

impl Model for State {
    const CLASS: &'static str = "State";
    type Id = StateId;
}
