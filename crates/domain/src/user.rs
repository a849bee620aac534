//! User: an account that hosts places and writes reviews.

use serde::{Deserialize, Serialize};

use crate::id::UserId;
use crate::model::Model;
use crate::time::Timestamp;

/// A registered user.
///
/// `password` is stored but never serialized back to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields accepted when creating a [`User`].
#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Fields a client may overwrite on an existing [`User`].
///
/// `email` identifies the account and is fixed at creation.
#[derive(Debug, Default, Deserialize)]
pub struct UserPatch {
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Keys that must be present in a creation payload, in check order.
    pub const REQUIRED: &'static [&'static str] = &["email", "password"];

    #[must_use]
    pub fn create(draft: NewUser, now: Timestamp) -> Self {
        Self {
            id: UserId::new(),
            email: draft.email,
            password: draft.password,
            first_name: draft.first_name,
            last_name: draft.last_name,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: UserPatch, now: Timestamp) {
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        self.updated_at = now;
    }
}

impl Model for User {
    const CLASS: &'static str = "User";
    type Id = UserId;
}
