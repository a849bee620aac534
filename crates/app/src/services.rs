//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.
//!
//! Every mutating use-case follows the same linear contract and stops at the
//! first failure:
//! 1. resolve the parent (`NotFound`)
//! 2. require a JSON object body (`Not a JSON`)
//! 3. require each mandatory key in order (`Missing <key>`)
//! 4. resolve referenced resources such as `user_id` (`NotFound`)
//! 5. decode, mutate, persist

use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::model::Model;

pub mod amenity_service;
pub mod city_service;
pub mod place_service;
pub mod review_service;
pub mod state_service;
pub mod user_service;

#[cfg(test)]
pub(crate) mod testing;

/// Turn the result of a lookup into the resource or a not-found error.
fn found<M: Model>(id: M::Id, value: Option<M>) -> Result<M, HbnbError> {
    value.ok_or_else(|| NotFoundError::new(M::CLASS, id).into())
}
