//! # hbnb-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **storage ports** that adapters must implement, one repository
//!   per resource (`StateRepository`, `CityRepository`, `AmenityRepository`,
//!   `UserRepository`, `PlaceRepository`, `ReviewRepository`)
//! - Define one **service** per resource implementing the CRUD request
//!   contract: parent lookup, payload validation, mutation, persistence
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `hbnb-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
