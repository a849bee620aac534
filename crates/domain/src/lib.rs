//! # hbnb-domain
//!
//! Pure domain model for the hbnb listing service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the six **resources**: [`State`](state::State), [`City`](city::City),
//!   [`Amenity`](amenity::Amenity), [`User`](user::User), [`Place`](place::Place)
//!   and [`Review`](review::Review)
//! - Define the **drafts** (creation input) and **patches** (update input) for each
//!   resource, including which keys a patch may never touch
//! - Validate raw JSON request payloads (`Not a JSON`, `Missing <field>`)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod model;
pub mod payload;
pub mod time;

pub mod amenity;
pub mod city;
pub mod place;
pub mod review;
pub mod state;
pub mod stats;
pub mod user;
