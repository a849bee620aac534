//! Object counts per resource, as reported by `GET /stats`.

use serde::{Deserialize, Serialize};

/// Number of stored objects of each resource, keyed by plural name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub amenities: u64,
    pub cities: u64,
    pub places: u64,
    pub reviews: u64,
    pub states: u64,
    pub users: u64,
}
