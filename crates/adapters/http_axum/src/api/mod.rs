//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod amenities;
#[allow(clippy::missing_errors_doc)]
pub mod cities;
#[allow(clippy::missing_errors_doc)]
pub mod index;
#[allow(clippy::missing_errors_doc)]
pub mod places;
pub mod response;
#[allow(clippy::missing_errors_doc)]
pub mod reviews;
#[allow(clippy::missing_errors_doc)]
pub mod states;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::get;

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, ReviewRepository, StateRepository,
    UserRepository,
};

use crate::state::AppState;

/// Build the `/api/v1` sub-router.
pub fn routes<SR, CR, AR, UR, PR, RR>() -> Router<AppState<SR, CR, AR, UR, PR, RR>>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/status", get(index::status))
        .route("/stats", get(index::stats::<SR, CR, AR, UR, PR, RR>))
        // States
        .route(
            "/states",
            get(states::list::<SR, CR, AR, UR, PR, RR>)
                .post(states::create::<SR, CR, AR, UR, PR, RR>),
        )
        .route(
            "/states/{id}",
            get(states::get::<SR, CR, AR, UR, PR, RR>)
                .put(states::update::<SR, CR, AR, UR, PR, RR>)
                .delete(states::delete::<SR, CR, AR, UR, PR, RR>),
        )
        .route(
            "/states/{id}/cities",
            get(states::list_cities::<SR, CR, AR, UR, PR, RR>)
                .post(states::create_city::<SR, CR, AR, UR, PR, RR>),
        )
        // Cities
        .route("/cities", get(cities::list::<SR, CR, AR, UR, PR, RR>))
        .route(
            "/cities/{id}",
            get(cities::get::<SR, CR, AR, UR, PR, RR>)
                .put(cities::update::<SR, CR, AR, UR, PR, RR>)
                .delete(cities::delete::<SR, CR, AR, UR, PR, RR>),
        )
        .route(
            "/cities/{id}/places",
            get(cities::list_places::<SR, CR, AR, UR, PR, RR>)
                .post(cities::create_place::<SR, CR, AR, UR, PR, RR>),
        )
        // Amenities
        .route(
            "/amenities",
            get(amenities::list::<SR, CR, AR, UR, PR, RR>)
                .post(amenities::create::<SR, CR, AR, UR, PR, RR>),
        )
        .route(
            "/amenities/{id}",
            get(amenities::get::<SR, CR, AR, UR, PR, RR>)
                .put(amenities::update::<SR, CR, AR, UR, PR, RR>)
                .delete(amenities::delete::<SR, CR, AR, UR, PR, RR>),
        )
        // Users
        .route(
            "/users",
            get(users::list::<SR, CR, AR, UR, PR, RR>)
                .post(users::create::<SR, CR, AR, UR, PR, RR>),
        )
        .route(
            "/users/{id}",
            get(users::get::<SR, CR, AR, UR, PR, RR>)
                .put(users::update::<SR, CR, AR, UR, PR, RR>)
                .delete(users::delete::<SR, CR, AR, UR, PR, RR>),
        )
        // Places
        .route(
            "/places/{id}",
            get(places::get::<SR, CR, AR, UR, PR, RR>)
                .put(places::update::<SR, CR, AR, UR, PR, RR>)
                .delete(places::delete::<SR, CR, AR, UR, PR, RR>),
        )
        .route(
            "/places/{id}/reviews",
            get(places::list_reviews::<SR, CR, AR, UR, PR, RR>)
                .post(places::create_review::<SR, CR, AR, UR, PR, RR>),
        )
        // Reviews
        .route(
            "/reviews/{id}",
            get(reviews::get::<SR, CR, AR, UR, PR, RR>)
                .put(reviews::update::<SR, CR, AR, UR, PR, RR>)
                .delete(reviews::delete::<SR, CR, AR, UR, PR, RR>),
        )
}
