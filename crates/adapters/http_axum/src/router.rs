//! Axum router assembly.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, ReviewRepository, StateRepository,
    UserRepository,
};

use crate::error::route_not_found;
use crate::state::AppState;

/// The served application: the API router behind trailing-slash trimming.
pub type App = NormalizePath<Router>;

/// Build the top-level application.
///
/// Mounts the API under `/api/v1` and answers every unknown path with a JSON
/// 404. Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem, and permissive CORS.
///
/// A trailing slash is trimmed before routing, so `/api/v1/states/` reaches
/// the same handler as `/api/v1/states`. The trimming wraps the [`Router`]
/// because a layer added inside it would only run after a route matched.
pub fn build<SR, CR, AR, UR, PR, RR>(state: AppState<SR, CR, AR, UR, PR, RR>) -> App
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let router = Router::new()
        .nest("/api/v1", crate::api::routes())
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    NormalizePath::trim_trailing_slash(router)
}
