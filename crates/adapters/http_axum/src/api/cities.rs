//! JSON REST handlers for cities and the places listed in them.

use axum::extract::{Path, State};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, ReviewRepository, StateRepository,
    UserRepository,
};
use hbnb_domain::city::City;
use hbnb_domain::model::resolve_id;
use hbnb_domain::place::Place;

use super::response::{CreateResponse, DeleteResponse, GetResponse, ListResponse};
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// `GET /api/v1/cities`
pub async fn list<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
) -> Result<ListResponse<City>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let cities = state.city_service.list_cities().await?;
    Ok(ListResponse::ok(cities))
}

/// `GET /api/v1/cities/{id}`
pub async fn get<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
) -> Result<GetResponse<City>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let city_id = resolve_id::<City>(&id)?;
    let city = state.city_service.get_city(city_id).await?;
    Ok(GetResponse::ok(city))
}

/// `PUT /api/v1/cities/{id}`
pub async fn update<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<GetResponse<City>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let city_id = resolve_id::<City>(&id)?;
    let updated = state.city_service.update_city(city_id, body).await?;
    Ok(GetResponse::ok(updated))
}

/// `DELETE /api/v1/cities/{id}`
pub async fn delete<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let city_id = resolve_id::<City>(&id)?;
    state.city_service.delete_city(city_id).await?;
    Ok(DeleteResponse::Deleted)
}

/// `GET /api/v1/cities/{id}/places`
pub async fn list_places<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
) -> Result<ListResponse<Place>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let parent_id = resolve_id::<City>(&id)?;
    let places = state.place_service.list_places_of_city(parent_id).await?;
    Ok(ListResponse::ok(places))
}

/// `POST /api/v1/cities/{id}/places`
pub async fn create_place<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<CreateResponse<Place>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let parent_id = resolve_id::<City>(&id)?;
    let created = state.place_service.create_place(parent_id, body).await?;
    Ok(CreateResponse::created(created))
}
