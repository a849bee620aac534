//! JSON REST handlers for states and the cities nested under them.

use axum::extract::{Path, State as AxumState};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, ReviewRepository, StateRepository,
    UserRepository,
};
use hbnb_domain::city::City;
use hbnb_domain::model::resolve_id;
use hbnb_domain::state::State;

use super::response::{CreateResponse, DeleteResponse, GetResponse, ListResponse};
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// `GET /api/v1/states`
pub async fn list<SR, CR, AR, UR, PR, RR>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, RR>>,
) -> Result<ListResponse<State>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let states = state.state_service.list_states().await?;
    Ok(ListResponse::ok(states))
}

/// `GET /api/v1/states/{id}`
pub async fn get<SR, CR, AR, UR, PR, RR>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
) -> Result<GetResponse<State>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let state_id = resolve_id::<State>(&id)?;
    let found = state.state_service.get_state(state_id).await?;
    Ok(GetResponse::ok(found))
}

/// `POST /api/v1/states`
pub async fn create<SR, CR, AR, UR, PR, RR>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, RR>>,
    JsonBody(body): JsonBody,
) -> Result<CreateResponse<State>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let created = state.state_service.create_state(body).await?;
    Ok(CreateResponse::created(created))
}

/// `PUT /api/v1/states/{id}`
pub async fn update<SR, CR, AR, UR, PR, RR>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<GetResponse<State>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let state_id = resolve_id::<State>(&id)?;
    let updated = state.state_service.update_state(state_id, body).await?;
    Ok(GetResponse::ok(updated))
}

/// `DELETE /api/v1/states/{id}`
pub async fn delete<SR, CR, AR, UR, PR, RR>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, RR>>,
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
    let state_id = resolve_id::<State>(&id)?;
    state.state_service.delete_state(state_id).await?;
    Ok(DeleteResponse::Deleted)
}

/// `GET /api/v1/states/{id}/cities`
pub async fn list_cities<SR, CR, AR, UR, PR, RR>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
) -> Result<ListResponse<City>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let state_id = resolve_id::<State>(&id)?;
    let cities = state.city_service.list_cities_of_state(state_id).await?;
    Ok(ListResponse::ok(cities))
}

/// `POST /api/v1/states/{id}/cities`
pub async fn create_city<SR, CR, AR, UR, PR, RR>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<CreateResponse<City>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let state_id = resolve_id::<State>(&id)?;
    let created = state.city_service.create_city(state_id, body).await?;
    Ok(CreateResponse::created(created))
}
