//! JSON REST handlers for amenities.

use axum::extract::{Path, State};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, ReviewRepository, StateRepository,
    UserRepository,
};
use hbnb_domain::amenity::Amenity;
use hbnb_domain::model::resolve_id;

use super::response::{CreateResponse, DeleteResponse, GetResponse, ListResponse};
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// `GET /api/v1/amenities`
pub async fn list<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
) -> Result<ListResponse<Amenity>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let amenities = state.amenity_service.list_amenities().await?;
    Ok(ListResponse::ok(amenities))
}

/// `GET /api/v1/amenities/{id}`
pub async fn get<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
) -> Result<GetResponse<Amenity>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let amenity_id = resolve_id::<Amenity>(&id)?;
    let amenity = state.amenity_service.get_amenity(amenity_id).await?;
    Ok(GetResponse::ok(amenity))
}

/// `POST /api/v1/amenities`
pub async fn create<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    JsonBody(body): JsonBody,
) -> Result<CreateResponse<Amenity>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let created = state.amenity_service.create_amenity(body).await?;
    Ok(CreateResponse::created(created))
}

/// `PUT /api/v1/amenities/{id}`
pub async fn update<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<GetResponse<Amenity>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let amenity_id = resolve_id::<Amenity>(&id)?;
    let updated = state.amenity_service.update_amenity(amenity_id, body).await?;
    Ok(GetResponse::ok(updated))
}

/// `DELETE /api/v1/amenities/{id}`
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
    let amenity_id = resolve_id::<Amenity>(&id)?;
    state.amenity_service.delete_amenity(amenity_id).await?;
    Ok(DeleteResponse::Deleted)
}
